use crate::radix_key::{is_valid_shift, KeyOrder};
use crate::sorts::insertion_sort::insertion_sort_bucket;
use crate::tuning_parameters::{Algorithm, TuningParameters};
use crate::utils::*;
use arbitrary_chunks::ArbitraryChunks;
use log::trace;

/// Places every element of `bucket` into the region of its digit at `shift`, following
/// displacement cycles so that no scratch buffer is needed.
///
/// `counts` must be the histogram of `bucket` at `shift` under `order`.
#[inline]
pub fn cycle_permute(bucket: &mut [i32], counts: &[usize; 256], shift: u32, order: KeyOrder) {
    let mut heads = get_prefix_sums(counts);
    let tails = get_end_offsets(counts, &heads);

    for d in 0..256 {
        while heads[d] != tails[d] {
            let mut value = bucket[heads[d]];
            let mut y = order.digit(value, shift);

            while y != d {
                std::mem::swap(&mut value, &mut bucket[heads[y]]);
                heads[y] += 1;
                y = order.digit(value, shift);
            }

            bucket[heads[d]] = value;
            heads[d] += 1;
        }
    }
}

/// One digit pass over `bucket`, then recursion into each child bucket with the next digit.
///
/// The pass always runs, regardless of length. [`TuningParameters::pick_algorithm`] decides
/// whether each child bucket gets another pass or insertion sort.
pub fn msd_radix_sort(tuning: &TuningParameters, bucket: &mut [i32], shift: u32) {
    debug_assert!(is_valid_shift(shift), "invalid shift: {}", shift);

    let counts = get_counts(bucket, shift, tuning.key_order);
    cycle_permute(bucket, &counts, shift, tuning.key_order);

    trace!("({}) partitioned {} elements", shift, bucket.len());

    if shift == 0 {
        // No digits remain
        return;
    }

    let next_shift = shift - 8;

    bucket
        .arbitrary_chunks_mut(&counts)
        .for_each(|chunk| match tuning.pick_algorithm(chunk.len()) {
            Algorithm::Radix => msd_radix_sort(tuning, chunk, next_shift),
            Algorithm::Insertion => insertion_sort_bucket(chunk),
            Algorithm::Skip => {}
        });
}

pub fn msd_radix_sort_adapter(tuning: &TuningParameters, bucket: &mut [i32]) {
    msd_radix_sort(tuning, bucket, tuning.start_shift);
}

/// Sorts `array[offset..end]` starting from the digit at `shift` using the default tuning.
///
/// With `shift == 24` the range ends up ordered by its raw two's-complement bit pattern, so
/// non-negative values come first, followed by negative values. Both groups are ascending.
///
/// Panics if the range is out of bounds for `array`.
pub fn radix_sort(array: &mut [i32], offset: usize, end: usize, shift: u32) {
    msd_radix_sort(&TuningParameters::default(), &mut array[offset..end], shift);
}
