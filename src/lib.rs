//! # msd-radix
//!
//! msd-radix is an in-place, most-significant-digit-first radix sort for `i32`, along with the
//! `sortbench` driver that times it against comparison sorts.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.radix_sort_unstable()`. To change how it sorts, use the
//! builder:
//!
//! ```
//! use msd_radix::RadixSort;
//!
//! let mut values = vec![-5, 3, -1, 0, 2];
//! values.radix_sort_builder().with_signed_order().sort();
//!
//! assert_eq!(values, vec![-5, -1, 0, 2, 3]);
//! ```
//!
//! The lower level [`radix_sort`] and [`insertion_sort`] work on a `[offset, end)` range of a
//! buffer instead.
//!
//! ## Algorithm
//!
//! Each pass counts the 8-bit digit of every element at the current shift, turns the counts
//! into bucket boundaries, then moves every element into its bucket by following displacement
//! cycles. No scratch buffer is allocated. Buckets larger than the insertion threshold (64 by
//! default) get another pass on the next digit down, smaller ones are finished with insertion
//! sort.
//!
//! ## Negative values
//!
//! By default digits are the raw two's-complement bytes of each value. Negative values have their
//! top bit set, so they sort *after* all non-negative values:
//!
//! ```
//! use msd_radix::RadixSort;
//!
//! let mut values = vec![-5, 3, -1, 0, 2];
//! values.radix_sort_unstable();
//!
//! assert_eq!(values, vec![0, 2, 3, -5, -1]);
//! ```
//!
//! Use `with_signed_order()` to get plain `i32` ordering.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.


pub mod bench_harness;
mod error;
mod radix_key;
mod radix_sort_builder;
mod sorts;
mod tuning_parameters;
pub mod utils;

#[cfg(any(test, feature = "bench"))]
pub use utils::test_utils;

pub use error::BenchError;
pub use radix_key::KeyOrder;
pub use radix_sort_builder::RadixSortBuilder;
pub use sorts::{comparative_sort, comparator_sort, insertion_sort, int_cmp, radix_sort};
pub use tuning_parameters::{
    Algorithm, TuningParameters, DEFAULT_INSERTION_THRESHOLD, DEFAULT_START_SHIFT,
};

pub trait RadixSort {
    /// radix_sort_unstable sorts in place with the default tuning: raw byte key order, starting
    /// from the top byte, insertion sort for buckets of 64 or fewer.
    fn radix_sort_unstable(&mut self);

    /// radix_sort_builder returns a builder to adjust the tuning before sorting.
    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_>;
}

impl RadixSort for Vec<i32> {
    fn radix_sort_unstable(&mut self) {
        self.radix_sort_builder().sort();
    }

    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_> {
        RadixSortBuilder::new(self)
    }
}

impl RadixSort for [i32] {
    fn radix_sort_unstable(&mut self) {
        self.radix_sort_builder().sort();
    }

    fn radix_sort_builder(&mut self) -> RadixSortBuilder<'_> {
        RadixSortBuilder::new(self)
    }
}
