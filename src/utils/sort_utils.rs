use crate::radix_key::KeyOrder;

#[inline]
pub fn get_counts(bucket: &[i32], shift: u32, order: KeyOrder) -> [usize; 256] {
    let mut counts = [0usize; 256];

    for v in bucket.iter() {
        counts[order.digit(*v, shift)] += 1;
    }

    counts
}

#[inline]
pub fn get_prefix_sums(counts: &[usize; 256]) -> [usize; 256] {
    let mut sums = [0usize; 256];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

#[inline]
pub fn get_end_offsets(counts: &[usize; 256], prefix_sums: &[usize; 256]) -> [usize; 256] {
    let mut end_offsets = [0usize; 256];

    end_offsets[0..255].copy_from_slice(&prefix_sums[1..256]);
    end_offsets[255] = counts[255] + prefix_sums[255];

    end_offsets
}

/// Index of the first element that is smaller than its predecessor, if any.
#[inline]
pub fn find_unsorted(bucket: &[i32]) -> Option<usize> {
    bucket
        .windows(2)
        .position(|w| w[0] > w[1])
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use crate::radix_key::KeyOrder;
    use crate::utils::{find_unsorted, get_counts, get_end_offsets, get_prefix_sums};

    #[test]
    pub fn test_get_counts_by_digit() {
        let data = vec![0x0100_0000, 0x0100_00FF, 0x0200_0000, 3, -1];

        let counts = get_counts(&data, 24, KeyOrder::RawBytes);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[2], 1);
        assert_eq!(counts[255], 1);
        assert_eq!(counts.iter().sum::<usize>(), data.len());

        let counts = get_counts(&data, 0, KeyOrder::RawBytes);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[3], 1);
        assert_eq!(counts[255], 2);
    }

    #[test]
    pub fn test_get_counts_signed_moves_negatives_down() {
        let data = vec![-1, 0, i32::MIN];

        let counts = get_counts(&data, 24, KeyOrder::Signed);
        assert_eq!(counts[0x00], 1);
        assert_eq!(counts[0x7F], 1);
        assert_eq!(counts[0x80], 1);
    }

    #[test]
    pub fn test_prefix_sums_and_end_offsets() {
        let mut counts = [0usize; 256];
        counts[0] = 2;
        counts[3] = 5;
        counts[255] = 1;

        let sums = get_prefix_sums(&counts);
        let ends = get_end_offsets(&counts, &sums);

        assert_eq!(sums[0], 0);
        assert_eq!(ends[0], 2);
        assert_eq!(sums[1], 2);
        assert_eq!(ends[1], 2);
        assert_eq!(sums[3], 2);
        assert_eq!(ends[3], 7);
        assert_eq!(sums[255], 7);
        assert_eq!(ends[255], 8);
    }

    #[test]
    pub fn test_find_unsorted() {
        assert_eq!(find_unsorted(&[]), None);
        assert_eq!(find_unsorted(&[1]), None);
        assert_eq!(find_unsorted(&[1, 1, 2, 3]), None);
        assert_eq!(find_unsorted(&[1, 3, 2, 4]), Some(2));
        assert_eq!(find_unsorted(&[0, -1]), Some(1));
    }
}
