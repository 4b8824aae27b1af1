use msd_radix::{insertion_sort, radix_sort, Algorithm, KeyOrder, RadixSort, TuningParameters};
use proptest::prelude::*;

fn sorted_by_key(inputs: &[i32], order: KeyOrder) -> Vec<i32> {
    let mut expected = inputs.to_vec();
    expected.sort_unstable_by_key(|v| order.sort_key(*v));
    expected
}

proptest! {
    #[test]
    fn prop_signed_order_matches_std(inputs in prop::collection::vec(any::<i32>(), 0..3_000)) {
        let mut sorted = inputs.clone();
        sorted.radix_sort_builder().with_signed_order().sort();

        let mut expected = inputs;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_non_negative_matches_std(inputs in prop::collection::vec(0..=i32::MAX, 0..3_000)) {
        let mut sorted = inputs.clone();
        let len = sorted.len();
        radix_sort(&mut sorted, 0, len, 24);

        let mut expected = inputs;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_raw_order_is_unsigned_bit_order(inputs in prop::collection::vec(any::<i32>(), 0..3_000)) {
        let mut sorted = inputs.clone();
        sorted.radix_sort_unstable();

        prop_assert_eq!(sorted, sorted_by_key(&inputs, KeyOrder::RawBytes));
    }

    #[test]
    fn prop_narrow_values(inputs in prop::collection::vec(-300i32..300, 0..2_000)) {
        // Lots of duplicates and a sign change in the low bytes
        let mut sorted = inputs.clone();
        sorted.radix_sort_builder().with_signed_order().sort();

        let mut expected = inputs;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_any_threshold(
        inputs in prop::collection::vec(any::<i32>(), 0..1_500),
        threshold in 0usize..200,
    ) {
        let mut sorted = inputs.clone();
        sorted
            .radix_sort_builder()
            .with_insertion_threshold(threshold)
            .sort();

        prop_assert_eq!(sorted, sorted_by_key(&inputs, KeyOrder::RawBytes));
    }

    #[test]
    fn prop_sub_range_only(
        inputs in prop::collection::vec(0..=i32::MAX, 0..500),
        a in 0usize..500,
        b in 0usize..500,
    ) {
        let len = inputs.len();
        let (offset, end) = (a.min(b).min(len), a.max(b).min(len));

        let mut sorted = inputs.clone();
        radix_sort(&mut sorted, offset, end, 24);

        let mut expected = inputs.clone();
        expected[offset..end].sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_insertion_sort_short(inputs in prop::collection::vec(any::<i32>(), 0..=10)) {
        let mut sorted = inputs.clone();
        let len = sorted.len();
        insertion_sort(&mut sorted, 0, len);

        let mut expected = inputs;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_pick_algorithm(len in 0usize..10_000, threshold in 0usize..500) {
        let tuning = TuningParameters { insertion_threshold: threshold, ..Default::default() };
        let algorithm = tuning.pick_algorithm(len);

        match algorithm {
            Algorithm::Skip => prop_assert!(len <= 1),
            Algorithm::Insertion => prop_assert!(len > 1 && len <= threshold),
            Algorithm::Radix => prop_assert!(len > 1 && len > threshold),
        }
    }
}
