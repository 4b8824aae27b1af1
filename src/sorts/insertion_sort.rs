/// Adjacent-swap insertion sort over a whole bucket.
///
/// Quadratic in the worst case, so the radix sort only hands it buckets at or below the
/// insertion threshold.
#[inline]
pub fn insertion_sort_bucket(bucket: &mut [i32]) {
    for x in 1..bucket.len() {
        let mut y = x;
        while y > 0 && bucket[y - 1] > bucket[y] {
            bucket.swap(y - 1, y);
            y -= 1;
        }
    }
}

/// Sorts `array[offset..end]` ascending in place.
///
/// Panics if the range is out of bounds for `array`.
pub fn insertion_sort(array: &mut [i32], offset: usize, end: usize) {
    insertion_sort_bucket(&mut array[offset..end]);
}
