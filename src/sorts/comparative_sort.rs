use std::cmp::Ordering;

/// Three-way comparison in the shape a C-style generic sort expects.
#[inline]
pub fn int_cmp(a: &i32, b: &i32) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// The standard library's unstable comparison sort.
pub fn comparative_sort(bucket: &mut [i32]) {
    bucket.sort_unstable();
}

/// A comparison sort that only knows about its elements through an opaque comparator, so every
/// comparison is an indirect call.
pub fn comparator_sort(bucket: &mut [i32], cmp: &dyn Fn(&i32, &i32) -> Ordering) {
    bucket.sort_unstable_by(|a, b| cmp(a, b));
}
