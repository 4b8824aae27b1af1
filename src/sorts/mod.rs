mod comparative_sort;
mod insertion_sort;
mod msd_radix_sort;

pub use comparative_sort::*;
pub use insertion_sort::*;
pub use msd_radix_sort::*;
