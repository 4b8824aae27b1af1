use crate::radix_key::{is_valid_shift, KeyOrder, TOP_SHIFT};

/// Buckets at or below this length are finished with insertion sort rather than another digit
/// pass.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 64;

/// The first digit examined is the top byte of the key.
pub const DEFAULT_START_SHIFT: u32 = TOP_SHIFT;

/// What to do with a bucket once its parent digit pass is complete.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    Skip,
    Insertion,
    Radix,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TuningParameters {
    pub insertion_threshold: usize,
    pub start_shift: u32,
    pub key_order: KeyOrder,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
            start_shift: DEFAULT_START_SHIFT,
            key_order: KeyOrder::RawBytes,
        }
    }
}

impl TuningParameters {
    pub fn new(insertion_threshold: usize, start_shift: u32, key_order: KeyOrder) -> Self {
        assert!(
            is_valid_shift(start_shift),
            "start shift must be a multiple of 8 no greater than {}, got {}",
            TOP_SHIFT,
            start_shift
        );

        Self {
            insertion_threshold,
            start_shift,
            key_order,
        }
    }

    #[inline]
    pub fn pick_algorithm(&self, len: usize) -> Algorithm {
        if len <= 1 {
            Algorithm::Skip
        } else if len <= self.insertion_threshold {
            Algorithm::Insertion
        } else {
            Algorithm::Radix
        }
    }
}
