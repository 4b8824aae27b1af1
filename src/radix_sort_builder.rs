use crate::radix_key::KeyOrder;
use crate::sorts::msd_radix_sort_adapter;
use crate::tuning_parameters::TuningParameters;

pub struct RadixSortBuilder<'a> {
    data: &'a mut [i32],
    tuning: TuningParameters,
}

impl<'a> RadixSortBuilder<'a> {
    pub(crate) fn new(data: &'a mut [i32]) -> Self {
        Self {
            data,
            tuning: TuningParameters::default(),
        }
    }

    /// Buckets of at most this many elements are finished with insertion sort.
    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.tuning.insertion_threshold = threshold;

        self
    }

    /// Start from the digit at `shift` rather than the top byte. Digits above it are only seen by
    /// the insertion sort fallback.
    ///
    /// Panics unless `shift` is one of 0, 8, 16 or 24.
    pub fn with_start_shift(mut self, shift: u32) -> Self {
        self.tuning = TuningParameters::new(
            self.tuning.insertion_threshold,
            shift,
            self.tuning.key_order,
        );

        self
    }

    /// Order keys as signed integers, so negative values come first.
    pub fn with_signed_order(mut self) -> Self {
        self.tuning.key_order = KeyOrder::Signed;

        self
    }

    /// Order keys by their raw two's-complement bytes. This is the default.
    pub fn with_raw_byte_order(mut self) -> Self {
        self.tuning.key_order = KeyOrder::RawBytes;

        self
    }

    pub fn sort(self) {
        // By definition, this is already sorted
        if self.data.len() <= 1 {
            return;
        }

        msd_radix_sort_adapter(&self.tuning, self.data);
    }
}
