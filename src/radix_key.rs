/// How the bytes of an `i32` are read when bucketing.
///
/// `RawBytes` reads the two's-complement bit pattern as-is, so any value with the sign bit set
/// lands in a top-level bucket >= 128 and sorts after every non-negative value. `Signed` flips
/// the sign bit before extracting digits, which makes the digit order agree with `i32` order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum KeyOrder {
    #[default]
    RawBytes,
    Signed,
}

impl KeyOrder {
    /// The unsigned key whose numeric order is the order a full radix sort produces.
    #[inline]
    pub fn sort_key(self, value: i32) -> u32 {
        match self {
            KeyOrder::RawBytes => value as u32,
            KeyOrder::Signed => (value ^ i32::MIN) as u32,
        }
    }

    #[inline]
    pub fn digit(self, value: i32, shift: u32) -> usize {
        ((self.sort_key(value) >> shift) & 0xFF) as usize
    }
}

/// Number of 8-bit digits in a key.
pub const LEVELS: u32 = 4;

/// Shift selecting the most significant digit of a key.
pub const TOP_SHIFT: u32 = (LEVELS - 1) * 8;

#[inline]
pub const fn is_valid_shift(shift: u32) -> bool {
    shift % 8 == 0 && shift <= TOP_SHIFT
}
