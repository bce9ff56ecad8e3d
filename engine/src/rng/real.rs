//! Floating-point types the generator can draw into

use num_traits::Float;
use std::fmt::Debug;

/// A real type that can be produced from a raw 64-bit word
///
/// Conversions keep only the upper bits of the word, as many as the
/// mantissa holds, so every value is exact and the result lies in `[0, 1)`.
pub trait Real: Float + Debug + Send + Sync + 'static {
    /// Map a raw word to `[0, 1)`
    fn from_word(word: u64) -> Self;

    /// Convert an `f64` constant into this type
    fn of(x: f64) -> Self;

    /// Widen to `f64` (exact for both implementors)
    fn as_f64(self) -> f64;

    /// Largest representable value strictly below `self`
    fn next_below(self) -> Self;
}

impl Real for f64 {
    #[inline]
    fn from_word(word: u64) -> Self {
        // 53 significant bits, scaled by 2^-53
        (word >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    #[inline]
    fn of(x: f64) -> Self {
        x
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    fn next_below(self) -> Self {
        if self.is_nan() || self == f64::NEG_INFINITY {
            return self;
        }
        if self == 0.0 {
            return -f64::from_bits(1);
        }
        let bits = self.to_bits();
        if self > 0.0 {
            f64::from_bits(bits - 1)
        } else {
            f64::from_bits(bits + 1)
        }
    }
}

impl Real for f32 {
    #[inline]
    fn from_word(word: u64) -> Self {
        // 24 significant bits, scaled by 2^-24
        (word >> 40) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    #[inline]
    fn of(x: f64) -> Self {
        x as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    fn next_below(self) -> Self {
        if self.is_nan() || self == f32::NEG_INFINITY {
            return self;
        }
        if self == 0.0 {
            return -f32::from_bits(1);
        }
        let bits = self.to_bits();
        if self > 0.0 {
            f32::from_bits(bits - 1)
        } else {
            f32::from_bits(bits + 1)
        }
    }
}
