//! State Vector and the Core Generator operations on it
//!
//! A [`StateVector`] is the full register of one xoshiro generator. It is
//! never all-zero: every constructor rejects or cannot produce the zero
//! vector, and stepping and jumping are invertible linear maps, so they
//! preserve that.
//!
//! # Example
//! ```
//! use xoshiro_streams::rng::{StateVector, Xoshiro256StarStar};
//!
//! let mut state = StateVector::<Xoshiro256StarStar>::from_seed(42);
//! let word = state.next_u64();
//! let u: f64 = state.unif_rand();
//! assert!(u >= 0.0 && u < 1.0);
//! # let _ = word;
//! ```

use super::real::Real;
use super::seed::derive;
use super::xoshiro::{self, Algorithm, Xoshiro256StarStar};
use crate::error::{ConfigError, DomainError};

/// Fixed-width generator register for algorithm `A`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateVector<A: Algorithm = Xoshiro256StarStar> {
    words: A::Words,
}

impl<A: Algorithm> StateVector<A> {
    /// Wrap raw words, rejecting the all-zero register
    pub fn new(words: A::Words) -> Result<Self, ConfigError> {
        if words.as_ref().iter().all(|&w| w == 0) {
            return Err(ConfigError::AllZeroState);
        }
        Ok(Self { words })
    }

    /// Build from exactly `A::WIDTH` words
    pub fn from_slice(words: &[u64]) -> Result<Self, ConfigError> {
        if words.len() != A::WIDTH {
            return Err(ConfigError::StateWidth {
                expected: A::WIDTH,
                actual: words.len(),
            });
        }
        let mut raw = A::Words::default();
        raw.as_mut().copy_from_slice(words);
        Self::new(raw)
    }

    /// Expand an integer seed into a well-mixed state (see [`derive`])
    pub fn from_seed(seed: u64) -> Self {
        Self {
            words: derive::<A>(seed),
        }
    }

    /// The raw register, word 0 first
    pub fn words(&self) -> &[u64] {
        self.words.as_ref()
    }

    /// Produce one pseudorandom word and advance the state one step
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = A::scramble(&self.words);
        A::step(&mut self.words);
        result
    }

    /// Produce one real in `[0, 1)` from a single draw
    ///
    /// `f64` keeps the top 53 bits scaled by 2^-53; `f32` keeps the top 24
    /// bits scaled by 2^-24.
    #[inline]
    pub fn unif_rand<T: Real>(&mut self) -> T {
        T::from_word(self.next_u64())
    }

    /// Advance by the standard jump distance
    ///
    /// Equivalent to 2^128 calls to [`next_u64`](Self::next_u64) for the
    /// 256-bit variants, 2^256 for the 512-bit ones.
    pub fn jump(&mut self) {
        xoshiro::apply_polynomial::<A>(&mut self.words, &A::JUMP);
    }

    /// Advance by the long jump distance
    ///
    /// Equivalent to 2^192 calls for the 256-bit variants, 2^384 for the
    /// 512-bit ones.
    pub fn long_jump(&mut self) {
        xoshiro::apply_polynomial::<A>(&mut self.words, &A::LONG_JUMP);
    }

    /// Advance by an arbitrary jump polynomial
    ///
    /// Coefficient `k` is bit `k % 64` of word `k / 64`. A polynomial whose
    /// only set coefficient is `k` advances exactly `k` steps. The zero
    /// polynomial would collapse the state and is rejected.
    pub fn apply_jump_polynomial(&mut self, poly: &A::Words) -> Result<(), DomainError> {
        if poly.as_ref().iter().all(|&w| w == 0) {
            return Err(DomainError::ZeroPolynomial);
        }
        xoshiro::apply_polynomial::<A>(&mut self.words, poly);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Xoshiro256Plus, Xoshiro512StarStar};

    #[test]
    fn test_zero_state_rejected() {
        let err = StateVector::<Xoshiro256StarStar>::new([0; 4]).unwrap_err();
        assert_eq!(err, ConfigError::AllZeroState);
        assert_eq!(err.to_string(), "State is all zero");
    }

    #[test]
    fn test_from_slice_wrong_width() {
        let err = StateVector::<Xoshiro512StarStar>::from_slice(&[1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::StateWidth {
                expected: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn test_from_slice_copies_words_in_order() {
        let state = StateVector::<Xoshiro256Plus>::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(state.words(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_next_advances_state() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(12345);
        let before = state;
        state.next_u64();
        assert_ne!(before, state, "State should advance");
    }

    #[test]
    fn test_plus_output_is_sum_of_outer_words() {
        let mut state = StateVector::<Xoshiro256Plus>::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(state.next_u64(), 5);
    }

    #[test]
    fn test_zero_polynomial_rejected_and_state_untouched() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(7);
        let before = state;
        let err = state.apply_jump_polynomial(&[0; 4]).unwrap_err();
        assert_eq!(err, DomainError::ZeroPolynomial);
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_polynomial_matches_jump() {
        let mut a = StateVector::<Xoshiro256StarStar>::from_seed(99);
        let mut b = a;
        a.jump();
        b.apply_jump_polynomial(&Xoshiro256StarStar::JUMP).unwrap();
        assert_eq!(a, b);
    }
}
