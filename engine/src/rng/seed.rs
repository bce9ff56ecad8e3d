//! Seed derivation and seed material
//!
//! An integer seed is expanded into a full register with SplitMix64. The
//! algorithm is fixed so that integer seeds stay portable across
//! implementations:
//!
//! ```text
//! counter = seed
//! for each word:
//!     counter += 0x9e3779b97f4a7c15
//!     z = counter
//!     z = (z ^ (z >> 30)) * 0xbf58476d1ce4e5b9
//!     z = (z ^ (z >> 27)) * 0x94d049bb133111eb
//!     word = z ^ (z >> 31)
//! ```
//!
//! The mix is a bijection on 64-bit values and the `W` counters are distinct,
//! so at most one derived word can be zero. The result is never the all-zero
//! register, including for seed `0`.

use super::xoshiro::Algorithm;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Weyl increment of the SplitMix64 counter
pub const SPLITMIX64_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// One SplitMix64 output; advances `counter`
#[inline]
pub fn splitmix64(counter: &mut u64) -> u64 {
    *counter = counter.wrapping_add(SPLITMIX64_GAMMA);
    let mut z = *counter;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Expand an integer seed into `A::WIDTH` words
pub fn derive<A: Algorithm>(seed: u64) -> A::Words {
    let mut counter = seed;
    let mut words = A::Words::default();
    for w in words.as_mut() {
        *w = splitmix64(&mut counter);
    }
    debug_assert!(words.as_ref().iter().any(|&w| w != 0));
    words
}

/// Seed material accepted by stream pool construction
///
/// Either a single integer, expanded with [`derive`], or a flat word buffer
/// holding one or more complete states back to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedMaterial {
    Integer(u64),
    Words(Vec<u64>),
}

impl SeedMaterial {
    /// Decode a raw byte buffer, 8 bytes per word, little-endian
    ///
    /// The length must be a non-zero multiple of `8 * A::WIDTH`.
    pub fn from_le_bytes<A: Algorithm>(bytes: &[u8]) -> Result<Self, ConfigError> {
        let multiple = 8 * A::WIDTH;
        if bytes.is_empty() || bytes.len() % multiple != 0 {
            return Err(ConfigError::SeedBytes {
                multiple,
                actual: bytes.len(),
            });
        }

        let words = bytes
            .chunks_exact(8)
            .map(|chunk| u64::from_le_bytes(std::array::from_fn(|i| chunk[i])))
            .collect();

        Ok(SeedMaterial::Words(words))
    }

    /// Encode as raw bytes, the inverse of [`from_le_bytes`](Self::from_le_bytes)
    ///
    /// Integer seeds are expanded first, so the output always holds complete
    /// states.
    pub fn to_le_bytes<A: Algorithm>(&self) -> Vec<u8> {
        let words: Vec<u64> = match self {
            SeedMaterial::Integer(seed) => derive::<A>(*seed).as_ref().to_vec(),
            SeedMaterial::Words(words) => words.clone(),
        };
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// Check the word buffer shape against `A::WIDTH`
    pub(crate) fn validate<A: Algorithm>(&self) -> Result<(), ConfigError> {
        match self {
            SeedMaterial::Integer(_) => Ok(()),
            SeedMaterial::Words(words) => {
                if words.is_empty() || words.len() % A::WIDTH != 0 {
                    Err(ConfigError::SeedWords {
                        multiple: A::WIDTH,
                        actual: words.len(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl From<u64> for SeedMaterial {
    fn from(seed: u64) -> Self {
        SeedMaterial::Integer(seed)
    }
}

impl From<Vec<u64>> for SeedMaterial {
    fn from(words: Vec<u64>) -> Self {
        SeedMaterial::Words(words)
    }
}
