//! Checkpoint - Save/Load Stream Pool State
//!
//! A snapshot carries the exported words of a pool together with the
//! algorithm that produced them and a SHA-256 of the words, so a restore can
//! refuse state taken with a different generator or damaged in transit.
//!
//! # Critical Invariants
//!
//! - **Exact transfer**: restored streams are word-for-word identical
//! - **Algorithm matching**: state only loads into the variant that wrote it

use super::StreamPool;
use crate::error::ConfigError;
use crate::rng::Algorithm;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Serializable copy of a pool's full state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Generator name, e.g. `"xoshiro256**"`
    pub algorithm: String,

    /// Words per stream
    pub width: usize,

    /// Stream-major, word-within-state minor
    pub state: Vec<u64>,

    /// SHA-256 of `state` as little-endian bytes, lowercase hex
    pub state_hash: String,
}

/// Compute the SHA-256 of a word buffer (little-endian encoding)
pub fn compute_state_hash(words: &[u64]) -> String {
    let mut hasher = Sha256::new();
    for word in words {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

impl PoolSnapshot {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| {
            ConfigError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| {
            ConfigError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

impl<A: Algorithm> StreamPool<A> {
    /// Capture the current state of every stream
    pub fn snapshot(&self) -> PoolSnapshot {
        let state = self.export_state();
        PoolSnapshot {
            algorithm: A::NAME.to_string(),
            width: A::WIDTH,
            state_hash: compute_state_hash(&state),
            state,
        }
    }

    /// Rebuild a pool from a snapshot
    ///
    /// Checks, in order: algorithm name, width, hash, then the word-count
    /// rule of [`import`](Self::import).
    pub fn restore(snapshot: &PoolSnapshot) -> Result<Self, ConfigError> {
        if snapshot.algorithm != A::NAME {
            return Err(ConfigError::AlgorithmMismatch {
                expected: A::NAME.to_string(),
                found: snapshot.algorithm.clone(),
            });
        }

        if snapshot.width != A::WIDTH {
            return Err(ConfigError::StateWidth {
                expected: A::WIDTH,
                actual: snapshot.width,
            });
        }

        let computed = compute_state_hash(&snapshot.state);
        if computed != snapshot.state_hash {
            return Err(ConfigError::StateHashMismatch {
                expected: snapshot.state_hash.clone(),
                computed,
            });
        }

        let pool = Self::import(&snapshot.state)?;
        log::debug!("restored {} {} streams from snapshot", pool.size(), A::NAME);
        Ok(pool)
    }
}
