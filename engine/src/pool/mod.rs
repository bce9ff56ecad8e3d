//! Stream Pool - independent generator streams from one root seed
//!
//! A pool owns `n` State Vectors. Stream `i` is either copied from the seed
//! material (when the buffer covers it) or is stream `i - 1` advanced by one
//! jump. Successive streams therefore start 2^128 steps apart (256-bit
//! variants) and never overlap within any realistic sample size.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same `n` and seed material → identical streams
//! - **Prefix stability**: stream `i` does not depend on `n`
//! - **Fixed size**: the stream count never changes after construction
//! - **Exact transfer**: `import(export_state())` reproduces every stream
//!
//! # Concurrency
//!
//! Streams share nothing. Hand distinct streams to distinct workers through
//! [`StreamPool::streams_mut`]; the borrow checker keeps the borrows disjoint.
//! Whole-pool operations take `&mut self` and so cannot race with them.
//!
//! # Example
//!
//! ```
//! use xoshiro_streams::pool::StreamPool;
//! use xoshiro_streams::rng::Xoshiro256StarStar;
//!
//! let mut pool = StreamPool::<Xoshiro256StarStar>::from_seed(4, 42).unwrap();
//! let first = pool.state(0).next_u64();
//! let other = pool.state(3).next_u64();
//! assert_ne!(first, other);
//! ```

mod snapshot;

pub use snapshot::{compute_state_hash, PoolSnapshot};

use crate::error::ConfigError;
use crate::rng::{Algorithm, SeedMaterial, StateVector, Xoshiro256StarStar};
use serde::{Deserialize, Serialize};

/// Declarative description of a pool
///
/// ```
/// use xoshiro_streams::pool::{PoolConfig, StreamPool};
///
/// let config: PoolConfig = serde_json::from_str(r#"{"streams": 3, "seed": 7}"#).unwrap();
/// let pool: StreamPool = StreamPool::from_config(&config).unwrap();
/// assert_eq!(pool.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of streams
    pub streams: usize,

    /// Integer seed or flat buffer of complete states
    pub seed: SeedMaterial,
}

/// Ordered, fixed-size collection of independent streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamPool<A: Algorithm = Xoshiro256StarStar> {
    streams: Box<[StateVector<A>]>,
}

impl<A: Algorithm> StreamPool<A> {
    /// Build `n` streams from seed material
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoStreams`] if `n` is zero
    /// - [`ConfigError::SeedWords`] if a word buffer is empty or not a
    ///   multiple of `A::WIDTH`
    /// - [`ConfigError::ZeroState`] if a supplied state is all zero
    pub fn new(n: usize, seed: &SeedMaterial) -> Result<Self, ConfigError> {
        seed.validate::<A>()?;
        if n == 0 {
            return Err(ConfigError::NoStreams);
        }

        let supplied: Vec<StateVector<A>> = match seed {
            SeedMaterial::Integer(value) => vec![StateVector::from_seed(*value)],
            SeedMaterial::Words(words) => words
                .chunks_exact(A::WIDTH)
                .take(n)
                .enumerate()
                .map(|(stream, chunk)| {
                    StateVector::from_slice(chunk).map_err(|e| match e {
                        ConfigError::AllZeroState => ConfigError::ZeroState { stream },
                        other => other,
                    })
                })
                .collect::<Result<_, _>>()?,
        };

        let mut streams = Vec::with_capacity(n);
        let mut current = supplied[0];
        for i in 0..n {
            match supplied.get(i) {
                Some(state) => current = *state,
                None => current.jump(),
            }
            streams.push(current);
        }

        log::debug!(
            "constructed {} {} streams ({} from seed material, {} by jump)",
            n,
            A::NAME,
            supplied.len(),
            n - supplied.len()
        );

        Ok(Self {
            streams: streams.into_boxed_slice(),
        })
    }

    /// Build `n` streams from an integer seed
    pub fn from_seed(n: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::new(n, &SeedMaterial::Integer(seed))
    }

    /// Build a pool from a [`PoolConfig`]
    pub fn from_config(config: &PoolConfig) -> Result<Self, ConfigError> {
        Self::new(config.streams, &config.seed)
    }

    /// Rebuild a pool from the output of [`export_state`](Self::export_state)
    ///
    /// The stream count is `words.len() / A::WIDTH`.
    pub fn import(words: &[u64]) -> Result<Self, ConfigError> {
        let seed = SeedMaterial::Words(words.to_vec());
        seed.validate::<A>()?;
        Self::new(words.len() / A::WIDTH, &seed)
    }

    /// Number of streams
    pub fn size(&self) -> usize {
        self.streams.len()
    }

    /// Borrow stream `i` for drawing
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    pub fn state(&mut self, i: usize) -> &mut StateVector<A> {
        &mut self.streams[i]
    }

    /// Borrow stream `i`, or `None` if out of range
    pub fn get_mut(&mut self, i: usize) -> Option<&mut StateVector<A>> {
        self.streams.get_mut(i)
    }

    /// All streams as a mutable slice, for splitting across workers
    pub fn streams_mut(&mut self) -> &mut [StateVector<A>] {
        &mut self.streams
    }

    /// Iterate over the streams in index order
    pub fn iter(&self) -> impl Iterator<Item = &StateVector<A>> {
        self.streams.iter()
    }

    /// Jump every stream once
    pub fn jump_all(&mut self) {
        log::trace!("jumping {} streams", self.streams.len());
        for state in self.streams.iter_mut() {
            state.jump();
        }
    }

    /// Long-jump every stream once
    pub fn long_jump_all(&mut self) {
        log::trace!("long-jumping {} streams", self.streams.len());
        for state in self.streams.iter_mut() {
            state.long_jump();
        }
    }

    /// Flatten all state, stream-major then word-within-state
    ///
    /// Length is `size() * A::WIDTH`.
    pub fn export_state(&self) -> Vec<u64> {
        let mut state = Vec::with_capacity(self.size() * A::WIDTH);
        for stream in self.streams.iter() {
            state.extend_from_slice(stream.words());
        }
        state
    }
}
