//! Xoshiro Streams - multi-stream pseudorandom engine
//!
//! Deterministic, seedable xoshiro generators with jump-ahead, organised into
//! pools of non-overlapping streams, plus a small sampling layer built only
//! on the raw generator output.
//!
//! # Architecture
//!
//! - **rng**: State Vector, Core Generator (step, jump, long jump), seed derivation
//! - **pool**: Stream Pool construction, whole-pool jumps, export/import, snapshots
//! - **distr**: uniform, normal, Poisson and binomial sampling
//! - **error**: configuration and domain errors
//!
//! # Critical Invariants
//!
//! 1. A State Vector is never all-zero
//! 2. Same seed material → same streams → same draws
//! 3. Stream `i` of a pool seeded from an integer is the root state jumped `i` times
//! 4. Exported state imports back word-for-word
//!
//! # Example
//!
//! ```
//! use xoshiro_streams::{distr, StreamPool};
//!
//! let mut pool: StreamPool = StreamPool::from_seed(8, 2024).unwrap();
//! let x: f64 = distr::uniform(pool.state(3), 10.0, 20.0).unwrap();
//! let k = distr::poisson(pool.state(5), 3.5f64).unwrap();
//! assert!(x >= 10.0 && x < 20.0);
//! # let _ = k;
//! ```

// Module declarations
pub mod distr;
pub mod error;
pub mod pool;
pub mod rng;

// Re-exports for convenience
pub use error::{ConfigError, DomainError, RngError};
pub use pool::{PoolConfig, PoolSnapshot, StreamPool};
pub use rng::{
    Algorithm, Real, SeedMaterial, StateVector, Xoshiro256Plus, Xoshiro256PlusPlus,
    Xoshiro256StarStar, Xoshiro512Plus, Xoshiro512PlusPlus, Xoshiro512StarStar,
};
