//! Deterministic random number generation
//!
//! xoshiro generators with jump-ahead. Same seed → same sequence, on every
//! platform: seeds are expanded with a fixed SplitMix64 procedure, raw seed
//! bytes are decoded little-endian, and every operation is pure integer
//! arithmetic on the state.

mod real;
pub mod seed;
mod state;
mod xoshiro;

pub use real::Real;
pub use seed::{derive, splitmix64, SeedMaterial};
pub use state::StateVector;
pub use xoshiro::{
    Algorithm, Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512Plus,
    Xoshiro512PlusPlus, Xoshiro512StarStar,
};
