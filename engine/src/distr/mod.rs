//! Distribution sampling on top of raw generator output
//!
//! Every function is stateless: it takes a caller-owned [`StateVector`],
//! consumes exactly the draws it needs from it, and returns a value. Given
//! the same state, the same call always returns the same value and leaves the
//! state in the same place.
//!
//! # Draws consumed per call
//!
//! | function          | regime                         | draws            |
//! |-------------------|--------------------------------|------------------|
//! | `uniform`         | always                         | 1                |
//! | `standard_normal` | always (Box–Muller)            | 2                |
//! | `normal`          | always                         | 2                |
//! | `poisson`         | λ = 0                          | 0                |
//! |                   | λ < 10 (inversion)             | 1                |
//! |                   | λ ≥ 10 (PTRS rejection)        | 2 per round      |
//! | `binomial`        | n = 0 or p ∈ {0, 1}            | 0                |
//! |                   | n·min(p, 1−p) < 10 (inversion) | 1                |
//! |                   | otherwise (BTRS rejection)     | 2 per round      |
//!
//! Rejection rounds are themselves deterministic, so replays from the same
//! state reproduce both the values and the number of draws.
//!
//! [`StateVector`]: crate::rng::StateVector

mod binomial;
mod normal;
mod poisson;
mod uniform;

pub use binomial::binomial;
pub use normal::{normal, standard_normal};
pub use poisson::poisson;
pub use uniform::uniform;

use crate::rng::Real;

/// `ln(k!) - stirling(k)` for k = 0..=9
const STIRLING_TAIL: [f64; 10] = [
    0.0810614667953272,
    0.0413406959554092,
    0.0276779256849983,
    0.02079067210376509,
    0.0166446911898211,
    0.0138761288230707,
    0.0118967099458917,
    0.0104112652619720,
    0.00925546218271273,
    0.00833056343336287,
];

/// Correction term of Stirling's approximation to `ln(k!)`, for integral `k >= 0`
pub(crate) fn stirling_tail<T: Real>(k: T) -> T {
    if k <= T::of(9.0) {
        return T::of(STIRLING_TAIL[k.as_f64() as usize]);
    }
    let kp1 = k + T::one();
    let kp1sq = kp1 * kp1;
    (T::of(1.0 / 12.0) - (T::of(1.0 / 360.0) - T::of(1.0 / 1260.0) / kp1sq) / kp1sq) / kp1
}

/// `ln(sqrt(2π))`
pub(crate) const HALF_LN_2PI: f64 = 0.918_938_533_204_672_8;
