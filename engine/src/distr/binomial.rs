//! Binomial sampling
//!
//! Works on `q = min(p, 1 - p)` and mirrors the count when `p > 0.5`. When
//! `n·q < 10` the CDF is inverted from a single draw; otherwise Hörmann's
//! BTRS transformed rejection ("The generation of binomial random variates",
//! 1993) is used, two draws per round.

use super::stirling_tail;
use crate::error::DomainError;
use crate::rng::{Algorithm, Real, StateVector};

/// Values of `n·q` at or above this use rejection instead of inversion
const INVERSION_LIMIT: f64 = 10.0;

/// Sample a count from `Binomial(n, p)`
///
/// # Errors
///
/// `p` outside `[0, 1]` or NaN.
pub fn binomial<T: Real, A: Algorithm>(
    state: &mut StateVector<A>,
    n: u64,
    p: T,
) -> Result<u64, DomainError> {
    if !(p >= T::zero() && p <= T::one()) {
        return Err(DomainError::InvalidParameter {
            name: "p",
            value: p.as_f64(),
        });
    }

    if n == 0 || p == T::zero() {
        return Ok(0);
    }
    if p == T::one() {
        return Ok(n);
    }

    let flipped = p > T::of(0.5);
    let q = if flipped { T::one() - p } else { p };

    let count = if T::of(n as f64) * q < T::of(INVERSION_LIMIT) {
        inversion(state, n, q)
    } else {
        transformed_rejection(state, n, q)
    };

    Ok(if flipped { n - count } else { count })
}

fn inversion<T: Real, A: Algorithm>(state: &mut StateVector<A>, n: u64, q: T) -> u64 {
    let r = q / (T::one() - q);
    let g = r * T::of(n as f64 + 1.0);
    // P(X = 0) = (1 - q)^n, via ln_1p so a q below epsilon does not round away
    let mut f = (T::of(n as f64) * (-q).ln_1p()).exp();
    let mut u: T = state.unif_rand();
    let mut k = 0u64;

    while u >= f && k < n {
        u = u - f;
        k += 1;
        f = f * (g / T::of(k as f64) - r);
        if f <= T::zero() {
            break;
        }
    }
    k
}

fn transformed_rejection<T: Real, A: Algorithm>(state: &mut StateVector<A>, n: u64, q: T) -> u64 {
    let one = T::one();
    let half = T::of(0.5);
    let nf = T::of(n as f64);

    let spq = (nf * q * (one - q)).sqrt();
    let b = T::of(1.15) + T::of(2.53) * spq;
    let a = T::of(-0.0873) + T::of(0.0248) * b + T::of(0.01) * q;
    let c = nf * q + half;
    let v_r = T::of(0.92) - T::of(4.2) / b;
    let r = q / (one - q);
    let alpha = (T::of(2.83) + T::of(5.1) / b) * spq;
    let m = ((nf + one) * q).floor();

    loop {
        let u = state.unif_rand::<T>() - half;
        let v: T = state.unif_rand();
        let us = half - u.abs();
        let k = ((T::of(2.0) * a / us + b) * u + c).floor();

        if k < T::zero() || k > nf {
            continue;
        }
        if us >= T::of(0.07) && v <= v_r {
            return k.as_f64() as u64;
        }

        let v = (v * alpha / (a / (us * us) + b)).ln();
        let upper = (m + half) * ((m + one) / (r * (nf - m + one))).ln()
            + (nf + one) * ((k - m) / (nf - k + one)).ln_1p()
            + (k + half) * (r * (nf - k + one) / (k + one)).ln()
            + stirling_tail(m)
            + stirling_tail(nf - m)
            - stirling_tail(k)
            - stirling_tail(nf - k);

        if v <= upper {
            return k.as_f64() as u64;
        }
    }
}
