//! Poisson sampling
//!
//! Small means use sequential inversion of the CDF from a single draw. Means
//! of 10 and above use Hörmann's PTRS transformed rejection ("The transformed
//! rejection method for generating Poisson random variables", 1993), two
//! draws per round.
//!
//! Means must stay below 2^62 so that every accepted count fits in a `u64`
//! with a margin of billions of standard deviations.

use super::{stirling_tail, HALF_LN_2PI};
use crate::error::DomainError;
use crate::rng::{Algorithm, Real, StateVector};

/// Means at or above this use rejection instead of inversion
const INVERSION_LIMIT: f64 = 10.0;

/// Means at or above this are rejected (2^62)
const MAX_LAMBDA: f64 = 4_611_686_018_427_387_904.0;

/// Sample a count from `Poisson(lambda)`
///
/// # Errors
///
/// `lambda` negative, non-finite, or at least 2^62.
pub fn poisson<T: Real, A: Algorithm>(
    state: &mut StateVector<A>,
    lambda: T,
) -> Result<u64, DomainError> {
    if !lambda.is_finite() || lambda < T::zero() || lambda >= T::of(MAX_LAMBDA) {
        return Err(DomainError::InvalidParameter {
            name: "lambda",
            value: lambda.as_f64(),
        });
    }

    if lambda == T::zero() {
        return Ok(0);
    }

    if lambda < T::of(INVERSION_LIMIT) {
        Ok(inversion(state, lambda))
    } else {
        Ok(transformed_rejection(state, lambda))
    }
}

fn inversion<T: Real, A: Algorithm>(state: &mut StateVector<A>, lambda: T) -> u64 {
    let u: T = state.unif_rand();
    let mut k = 0u64;
    let mut p = (-lambda).exp();
    let mut cdf = p;
    while u > cdf {
        k += 1;
        p = p * lambda / T::of(k as f64);
        if p == T::zero() {
            // Remaining mass is below the type's resolution
            break;
        }
        cdf = cdf + p;
    }
    k
}

fn transformed_rejection<T: Real, A: Algorithm>(state: &mut StateVector<A>, lambda: T) -> u64 {
    let slam = lambda.sqrt();
    let b = T::of(0.931) + T::of(2.53) * slam;
    let a = T::of(-0.059) + T::of(0.02483) * b;
    let inv_alpha = T::of(1.1239) + T::of(1.1328) / (b - T::of(3.4));
    let v_r = T::of(0.9277) - T::of(3.6224) / (b - T::of(2.0));
    let half = T::of(0.5);

    loop {
        let u = state.unif_rand::<T>() - half;
        let v: T = state.unif_rand();
        let us = half - u.abs();
        let k = ((T::of(2.0) * a / us + b) * u + lambda + T::of(0.43)).floor();

        if k < T::zero() {
            continue;
        }
        if us >= T::of(0.07) && v <= v_r {
            return k.as_f64() as u64;
        }
        if us < T::of(0.013) && v > us {
            continue;
        }

        let lhs = v.ln() + inv_alpha.ln() - (a / (us * us) + b).ln();
        if lhs <= log_pmf(k, lambda) {
            return k.as_f64() as u64;
        }
    }
}

/// `ln P(X = k)`, i.e. `k ln λ - λ - ln k!` with Stirling's series for `ln k!`
///
/// Written in terms of `d = k + 1 - λ` so the O(λ) terms cancel before
/// rounding. The direct form has no significant digits left once λ·ln λ
/// passes 1e14.
fn log_pmf<T: Real>(k: T, lambda: T) -> T {
    let one = T::one();
    let d = k + one - lambda;
    d - k * (d / lambda).ln_1p()
        - T::of(0.5) * (k + one).ln()
        - T::of(HALF_LN_2PI)
        - stirling_tail(k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xoshiro256StarStar;

    fn mean_and_variance(samples: &[u64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().map(|&x| x as f64).sum::<f64>() / n;
        let var = samples
            .iter()
            .map(|&x| (x as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        (mean, var)
    }

    #[test]
    fn test_zero_mean_consumes_nothing() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(1);
        let before = state;
        assert_eq!(poisson(&mut state, 0.0f64).unwrap(), 0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_inversion_consumes_one_draw() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(1);
        for _ in 0..100 {
            let mut reference = state;
            poisson(&mut state, 9.5f64).unwrap();
            reference.next_u64();
            assert_eq!(state, reference);
        }
    }

    #[test]
    fn test_negative_mean_rejected() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(1);
        assert_eq!(
            poisson(&mut state, -0.5f64).unwrap_err(),
            DomainError::InvalidParameter {
                name: "lambda",
                value: -0.5
            }
        );
        assert!(poisson(&mut state, f64::INFINITY).is_err());
    }

    #[test]
    fn test_mean_beyond_limit_rejected() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(1);
        let before = state;
        assert_eq!(
            poisson(&mut state, 1.0e30f64).unwrap_err(),
            DomainError::InvalidParameter {
                name: "lambda",
                value: 1.0e30
            }
        );
        assert!(poisson(&mut state, MAX_LAMBDA).is_err());
        assert!(poisson(&mut state, 1.0e30f32).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_log_pmf_matches_direct_sum() {
        let lambda = 12.0f64;
        let mut ln_fact = 0.0f64;
        for k in 0..40u32 {
            if k > 0 {
                ln_fact += (k as f64).ln();
            }
            let kf = k as f64;
            let direct = kf * lambda.ln() - lambda - ln_fact;
            assert!((log_pmf(kf, lambda) - direct).abs() < 1e-9, "k = {}", k);
        }
    }

    #[test]
    fn test_log_pmf_stays_finite_near_mode_of_huge_mean() {
        // Near the mode the log-probability is about -ln(sqrt(2πλ))
        let lambda = 1.0e15f64;
        let expected = -(2.0 * std::f64::consts::PI * lambda).sqrt().ln();
        assert!((log_pmf(lambda, lambda) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_huge_mean_moments() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(29);
        let samples: Vec<u64> = (0..5_000)
            .map(|_| poisson(&mut state, 1.0e15f64).unwrap())
            .collect();
        let (mean, var) = mean_and_variance(&samples);
        // Standard error of the mean is sqrt(1e15 / 5000) ≈ 4.5e5
        assert!((mean - 1.0e15).abs() < 2.5e6, "mean {}", mean);
        assert!((var / 1.0e15 - 1.0).abs() < 0.1, "variance {}", var);
    }

    #[test]
    fn test_small_mean_moments() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(7);
        let samples: Vec<u64> = (0..100_000)
            .map(|_| poisson(&mut state, 4.0f64).unwrap())
            .collect();
        let (mean, var) = mean_and_variance(&samples);
        assert!((mean - 4.0).abs() < 0.05, "mean {}", mean);
        assert!((var - 4.0).abs() < 0.15, "variance {}", var);
    }

    #[test]
    fn test_large_mean_moments() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(7);
        let samples: Vec<u64> = (0..100_000)
            .map(|_| poisson(&mut state, 25.0f64).unwrap())
            .collect();
        let (mean, var) = mean_and_variance(&samples);
        assert!((mean - 25.0).abs() < 0.1, "mean {}", mean);
        assert!((var - 25.0).abs() < 0.8, "variance {}", var);
    }

    #[test]
    fn test_f32_mean() {
        let mut state = StateVector::<Xoshiro256StarStar>::from_seed(9);
        let total: u64 = (0..50_000)
            .map(|_| poisson(&mut state, 100.0f32).unwrap())
            .sum();
        let mean = total as f64 / 50_000.0;
        assert!((mean - 100.0).abs() < 0.3, "mean {}", mean);
    }
}
