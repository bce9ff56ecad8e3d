use crate::error::DomainError;
use crate::rng::{Algorithm, Real, StateVector};

/// Draw a real uniformly from `[min, max)`
///
/// Computed as `unif_rand * (max - min) + min` from one draw. A result that
/// rounds up to `max` is replaced by the largest value below `max`. When
/// `min == max` the draw is still consumed and `min` is returned.
///
/// # Errors
///
/// `min > max` or a non-finite bound is rejected with
/// [`DomainError::InvalidRange`]; bounds are never swapped.
///
/// # Example
/// ```
/// use xoshiro_streams::distr::uniform;
/// use xoshiro_streams::rng::{StateVector, Xoshiro256StarStar};
///
/// let mut state = StateVector::<Xoshiro256StarStar>::from_seed(1);
/// let x = uniform(&mut state, -1.0f64, 1.0).unwrap();
/// assert!(x >= -1.0 && x < 1.0);
/// ```
pub fn uniform<T: Real, A: Algorithm>(
    state: &mut StateVector<A>,
    min: T,
    max: T,
) -> Result<T, DomainError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(DomainError::InvalidRange {
            min: min.as_f64(),
            max: max.as_f64(),
        });
    }

    let u: T = state.unif_rand();
    if min == max {
        return Ok(min);
    }

    let span = max - min;
    let x = if span.is_finite() {
        u * span + min
    } else {
        // Span overflows only for bounds of opposite sign near the type limits
        min * (T::one() - u) + max * u
    };

    Ok(if x >= max { max.next_below() } else { x })
}
