//! Error taxonomy
//!
//! Two families of failure exist, both reported synchronously:
//!
//! - [`ConfigError`]: malformed seed material, state buffers or snapshots.
//!   Fatal to the constructor that received them; no partial pool is returned.
//! - [`DomainError`]: distribution parameters outside their domain.
//!
//! Nothing retries internally. There is no transient failure mode.

use thiserror::Error;

/// Errors raised while building or restoring generator state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected seed of length as multiple of {multiple} words, received {actual}")]
    SeedWords { multiple: usize, actual: usize },

    #[error("Expected raw seed of length as multiple of {multiple} bytes, received {actual}")]
    SeedBytes { multiple: usize, actual: usize },

    #[error("Expected state of exactly {expected} words, received {actual}")]
    StateWidth { expected: usize, actual: usize },

    #[error("State is all zero")]
    AllZeroState,

    #[error("State for stream {stream} is all zero")]
    ZeroState { stream: usize },

    #[error("Stream pool requires at least one stream")]
    NoStreams,

    #[error("Snapshot was taken with {found}, expected {expected}")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("Snapshot state hash mismatch: expected {expected}, computed {computed}")]
    StateHashMismatch { expected: String, computed: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by the distribution layer for invalid parameters
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Invalid uniform range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid {name} parameter: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Jump polynomial must have at least one non-zero coefficient")]
    ZeroPolynomial,
}

/// Any error produced by this crate
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_words_message_names_expected_multiple() {
        let err = ConfigError::SeedWords {
            multiple: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Expected seed of length as multiple of 4 words, received 3"
        );
    }

    #[test]
    fn test_rng_error_wraps_both_families() {
        let config: RngError = ConfigError::NoStreams.into();
        let domain: RngError = DomainError::ZeroPolynomial.into();

        assert!(matches!(config, RngError::Config(ConfigError::NoStreams)));
        assert!(matches!(domain, RngError::Domain(DomainError::ZeroPolynomial)));
        assert!(config.to_string().starts_with("Configuration error"));
    }
}
