use std::io;
use thiserror::Error;

/// Failure when reading a prime out of a holder.
///
/// The index is a programming error on the caller's side, so there is
/// nothing to retry: the error carries the offending values and goes
/// straight back to whoever asked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    #[error("index {index} is out of range for a cache of {len} primes")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced while running a demo scene.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Prime(#[from] PrimeError),

    #[error("failed to write scene output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let error = PrimeError::IndexOutOfRange { index: 50, len: 50 };
        let display = format!("{}", error);
        assert!(display.contains("index 50"));
        assert!(display.contains("50 primes"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ConfigError::invalid("batch_size", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "invalid value for 'batch_size': must be at least 1"
        );
    }

    #[test]
    fn test_demo_error_is_transparent_over_prime_error() {
        let error: DemoError = PrimeError::IndexOutOfRange { index: 7, len: 3 }.into();
        assert_eq!(
            error.to_string(),
            "index 7 is out of range for a cache of 3 primes"
        );
        assert!(matches!(
            error,
            DemoError::Prime(PrimeError::IndexOutOfRange { index: 7, len: 3 })
        ));
    }
}
