//! Error types for the consensus core
//!
//! Rejections of candidate blocks are ordinary values, kept separate from
//! configuration and I/O failures. Programmer errors (division by zero,
//! out-of-range scoop indexing) panic and are not represented here.

use thiserror::Error;

/// Reasons a candidate block header fails PoC verification.
///
/// Each variant carries the observed and expected values so a host can
/// report the rejection without recomputing anything. The core never logs
/// these; they are returned to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidBlock {
    /// The block timestamp is below the chain's minimum allowed time.
    #[error("block timestamp {timestamp} is below the minimum {minimum}")]
    TimestampTooLow {
        /// Timestamp carried by the candidate header.
        timestamp: u32,
        /// Minimum acceptable timestamp from the chain parameters.
        minimum: u32,
    },

    /// The base target in the header does not match the retarget result.
    #[error("base target {bits} does not match the required target {expected}")]
    BitsMismatch {
        /// Base target carried by the candidate header.
        bits: u64,
        /// Base target required by the retargeting rules.
        expected: u64,
    },

    /// Not enough wall-clock time has passed since the parent block.
    #[error(
        "deadline of {deadline}s not met: block at {timestamp}, parent at {parent_timestamp}"
    )]
    DeadlineNotMet {
        /// Deadline computed from the candidate's plot.
        deadline: u64,
        /// Timestamp carried by the candidate header.
        timestamp: u32,
        /// Timestamp of the parent block.
        parent_timestamp: u32,
    },
}

/// Configuration error subtypes
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A parameter file could not be found on disk.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was probed.
        path: String,
    },

    /// A parameter file exists but has an extension the loader does not know.
    #[error("unsupported config format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat {
        /// Path with the offending extension.
        path: String,
    },

    /// A parameter value fails validation.
    #[error("invalid value for {field}: {value} (expected: {expected})")]
    InvalidValue {
        /// Name of the offending field.
        field: String,
        /// Value that was supplied.
        value: String,
        /// Description of what would have been accepted.
        expected: String,
    },
}

/// Main error type for the consensus core
#[derive(Error, Debug)]
pub enum Error {
    /// A candidate block failed a verification predicate.
    #[error("invalid block: {0}")]
    Invalid(#[from] InvalidBlock),

    /// Chain parameter configuration errors.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the consensus core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a file-not-found configuration error
    pub fn config_file_not_found(path: impl Into<String>) -> Self {
        Self::Config(ConfigError::FileNotFound { path: path.into() })
    }

    /// Create an unsupported-format configuration error
    pub fn config_unsupported_format(path: impl Into<String>) -> Self {
        Self::Config(ConfigError::UnsupportedFormat { path: path.into() })
    }

    /// Create an invalid-value configuration error
    pub fn config_invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        })
    }

    /// Get the error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Invalid(_) => "validation",
            Error::Config(_) => "configuration",
            Error::Json(_) | Error::Yaml(_) => "serialization",
            Error::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_block_display() {
        let err = InvalidBlock::TimestampTooLow {
            timestamp: 100,
            minimum: 200,
        };
        assert_eq!(
            err.to_string(),
            "block timestamp 100 is below the minimum 200"
        );

        let err = InvalidBlock::BitsMismatch {
            bits: 42,
            expected: 18_325_193_796,
        };
        assert!(err.to_string().contains("does not match"));

        let err = InvalidBlock::DeadlineNotMet {
            deadline: 360,
            timestamp: 1000,
            parent_timestamp: 900,
        };
        assert!(err.to_string().contains("deadline of 360s"));
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = InvalidBlock::BitsMismatch {
            bits: 1,
            expected: 2,
        }
        .into();
        assert!(matches!(err, Error::Invalid(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_categories() {
        let err: Error = InvalidBlock::BitsMismatch {
            bits: 1,
            expected: 2,
        }
        .into();
        assert_eq!(err.category(), "validation");
        assert_eq!(Error::config_file_not_found("x.yaml").category(), "configuration");
    }

    #[test]
    fn test_config_error_constructors() {
        let err = Error::config_invalid_value("initial_base_target", "0", "a positive integer");
        assert!(err
            .to_string()
            .contains("invalid value for initial_base_target"));

        let err = Error::config_unsupported_format("params.toml");
        assert!(err.to_string().contains("params.toml"));
    }
}
