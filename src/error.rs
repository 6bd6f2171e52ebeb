//! Error taxonomy for sequence generation.
//!
//! Every failure is classified as either a client error (the request can be
//! corrected by the caller) or a server error (an unexpected fault inside the
//! sampling engine). The transport layer maps the classification onto its own
//! status vocabulary.

use serde::Serialize;
use thiserror::Error;

/// Generic message surfaced for server-side failures.
const INTERNAL_MESSAGE: &str = "internal error while generating the sequence";

/// Errors that can occur while generating a sample sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// The requested count is not positive or exceeds the configured maximum.
    #[error("count must be between 1 and {max}, got {count}")]
    InvalidCount {
        /// Requested count.
        count: i64,
        /// Configured maximum.
        max: u64,
    },

    /// The random source type is neither `general` nor `secure`.
    #[error("unknown source type `{0}`, expected one of: general, secure")]
    UnknownSourceType(String),

    /// The distribution name is not in the supported set.
    #[error("unknown distribution `{name}`, supported distributions: {}", .supported.join(", "))]
    UnknownDistribution {
        /// Requested name.
        name: String,
        /// Names that would have been accepted.
        supported: Vec<String>,
    },

    /// A distribution-specific parameter constraint was violated.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Parameter name, e.g. `stddev`.
        parameter: String,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// The request could not be decoded by the transport.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Unexpected fault inside the engine. Details are for logs only.
    #[error("internal sampling failure: {0}")]
    Internal(String),
}

/// Coarse error classification for the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorClass {
    /// The request was malformed and can be corrected by the caller.
    ClientError,
    /// The engine failed unexpectedly.
    ServerError,
}

impl SamplingError {
    pub(crate) fn invalid_parameter(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the classification of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Internal(_) => ErrorClass::ServerError,
            _ => ErrorClass::ClientError,
        }
    }

    /// Returns true for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        self.class() == ErrorClass::ClientError
    }

    /// Message that is safe to return to the caller.
    ///
    /// Client errors carry their full detail; server errors are replaced by a
    /// generic message so internal state never leaks.
    pub fn public_message(&self) -> String {
        match self.class() {
            ErrorClass::ClientError => self.to_string(),
            ErrorClass::ServerError => INTERNAL_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_client_errors() {
        let errors = [
            SamplingError::InvalidCount { count: 0, max: 10 },
            SamplingError::UnknownSourceType("fast".into()),
            SamplingError::UnknownDistribution {
                name: "poisson".into(),
                supported: vec!["uniform".into()],
            },
            SamplingError::invalid_parameter("stddev", "must be greater than 0"),
            SamplingError::MalformedRequest("invalid digit found in string".into()),
        ];

        for error in &errors {
            assert_eq!(error.class(), ErrorClass::ClientError);
            assert_eq!(error.public_message(), error.to_string());
        }
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let error = SamplingError::Internal("gamma produced NaN".into());
        assert_eq!(error.class(), ErrorClass::ServerError);
        assert!(!error.public_message().contains("NaN"));
    }

    #[test]
    fn test_unknown_distribution_lists_supported() {
        let error = SamplingError::UnknownDistribution {
            name: "poisson".into(),
            supported: vec!["uniform".into(), "gaussian".into()],
        };
        assert_eq!(
            error.to_string(),
            "unknown distribution `poisson`, supported distributions: uniform, gaussian"
        );
    }
}
