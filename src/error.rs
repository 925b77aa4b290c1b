//! Error types for point panel construction.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building panel components.
///
/// Only construction can fail. Appending, mapping and notification are total
/// over their valid inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A construction parameter violates its invariant.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        let err = Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        };
        log::warn!("{err}");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field() {
        let err = Error::invalid("capacity", "must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: capacity must be positive, got 0"
        );
    }
}
