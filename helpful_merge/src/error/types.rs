//! Primary error enum for merge and option resolution flows.

use thiserror::Error;

use crate::value::{ValueKind, WriteError};

/// Convenience alias for results returned by merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that can occur while resolving options or merging values.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum MergeError {
    /// The merge target is not an object or an array.
    #[error("Target must be an object or array, found {found}")]
    TargetInvalid {
        /// Kind of value supplied as the target.
        found: ValueKind,
    },

    /// The merge source is not an object or an array.
    #[error("Source must be an object or array, found {found}")]
    SourceInvalid {
        /// Kind of value supplied as the source.
        found: ValueKind,
    },

    /// The `PUSH` array strategy was applied to a target that is not an array.
    #[error("Cannot push into a {found} target; the PUSH strategy requires an array")]
    PushTargetNotSequence {
        /// Kind of value found where an array was expected.
        found: ValueKind,
    },

    /// `arrayStrategy` held a value other than `"REPLACE"` or `"PUSH"`.
    #[error("Invalid array strategy \"{value}\"; expected \"REPLACE\" or \"PUSH\"")]
    InvalidArrayStrategy {
        /// Rendering of the rejected value.
        value: String,
    },

    /// A recognised option carried a value of the wrong shape.
    #[error("Option \"{option}\" expects {expected}")]
    InvalidOptionValue {
        /// Option name.
        option: String,
        /// Description of the accepted values.
        expected: &'static str,
    },

    /// An option structure named a field outside the configuration record.
    #[error("{message}")]
    UnknownConfigurationOption {
        /// Unrecognised option name.
        option: String,
        /// Closest known option name, when one scored high enough.
        suggestion: Option<String>,
        /// Message produced by the configured formatter.
        message: String,
    },

    /// A new attribute could not be added to a closed target.
    #[error("{message}")]
    AttributeWrite {
        /// Attribute name that was rejected.
        key: String,
        /// Closest existing attribute name, when one scored high enough.
        suggestion: Option<String>,
        /// Message produced by the configured formatter.
        message: String,
    },

    /// A write failed for a reason that is not eligible for suggestions.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl MergeError {
    /// Returns the suggested replacement name carried by enriched errors.
    #[must_use]
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::UnknownConfigurationOption { suggestion, .. }
            | Self::AttributeWrite { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }

    /// Returns the attribute or option name that triggered the failure, if
    /// the error concerns a single name.
    #[must_use]
    pub fn offending_key(&self) -> Option<&str> {
        match self {
            Self::UnknownConfigurationOption { option: key, .. }
            | Self::InvalidOptionValue { option: key, .. }
            | Self::AttributeWrite { key, .. } => Some(key),
            Self::Write(
                WriteError::NotExtensible { key }
                | WriteError::ReadOnly { key }
                | WriteError::InvalidIndex { key },
            ) => Some(key),
            _ => None,
        }
    }
}
