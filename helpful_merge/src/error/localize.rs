//! Rendering of [`MergeError`] through a [`Localizer`].

use super::MergeError;
use crate::localizer::{Localizer, MessageArgs, MessageId};
use crate::value::WriteError;

impl MergeError {
    /// The catalogue message describing this error, with its arguments.
    ///
    /// # Examples
    /// ```rust
    /// use helpful_merge::{MergeError, MessageId, ValueKind};
    ///
    /// let err = MergeError::SourceInvalid { found: ValueKind::Null };
    /// let (id, args) = err.diagnostic();
    /// assert_eq!(id, MessageId::SourceInvalid);
    /// assert_eq!(args.get("found"), Some("null"));
    /// ```
    #[must_use]
    pub fn diagnostic(&self) -> (MessageId, MessageArgs<'_>) {
        match self {
            Self::TargetInvalid { found } => (
                MessageId::TargetInvalid,
                MessageArgs::new().with("found", found.as_str()),
            ),
            Self::SourceInvalid { found } => (
                MessageId::SourceInvalid,
                MessageArgs::new().with("found", found.as_str()),
            ),
            Self::PushTargetNotSequence { found } => (
                MessageId::PushTarget,
                MessageArgs::new().with("found", found.as_str()),
            ),
            Self::InvalidArrayStrategy { value } => (
                MessageId::InvalidArrayStrategy,
                MessageArgs::new().with("value", value),
            ),
            Self::InvalidOptionValue { option, expected } => (
                MessageId::InvalidOptionValue,
                MessageArgs::new()
                    .with("option", option)
                    .with("expected", expected),
            ),
            Self::UnknownConfigurationOption {
                option, suggestion, ..
            } => (
                MessageId::unknown_option(suggestion.is_some()),
                MessageArgs::unknown_key(option, suggestion.as_deref()),
            ),
            Self::AttributeWrite {
                key, suggestion, ..
            } => (
                MessageId::unknown_property(suggestion.is_some()),
                MessageArgs::unknown_key(key, suggestion.as_deref()),
            ),
            Self::Write(err) => write_diagnostic(err),
        }
    }

    /// Renders the error through `localizer`, falling back to the
    /// [`Display`](std::fmt::Display) text when no translation exists.
    ///
    /// Enriched errors are re-rendered from their key and suggestion, so the
    /// localised text replaces whatever the configured formatter produced.
    ///
    /// # Examples
    /// ```rust
    /// use helpful_merge::{FluentLocalizer, MergeError, ValueKind};
    ///
    /// let localizer = FluentLocalizer::en_us().expect("embedded catalogue should be valid");
    /// let err = MergeError::TargetInvalid { found: ValueKind::String };
    /// let text = err.localized(&localizer).replace(['\u{2068}', '\u{2069}'], "");
    /// assert_eq!(text, "Target must be an object or array, found string");
    /// ```
    #[must_use]
    pub fn localized(&self, localizer: &dyn Localizer) -> String {
        let (id, args) = self.diagnostic();
        localizer.message(id, &args, &self.to_string())
    }
}

fn write_diagnostic(err: &WriteError) -> (MessageId, MessageArgs<'_>) {
    match err {
        WriteError::NotExtensible { key } => (
            MessageId::WriteNotExtensible,
            MessageArgs::new().with("key", key),
        ),
        WriteError::ReadOnly { key } => (
            MessageId::WriteReadOnly,
            MessageArgs::new().with("key", key),
        ),
        WriteError::InvalidIndex { key } => (
            MessageId::WriteInvalidIndex,
            MessageArgs::new().with("key", key),
        ),
        WriteError::Construction { type_name, reason } => (
            MessageId::WriteConstruction,
            MessageArgs::new()
                .with("type_name", type_name)
                .with("reason", reason),
        ),
    }
}
