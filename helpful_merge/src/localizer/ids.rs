//! Identifiers of the diagnostics carried by the message catalogues.

use std::fmt;

/// A diagnostic the merge engine can emit.
///
/// Each id maps to one Fluent message; [`MessageId::as_str`] gives its
/// catalogue name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MessageId {
    /// A closed target rejected an unknown key. Args: `offender`.
    UnknownProperty,
    /// As [`MessageId::UnknownProperty`], with `suggestion`.
    UnknownPropertySuggestion,
    /// The options document named an unknown option. Args: `offender`.
    UnknownOption,
    /// As [`MessageId::UnknownOption`], with `suggestion`.
    UnknownOptionSuggestion,
    /// The target was a scalar. Args: `found`.
    TargetInvalid,
    /// A source was a scalar. Args: `found`.
    SourceInvalid,
    /// PUSH met a non-array target. Args: `found`.
    PushTarget,
    /// Unrecognised array strategy name. Args: `value`.
    InvalidArrayStrategy,
    /// An option had the wrong type. Args: `option`, `expected`.
    InvalidOptionValue,
    /// Args: `key`.
    WriteNotExtensible,
    /// Args: `key`.
    WriteReadOnly,
    /// Args: `key`.
    WriteInvalidIndex,
    /// Args: `type_name`, `reason`.
    WriteConstruction,
}

impl MessageId {
    /// Every id, in catalogue order.
    pub const ALL: [Self; 13] = [
        Self::UnknownProperty,
        Self::UnknownPropertySuggestion,
        Self::UnknownOption,
        Self::UnknownOptionSuggestion,
        Self::TargetInvalid,
        Self::SourceInvalid,
        Self::PushTarget,
        Self::InvalidArrayStrategy,
        Self::InvalidOptionValue,
        Self::WriteNotExtensible,
        Self::WriteReadOnly,
        Self::WriteInvalidIndex,
        Self::WriteConstruction,
    ];

    /// The Fluent message name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownProperty => "merge-unknown-property",
            Self::UnknownPropertySuggestion => "merge-unknown-property-suggestion",
            Self::UnknownOption => "merge-unknown-option",
            Self::UnknownOptionSuggestion => "merge-unknown-option-suggestion",
            Self::TargetInvalid => "merge-target-invalid",
            Self::SourceInvalid => "merge-source-invalid",
            Self::PushTarget => "merge-push-target",
            Self::InvalidArrayStrategy => "merge-invalid-array-strategy",
            Self::InvalidOptionValue => "merge-invalid-option-value",
            Self::WriteNotExtensible => "merge-write-not-extensible",
            Self::WriteReadOnly => "merge-write-read-only",
            Self::WriteInvalidIndex => "merge-write-invalid-index",
            Self::WriteConstruction => "merge-write-construction",
        }
    }

    /// Looks an id up by its Fluent message name.
    ///
    /// # Examples
    /// ```rust
    /// use helpful_merge::MessageId;
    ///
    /// assert_eq!(
    ///     MessageId::from_name("merge-push-target"),
    ///     Some(MessageId::PushTarget)
    /// );
    /// assert_eq!(MessageId::from_name("merge.push-target"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }

    pub(crate) const fn unknown_property(has_suggestion: bool) -> Self {
        if has_suggestion {
            Self::UnknownPropertySuggestion
        } else {
            Self::UnknownProperty
        }
    }

    pub(crate) const fn unknown_option(has_suggestion: bool) -> Self {
        if has_suggestion {
            Self::UnknownOptionSuggestion
        } else {
            Self::UnknownOption
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
