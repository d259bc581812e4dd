//! Builds diagnostics for writes rejected by closed targets.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::MergeError;
use crate::localizer::{Localizer, MessageArgs, MessageId};
use crate::suggest::best_match;
use crate::value::{Value, WriteError};

/// Formats the message for an unknown attribute: receives the offending name
/// and the suggested replacement, if any.
pub type MessageFormatter = Rc<dyn Fn(&str, Option<&str>) -> String>;

/// Renders `Unknown property "X"`, followed by `. Did you mean "Y"?` when a
/// suggestion exists.
///
/// # Examples
/// ```rust
/// use helpful_merge::default_message;
///
/// assert_eq!(default_message("baz", None), "Unknown property \"baz\"");
/// assert_eq!(
///     default_message("baz", Some("bar")),
///     "Unknown property \"baz\". Did you mean \"bar\"?"
/// );
/// ```
#[must_use]
pub fn default_message(offender: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(candidate) => {
            format!("Unknown property \"{offender}\". Did you mean \"{candidate}\"?")
        }
        None => format!("Unknown property \"{offender}\""),
    }
}

/// The formatter used when none is configured.
#[must_use]
pub fn default_formatter() -> MessageFormatter {
    Rc::new(default_message)
}

/// Adapts a [`Localizer`] into a [`MessageFormatter`], resolving
/// [`MessageId::UnknownProperty`] and [`MessageId::UnknownPropertySuggestion`]
/// with the English text as fallback.
#[must_use]
pub fn localized_formatter(localizer: Arc<dyn Localizer>) -> MessageFormatter {
    Rc::new(move |offender: &str, suggestion: Option<&str>| {
        localizer.message(
            MessageId::unknown_property(suggestion.is_some()),
            &MessageArgs::unknown_key(offender, suggestion),
            &default_message(offender, suggestion),
        )
    })
}

/// Turns a failed write of `key` into `target` into the error surfaced to
/// callers.
///
/// The write is enriched with a suggestion only when `key` is new to
/// `target`, `target` no longer accepts new keys, and the failure is
/// [`WriteError::NotExtensible`]. Every other failure is returned unchanged
/// as [`MergeError::Write`].
pub(crate) fn enrich(
    err: WriteError,
    target: &Value,
    key: &str,
    formatter: &MessageFormatter,
) -> MergeError {
    if target.has_own(key) || target.is_extensible() || !err.is_not_extensible() {
        return MergeError::Write(err);
    }

    let suggestion = best_match(target.enumerable_keys(), key);
    tracing::debug!(key, suggestion = ?suggestion, "rejected write to closed target");
    let message = formatter(key, suggestion.as_deref());
    MergeError::AttributeWrite {
        key: key.to_owned(),
        suggestion,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localizer::{FluentLocalizer, NoOpLocalizer};
    use crate::value::Object;
    use rstest::rstest;
    use test_helpers::text::strip_isolates;

    fn sealed_target() -> Value {
        Value::object(Object::new().with("foo", 1).with("bar", 2)).sealed()
    }

    fn not_extensible(key: &str) -> WriteError {
        WriteError::NotExtensible {
            key: key.to_owned(),
        }
    }

    #[rstest]
    fn enriches_new_keys_on_closed_targets() {
        let err = enrich(not_extensible("baz"), &sealed_target(), "baz", &default_formatter());

        assert_eq!(
            err,
            MergeError::AttributeWrite {
                key: String::from("baz"),
                suggestion: Some(String::from("bar")),
                message: String::from("Unknown property \"baz\". Did you mean \"bar\"?"),
            }
        );
    }

    #[rstest]
    fn omits_weak_suggestions() {
        let err = enrich(not_extensible("qux"), &sealed_target(), "qux", &default_formatter());

        assert_eq!(err.suggestion(), None);
        assert_eq!(err.to_string(), "Unknown property \"qux\"");
    }

    #[rstest]
    fn rethrows_when_target_is_extensible() {
        let target = Value::empty_object();
        let err = enrich(not_extensible("baz"), &target, "baz", &default_formatter());
        assert_eq!(err, MergeError::Write(not_extensible("baz")));
    }

    #[rstest]
    fn rethrows_when_key_already_exists() {
        let err = enrich(not_extensible("foo"), &sealed_target(), "foo", &default_formatter());
        assert!(matches!(err, MergeError::Write(_)));
    }

    #[rstest]
    fn rethrows_other_failures() {
        let read_only = WriteError::ReadOnly {
            key: String::from("baz"),
        };
        let err = enrich(read_only.clone(), &sealed_target(), "baz", &default_formatter());
        assert_eq!(err, MergeError::Write(read_only));
    }

    #[rstest]
    fn hidden_keys_are_not_suggested() {
        let target = Value::object(
            Object::new().with_property("bar", crate::value::Property::data(1).hidden()),
        )
        .sealed();
        let err = enrich(not_extensible("baz"), &target, "baz", &default_formatter());
        assert_eq!(err.suggestion(), None);
    }

    #[rstest]
    fn custom_formatter_receives_offender_and_suggestion() {
        let formatter: MessageFormatter =
            Rc::new(|offender, suggestion| format!("{offender}->{}", suggestion.unwrap_or("-")));
        let err = enrich(not_extensible("baz"), &sealed_target(), "baz", &formatter);
        assert_eq!(err.to_string(), "baz->bar");
    }

    #[rstest]
    fn localized_formatter_uses_the_catalogue() {
        let localizer: Arc<dyn Localizer> =
            Arc::new(FluentLocalizer::en_us().expect("embedded catalogue builds"));
        let formatter = localized_formatter(localizer);

        assert_eq!(
            strip_isolates(&formatter("baz", Some("bar"))),
            "Unknown property \"baz\". Did you mean \"bar\"?"
        );
    }

    #[rstest]
    fn localized_formatter_falls_back_to_english() {
        let formatter = localized_formatter(Arc::new(NoOpLocalizer::new()));
        assert_eq!(formatter("baz", None), "Unknown property \"baz\"");
    }
}
