//! Unit tests for error accessors and localised rendering.

use rstest::rstest;
use test_helpers::text::strip_isolates;
use unic_langid::langid;

use super::MergeError;
use crate::localizer::{FluentLocalizer, MessageId, NoOpLocalizer};
use crate::value::{ValueKind, WriteError};

fn attribute_write(suggestion: Option<&str>) -> MergeError {
    MergeError::AttributeWrite {
        key: String::from("baz"),
        suggestion: suggestion.map(str::to_owned),
        message: String::from("custom text"),
    }
}

#[rstest]
fn enriched_errors_display_the_formatted_message() {
    assert_eq!(attribute_write(Some("bar")).to_string(), "custom text");
}

#[rstest]
fn write_errors_pass_through_transparently() {
    let err = MergeError::from(WriteError::ReadOnly {
        key: String::from("name"),
    });
    assert_eq!(err.to_string(), "cannot assign to read-only property \"name\"");
    assert_eq!(err.offending_key(), Some("name"));
}

#[rstest]
#[case::suggested(attribute_write(Some("bar")), Some("bar"))]
#[case::unsuggested(attribute_write(None), None)]
#[case::fatal(MergeError::SourceInvalid { found: ValueKind::Null }, None)]
fn suggestion_accessor(#[case] err: MergeError, #[case] expected: Option<&str>) {
    assert_eq!(err.suggestion(), expected);
}

#[rstest]
fn noop_localizer_falls_back_to_display_text() {
    let err = MergeError::InvalidArrayStrategy {
        value: String::from("MERGE"),
    };
    assert_eq!(err.localized(&NoOpLocalizer::new()), err.to_string());
}

#[rstest]
#[case::plain(attribute_write(None), "Unknown property \"baz\"")]
#[case::suggested(
    attribute_write(Some("bar")),
    "Unknown property \"baz\". Did you mean \"bar\"?"
)]
#[case::option(
    MergeError::UnknownConfigurationOption {
        option: String::from("deeep"),
        suggestion: Some(String::from("deep")),
        message: String::new(),
    },
    "Unknown configuration option \"deeep\". Did you mean \"deep\"?"
)]
#[case::push(
    MergeError::PushTargetNotSequence { found: ValueKind::Object },
    "Cannot push into a object target; the PUSH strategy requires an array"
)]
#[case::construction(
    MergeError::Write(WriteError::Construction {
        type_name: String::from("Point"),
        reason: String::from("factory returned a string"),
    }),
    "Failed to construct an instance of \"Point\": factory returned a string"
)]
fn english_catalogue_renders_every_kind(#[case] err: MergeError, #[case] expected: &str) {
    let localizer = FluentLocalizer::en_us().expect("embedded catalogue builds");
    assert_eq!(strip_isolates(&err.localized(&localizer)), expected);
}

#[rstest]
fn japanese_catalogue_keeps_the_offending_key() {
    let localizer = FluentLocalizer::embedded(langid!("ja")).expect("embedded catalogue builds");
    let rendered = strip_isolates(&attribute_write(Some("bar")).localized(&localizer));

    assert!(rendered.contains("baz"));
    assert!(rendered.contains("bar"));
    assert_ne!(rendered, "custom text");
}

#[rstest]
#[case::suggested(attribute_write(Some("bar")), MessageId::UnknownPropertySuggestion, Some("bar"))]
#[case::plain(attribute_write(None), MessageId::UnknownProperty, None)]
#[case::option(
    MergeError::UnknownConfigurationOption {
        option: String::from("deeep"),
        suggestion: None,
        message: String::new(),
    },
    MessageId::UnknownOption,
    None
)]
fn unknown_keys_select_the_suggestion_message(
    #[case] err: MergeError,
    #[case] id: MessageId,
    #[case] suggestion: Option<&str>,
) {
    let (actual, args) = err.diagnostic();
    assert_eq!(actual, id);
    assert_eq!(args.get("suggestion"), suggestion);
    assert!(args.get("offender").is_some());
}

#[rstest]
fn construction_failures_carry_both_arguments() {
    let err = MergeError::Write(WriteError::Construction {
        type_name: String::from("Point"),
        reason: String::from("bad"),
    });
    let (id, args) = err.diagnostic();
    assert_eq!(id, MessageId::WriteConstruction);
    assert_eq!(args.get("type_name"), Some("Point"));
    assert_eq!(args.get("reason"), Some("bad"));
}
