//! Unit tests for diagnostic rendering through the message catalogues.

use super::*;
use rstest::rstest;
use test_helpers::text::strip_isolates;
use unic_langid::langid;

fn en_us() -> FluentLocalizer {
    FluentLocalizer::en_us().expect("embedded catalogue builds")
}

#[rstest]
fn noop_localizer_relies_on_fallback() {
    let resolved =
        NoOpLocalizer::new().message(MessageId::UnknownProperty, &MessageArgs::new(), "fallback");
    assert_eq!(resolved, "fallback");
}

#[rstest]
fn args_keep_the_latest_value() {
    let args = MessageArgs::new().with("key", "a").with("found", "string").with("key", "b");

    assert_eq!(args.get("key"), Some("b"));
    assert_eq!(args.len(), 2);
    assert_eq!(args.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["key", "found"]);
}

#[rstest]
#[case::plain(None, MessageId::UnknownProperty, "Unknown property \"baz\"")]
#[case::suggested(
    Some("bar"),
    MessageId::UnknownPropertySuggestion,
    "Unknown property \"baz\". Did you mean \"bar\"?"
)]
fn english_catalogue_renders_unknown_property(
    #[case] suggestion: Option<&str>,
    #[case] id: MessageId,
    #[case] expected: &str,
) {
    assert_eq!(MessageId::unknown_property(suggestion.is_some()), id);
    let args = MessageArgs::unknown_key("baz", suggestion);

    let resolved = en_us().lookup(id, &args).expect("message exists in en-US");
    assert_eq!(strip_isolates(&resolved), expected);
}

#[rstest]
fn japanese_catalogue_mentions_both_keys() {
    let localizer = FluentLocalizer::embedded(langid!("ja")).expect("embedded catalogue builds");
    let args = MessageArgs::unknown_key("baz", Some("bar"));

    let resolved = localizer
        .lookup(MessageId::UnknownPropertySuggestion, &args)
        .map(|text| strip_isolates(&text))
        .expect("message exists in ja");
    assert!(resolved.contains("baz"));
    assert!(resolved.contains("bar"));
    assert_eq!(localizer.catalogue(), Some(Catalogue::Ja));
}

#[rstest]
fn overrides_win_over_the_embedded_catalogue() {
    let localizer = en_us()
        .with_overrides("merge-unknown-property = No such key: { $offender }")
        .expect("override builds");
    let args = MessageArgs::unknown_key("colour", None);

    let resolved = localizer
        .lookup(MessageId::UnknownProperty, &args)
        .expect("override resolves");
    assert_eq!(strip_isolates(&resolved), "No such key: colour");
}

#[rstest]
fn later_overrides_win_over_earlier_ones() {
    let localizer = en_us()
        .with_overrides("merge-write-read-only = first { $key }")
        .and_then(|localizer| localizer.with_overrides("merge-write-read-only = second { $key }"))
        .expect("overrides build");
    let args = MessageArgs::new().with("key", "id");

    let resolved = localizer
        .lookup(MessageId::WriteReadOnly, &args)
        .expect("override resolves");
    assert_eq!(strip_isolates(&resolved), "second id");
}

#[rstest]
fn messages_absent_from_overrides_use_the_embedded_text() {
    let localizer = en_us()
        .with_overrides("merge-unknown-property = No such key: { $offender }")
        .expect("override builds");
    let args = MessageArgs::new().with("found", "string");

    let resolved = localizer
        .lookup(MessageId::TargetInvalid, &args)
        .expect("embedded message resolves");
    assert_eq!(
        strip_isolates(&resolved),
        "Target must be an object or array, found string"
    );
}

#[rstest]
fn formatting_failures_fall_through_to_the_embedded_text() {
    let localizer = en_us()
        .with_overrides("merge-unknown-property = Missing { $unset }")
        .expect("override builds");
    let args = MessageArgs::unknown_key("baz", None);

    let resolved = localizer
        .lookup(MessageId::UnknownProperty, &args)
        .expect("embedded message resolves");
    assert_eq!(strip_isolates(&resolved), "Unknown property \"baz\"");
}

#[rstest]
fn formatting_failures_without_embedded_text_return_none() {
    let localizer = FluentLocalizer::bare(langid!("fr-FR"))
        .with_overrides("merge-unknown-property = Manquant { $unset }")
        .expect("override builds");

    let args = MessageArgs::unknown_key("baz", None);
    assert!(localizer.lookup(MessageId::UnknownProperty, &args).is_none());
    assert_eq!(
        localizer.message(MessageId::UnknownProperty, &args, "fallback"),
        "fallback"
    );
}

#[rstest]
fn bare_localizers_report_every_message_missing() {
    let localizer = FluentLocalizer::bare(langid!("fr-FR"))
        .with_overrides("merge-unknown-property = Propriété inconnue")
        .expect("override builds");

    let missing = localizer.missing();
    assert_eq!(missing.len(), MessageId::ALL.len() - 1);
    assert!(!missing.contains(&MessageId::UnknownProperty));
    assert_eq!(localizer.catalogue(), None);
    assert_eq!(localizer.locale(), &langid!("fr-FR"));
}

#[rstest]
fn unsupported_locales_are_rejected() {
    let err = FluentLocalizer::embedded(langid!("fr-FR")).expect_err("no French catalogue");
    assert!(matches!(
        err,
        CatalogueError::UnsupportedLocale { ref locale } if locale == &langid!("fr-FR")
    ));
}

#[rstest]
#[case::typo(
    "merge-unknown-propery = x",
    "merge-unknown-propery",
    Some("merge-unknown-property")
)]
#[case::unrelated("qqq = x", "qqq", None)]
fn overrides_reject_unknown_messages(
    #[case] source: &str,
    #[case] id: &str,
    #[case] suggestion: Option<&str>,
) {
    let err = en_us().with_overrides(source).expect_err("unknown message");
    match err {
        CatalogueError::UnknownMessage {
            id: ref actual,
            suggestion: ref actual_suggestion,
        } => {
            assert_eq!(actual, id);
            assert_eq!(actual_suggestion.as_deref(), suggestion);
        }
        other => panic!("expected UnknownMessage, got {other:?}"),
    }
}

#[rstest]
fn unknown_message_errors_name_the_suggestion() {
    let err = CatalogueError::UnknownMessage {
        id: String::from("merge-push-targte"),
        suggestion: Some(String::from("merge-push-target")),
    };
    assert_eq!(
        err.to_string(),
        "unknown message \"merge-push-targte\"; did you mean \"merge-push-target\"?"
    );
}

#[rstest]
#[case::syntax("merge-unknown-property")]
#[case::dotted_name("merge.unknown-property = x")]
#[case::duplicate("merge-write-read-only = a { $key }\nmerge-write-read-only = b { $key }")]
fn malformed_overrides_are_rejected(#[case] source: &str) {
    let err = en_us().with_overrides(source).expect_err("malformed catalogue");
    assert!(matches!(
        err,
        CatalogueError::Parse { .. } | CatalogueError::Registration { .. }
    ));
}

#[rstest]
fn message_names_round_trip() {
    for id in MessageId::ALL {
        assert_eq!(MessageId::from_name(id.as_str()), Some(id));
        assert_eq!(id.to_string(), id.as_str());
    }
}
