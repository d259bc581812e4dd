//! Text normalisation helpers for localised diagnostics.

/// Removes Unicode bidi isolate markers inserted by Fluent around
/// interpolated arguments.
#[must_use]
pub fn strip_isolates(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(*ch, '\u{2068}' | '\u{2069}'))
        .collect()
}
