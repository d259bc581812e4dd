//! Localised rendering of merge diagnostics.
//!
//! Every diagnostic the crate emits has a [`MessageId`]. A [`Localizer`]
//! turns an id and its [`MessageArgs`] into text; callers fall back to the
//! English [`Display`](std::fmt::Display) output when it returns nothing.

mod fluent;
mod ids;

pub use fluent::{Catalogue, CatalogueError, FluentLocalizer};
pub use ids::MessageId;

/// Named string arguments interpolated into a diagnostic.
///
/// Setting a name twice keeps the latest value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MessageArgs<'a> {
    pairs: Vec<(&'static str, &'a str)>,
}

impl<'a> MessageArgs<'a> {
    /// An empty argument set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Adds `name = value`, replacing an earlier value for `name`.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: &'a str) -> Self {
        match self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    /// The value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| *value)
    }

    /// Iterates over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no arguments are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `offender`, plus `suggestion` when one exists.
    pub(crate) fn unknown_key(offender: &'a str, suggestion: Option<&'a str>) -> Self {
        let args = Self::new().with("offender", offender);
        match suggestion {
            Some(candidate) => args.with("suggestion", candidate),
            None => args,
        }
    }
}

/// Renders diagnostics for a locale.
///
/// Implementations must be shareable across threads so one instance can back
/// every merge in a process.
pub trait Localizer: Send + Sync {
    /// Renders `id`, or returns `None` when no catalogue can produce it.
    fn lookup(&self, id: MessageId, args: &MessageArgs<'_>) -> Option<String>;

    /// Renders `id`, returning `fallback` when the lookup fails.
    fn message(&self, id: MessageId, args: &MessageArgs<'_>, fallback: &str) -> String {
        self.lookup(id, args).unwrap_or_else(|| fallback.to_owned())
    }
}

/// A [`Localizer`] with no catalogues; every lookup falls back.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpLocalizer;

impl NoOpLocalizer {
    /// Creates the localizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Localizer for NoOpLocalizer {
    fn lookup(&self, _id: MessageId, _args: &MessageArgs<'_>) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests;
