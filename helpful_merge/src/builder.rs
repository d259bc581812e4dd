//! Chained construction of multi-source merges.

use crate::config::{MergeOptions, resolve};
use crate::engine::merge_with;
use crate::error::MergeResult;
use crate::value::Value;

/// Collects a target, sources and options, then merges on [`exec`].
///
/// The setters may be called in any order; calling one again replaces the
/// earlier value.
///
/// [`exec`]: MergeBuilder::exec
///
/// # Examples
/// ```rust
/// use helpful_merge::{MergeBuilder, Value};
/// use serde_json::json;
///
/// let merged = MergeBuilder::new()
///     .from([Value::from(json!({"foo": "foo"})), Value::from(json!({"foo": "bar"}))])
///     .exec()?;
/// assert_eq!(merged.to_json(), json!({"foo": "bar"}));
/// # Ok::<_, helpful_merge::MergeError>(())
/// ```
#[derive(Debug, Default)]
pub struct MergeBuilder {
    target: Option<Value>,
    sources: Vec<Value>,
    options: MergeOptions,
}

impl MergeBuilder {
    /// Creates a builder with no target, no sources and no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value merged into and returned.
    #[must_use]
    pub fn to(mut self, target: Value) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the values merged from, applied in order so later sources win.
    #[must_use]
    pub fn from(mut self, sources: impl IntoIterator<Item = Value>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    /// Sets the options shared by every merge.
    #[must_use]
    pub fn with(mut self, options: impl Into<MergeOptions>) -> Self {
        self.options = options.into();
        self
    }

    /// Merges every source into the target, or into a fresh empty object
    /// when no target was given, and returns it.
    ///
    /// Options are resolved once before the first source is applied.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::MergeError`] raised while resolving the
    /// options or merging a source. Sources before the failing one have
    /// already been applied.
    pub fn exec(self) -> MergeResult<Value> {
        let config = resolve(self.options)?;
        let target = self.target.unwrap_or_else(Value::empty_object);
        for source in &self.sources {
            merge_with(&target, source, &config)?;
        }
        Ok(target)
    }
}
