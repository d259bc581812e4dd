//! Merge configuration and the options accepted by [`crate::merge`].
//!
//! Callers describe options as an [`Options`] structure (or a dynamic
//! [`Value`]), the `true` shorthand for a deep merge, or nothing at all.
//! [`resolve`] turns any of those into a complete [`Config`], which is then
//! shared unchanged by every recursive step of one merge.

mod options;
mod resolve;

use std::fmt;

pub use options::{OPTION_NAMES, Options};
pub use resolve::resolve;

use crate::derive::TypeRegistry;
use crate::report::{MessageFormatter, default_formatter};
use crate::strategy::ArrayStrategy;
use crate::value::Value;

/// Fully resolved merge configuration.
#[derive(Clone)]
pub struct Config {
    /// Recurse into nested containers instead of assigning them.
    pub deep: bool,
    /// Assign source containers by reference when the target attribute is
    /// absent or `null`.
    pub use_reference_if_target_unset: bool,
    /// Assign source arrays by reference instead of merging them.
    pub use_reference_if_array: bool,
    /// Copy computed (getter-only) attributes, evaluated.
    pub include_read_only: bool,
    /// Copy non-enumerable attributes.
    pub include_non_enumerable: bool,
    /// How array sources are reconciled.
    pub array_strategy: ArrayStrategy,
    /// Instantiate registered types when deep merging into unset attributes.
    pub preserve_type_if_target_unset: bool,
    /// Formats unknown-attribute diagnostics.
    pub error_message: MessageFormatter,
    /// Factories consulted when `preserve_type_if_target_unset` is set.
    pub type_registry: TypeRegistry,
}

impl Config {
    /// The default configuration with `deep` enabled.
    #[must_use]
    pub fn deep() -> Self {
        Self {
            deep: true,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deep: false,
            use_reference_if_target_unset: false,
            use_reference_if_array: false,
            include_read_only: false,
            include_non_enumerable: false,
            array_strategy: ArrayStrategy::Replace,
            preserve_type_if_target_unset: false,
            error_message: default_formatter(),
            type_registry: TypeRegistry::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("deep", &self.deep)
            .field(
                "use_reference_if_target_unset",
                &self.use_reference_if_target_unset,
            )
            .field("use_reference_if_array", &self.use_reference_if_array)
            .field("include_read_only", &self.include_read_only)
            .field("include_non_enumerable", &self.include_non_enumerable)
            .field("array_strategy", &self.array_strategy)
            .field(
                "preserve_type_if_target_unset",
                &self.preserve_type_if_target_unset,
            )
            .field("error_message", &"<formatter>")
            .field("type_registry", &self.type_registry)
            .finish()
    }
}

/// The `options` argument of a merge.
#[derive(Clone, Debug, Default)]
pub enum MergeOptions {
    /// No options: the default configuration.
    #[default]
    Absent,
    /// Shorthand for `{deep: true}`.
    Deep,
    /// A partial option structure, validated during resolution.
    Fields(Options),
    /// An already resolved configuration, used as is.
    Resolved(Config),
}

impl From<bool> for MergeOptions {
    /// `true` is the deep shorthand; `false` means no options.
    fn from(deep: bool) -> Self {
        if deep { Self::Deep } else { Self::Absent }
    }
}

impl From<Options> for MergeOptions {
    fn from(options: Options) -> Self {
        Self::Fields(options)
    }
}

impl From<Config> for MergeOptions {
    fn from(config: Config) -> Self {
        Self::Resolved(config)
    }
}

impl From<&Config> for MergeOptions {
    fn from(config: &Config) -> Self {
        Self::Resolved(config.clone())
    }
}

impl From<Value> for MergeOptions {
    /// Interprets a dynamic options argument: `true` is the deep shorthand,
    /// containers are option structures, anything else means no options.
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(true) => Self::Deep,
            Value::Object(_) | Value::Array(_) => Self::Fields(Options::from(value)),
            _ => Self::Absent,
        }
    }
}

impl From<serde_json::Value> for MergeOptions {
    fn from(json: serde_json::Value) -> Self {
        Self::from(Value::from(json))
    }
}

impl<T: Into<Self>> From<Option<T>> for MergeOptions {
    fn from(options: Option<T>) -> Self {
        options.map_or(Self::Absent, Into::into)
    }
}
