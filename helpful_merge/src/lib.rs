//! Configurable structural merging with typo-correcting diagnostics.
//!
//! [`merge`] copies the attributes of a source [`Value`] into a target,
//! recursively when asked to, honouring per-attribute metadata (computed and
//! non-enumerable attributes) and a selectable [`ArrayStrategy`]. When a
//! closed target rejects a new attribute, the error names the existing
//! attribute the caller most likely meant:
//!
//! ```rust
//! use helpful_merge::{MergeError, Value, merge};
//! use serde_json::json;
//!
//! let target = Value::from(json!({"foo": null, "bar": null})).sealed();
//! let err = merge(&target, &Value::from(json!({"baz": 1})), None::<bool>).unwrap_err();
//!
//! assert_eq!(err.to_string(), "Unknown property \"baz\". Did you mean \"bar\"?");
//! assert!(matches!(err, MergeError::AttributeWrite { .. }));
//! ```
//!
//! Statically typed data enters and leaves the tree through
//! [`Value::from_serialize`] and [`Value::deserialize_into`].

mod builder;
mod classify;
mod config;
mod derive;
mod engine;
mod error;
mod localizer;
mod report;
mod strategy;
mod suggest;
pub mod value;

pub use builder::MergeBuilder;
pub use classify::{Descriptor, classify};
pub use config::{Config, MergeOptions, OPTION_NAMES, Options, resolve};
pub use derive::{Factory, TypeRegistry};
pub use engine::{merge, merge_with};
pub use error::{MergeError, MergeResult};
pub use localizer::{
    Catalogue, CatalogueError, FluentLocalizer, Localizer, MessageArgs, MessageId, NoOpLocalizer,
};
pub use report::{MessageFormatter, default_formatter, default_message, localized_formatter};
pub use strategy::ArrayStrategy;
pub use suggest::{Candidate, best_candidate, best_match, total_matching};
pub use unic_langid::{LanguageIdentifier, langid};
pub use value::{Array, Extensibility, Object, Property, Value, ValueKind, WriteError};
