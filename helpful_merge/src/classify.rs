//! Enumerates source attributes and decides which ones a merge copies.

use crate::config::Config;
use crate::value::{Property, Value};

/// Per-attribute metadata consulted when deciding whether to copy it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Descriptor {
    /// The attribute has a getter and no setter.
    pub is_computed: bool,
    /// The attribute shows up in enumeration.
    pub is_enumerable: bool,
}

impl Descriptor {
    /// Describes `property`.
    #[must_use]
    pub const fn of(property: &Property) -> Self {
        Self {
            is_computed: property.is_computed(),
            is_enumerable: property.is_enumerable(),
        }
    }

    /// Returns `true` when `config` lets the attribute through both the
    /// read-only and the enumerability filters.
    #[must_use]
    pub const fn include(self, config: &Config) -> bool {
        (!self.is_computed || config.include_read_only)
            && (self.is_enumerable || config.include_non_enumerable)
    }
}

/// Snapshots the own attributes of `source` in enumeration order.
///
/// Array elements appear as enumerable data attributes keyed by index.
/// Scalars have no attributes.
pub(crate) fn own_entries(source: &Value) -> Vec<(String, Property)> {
    match source {
        Value::Array(array) => array
            .borrow()
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), Property::data(item.clone())))
            .collect(),
        Value::Object(object) => object
            .borrow()
            .properties()
            .map(|(key, property)| (key.to_owned(), property.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Classifies the attribute `key` of `source`, returning its descriptor when
/// it exists.
#[must_use]
pub fn classify(source: &Value, key: &str) -> Option<Descriptor> {
    match source {
        Value::Array(_) => source.has_own(key).then_some(Descriptor {
            is_computed: false,
            is_enumerable: true,
        }),
        Value::Object(object) => object.borrow().get(key).map(Descriptor::of),
        _ => None,
    }
}
