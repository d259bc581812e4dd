//! Ordered attribute maps with per-attribute metadata.

use std::fmt;
use std::rc::Rc;

use super::{Extensibility, Value, WriteError};

/// Computes the current value of an accessor attribute.
pub type Getter = Rc<dyn Fn() -> Value>;

/// Receives values assigned to an accessor attribute.
pub type Setter = Rc<dyn Fn(Value)>;

/// Storage behind an attribute.
#[derive(Clone)]
pub enum Slot {
    /// A stored value.
    Data {
        /// Current value.
        value: Value,
        /// Whether assignments are accepted.
        writable: bool,
    },
    /// A computed attribute backed by closures.
    Accessor {
        /// Produces the value on read.
        get: Option<Getter>,
        /// Consumes the value on write.
        set: Option<Setter>,
    },
}

/// An own attribute of an [`Object`].
#[derive(Clone)]
pub struct Property {
    slot: Slot,
    enumerable: bool,
}

impl Property {
    /// An enumerable, writable data attribute.
    #[must_use]
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            slot: Slot::Data {
                value: value.into(),
                writable: true,
            },
            enumerable: true,
        }
    }

    /// An enumerable accessor attribute.
    #[must_use]
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Self {
            slot: Slot::Accessor { get, set },
            enumerable: true,
        }
    }

    /// An enumerable attribute with a getter and no setter.
    #[must_use]
    pub fn getter(get: impl Fn() -> Value + 'static) -> Self {
        Self::accessor(Some(Rc::new(get)), None)
    }

    /// Marks the attribute as non-enumerable.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.enumerable = false;
        self
    }

    /// Marks a data attribute as non-writable. Accessors are unaffected.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        if let Slot::Data { writable, .. } = &mut self.slot {
            *writable = false;
        }
        self
    }

    /// The storage behind this attribute.
    #[must_use]
    pub const fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Whether the attribute shows up in enumeration.
    #[must_use]
    pub const fn is_enumerable(&self) -> bool {
        self.enumerable
    }

    /// A computed attribute has a getter but no setter.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(
            &self.slot,
            Slot::Accessor {
                get: Some(_),
                set: None
            }
        )
    }

    /// Reads the attribute, evaluating the getter for accessors. An accessor
    /// without a getter reads as `null`.
    #[must_use]
    pub fn read(&self) -> Value {
        match &self.slot {
            Slot::Data { value, .. } => value.clone(),
            Slot::Accessor { get: Some(get), .. } => get(),
            Slot::Accessor { get: None, .. } => Value::Null,
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Data { value, writable } => f
                .debug_struct("Data")
                .field("value", value)
                .field("writable", writable)
                .field("enumerable", &self.enumerable)
                .finish(),
            Slot::Accessor { get, set } => f
                .debug_struct("Accessor")
                .field("get", &get.as_ref().map(|_| "<getter>"))
                .field("set", &set.as_ref().map(|_| "<setter>"))
                .field("enumerable", &self.enumerable)
                .finish(),
        }
    }
}

/// A map of named attributes that preserves insertion order.
#[derive(Clone, Default)]
pub struct Object {
    properties: Vec<(String, Property)>,
    extensibility: Extensibility,
    type_tag: Option<String>,
}

impl Object {
    /// Creates an empty, extensible object.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            extensibility: Extensibility::Extensible,
            type_tag: None,
        }
    }

    /// Creates an empty object tagged as an instance of `type_tag`.
    #[must_use]
    pub fn with_type(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            ..Self::new()
        }
    }

    /// Adds or replaces a data attribute, builder style.
    ///
    /// Definition ignores extensibility; use it while constructing objects.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(key, Property::data(value));
        self
    }

    /// Adds or replaces an attribute with explicit metadata, builder style.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, property: Property) -> Self {
        self.define(key, property);
        self
    }

    /// Defines `key` with `property`, replacing any existing definition while
    /// keeping its enumeration position.
    pub fn define(&mut self, key: impl Into<String>, property: Property) {
        let key = key.into();
        match self.position(&key) {
            Some(index) => {
                if let Some(entry) = self.properties.get_mut(index) {
                    entry.1 = property;
                }
            }
            None => self.properties.push((key, property)),
        }
    }

    /// Name of the type this object was constructed as, if any.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Current extensibility level.
    #[must_use]
    pub const fn extensibility(&self) -> Extensibility {
        self.extensibility
    }

    /// Number of own attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` when the object has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns `true` when `key` is an own attribute.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Looks up an own attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find_map(|(name, property)| (name == key).then_some(property))
    }

    /// Own attribute names in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    /// Enumerable own attribute names in enumeration order.
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, property)| property.is_enumerable())
            .map(|(name, _)| name.as_str())
    }

    /// Own attributes in enumeration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties
            .iter()
            .map(|(name, property)| (name.as_str(), property))
    }

    /// Assigns `value` to `key`.
    ///
    /// When the attribute is an accessor with a setter, the setter is handed
    /// back together with the value instead of being called here, so callers
    /// holding a `RefCell` borrow can release it first.
    pub(super) fn assign(
        &mut self,
        key: &str,
        value: Value,
    ) -> Result<Option<(Setter, Value)>, WriteError> {
        let read_only = || WriteError::ReadOnly {
            key: key.to_owned(),
        };
        let Some(index) = self.position(key) else {
            if !self.extensibility.allows_new_keys() {
                return Err(WriteError::NotExtensible {
                    key: key.to_owned(),
                });
            }
            self.properties.push((key.to_owned(), Property::data(value)));
            return Ok(None);
        };
        let Some((_, property)) = self.properties.get_mut(index) else {
            return Err(read_only());
        };
        match &mut property.slot {
            Slot::Data { writable: false, .. } => Err(read_only()),
            Slot::Data { value: slot, .. } => {
                *slot = value;
                Ok(None)
            }
            Slot::Accessor { set: Some(set), .. } => Ok(Some((Rc::clone(set), value))),
            Slot::Accessor { set: None, .. } => Err(read_only()),
        }
    }

    /// Raises the extensibility level; levels never decrease.
    pub fn restrict(&mut self, level: Extensibility) {
        if level <= self.extensibility {
            return;
        }
        self.extensibility = level;
        if level == Extensibility::Frozen {
            for (_, property) in &mut self.properties {
                if let Slot::Data { writable, .. } = &mut property.slot {
                    *writable = false;
                }
            }
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.properties.iter().position(|(name, _)| name == key)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, property) in &self.properties {
            map.entry(name, property);
        }
        map.finish()
    }
}
