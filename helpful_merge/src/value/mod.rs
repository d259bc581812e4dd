//! Tagged value tree that the merge engine operates on.
//!
//! Statically typed data is adapted into this tree at the boundary (see
//! [`Value::from_serialize`]) so the engine can reason about attribute
//! metadata that Rust structs do not carry: accessor properties, enumerability,
//! and closed attribute sets. Containers are shared handles, so cloning a
//! [`Value`] that holds an object or array aliases it rather than copying it.
//! That aliasing is what shallow assignment means throughout the crate.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

mod array;
mod convert;
mod object;

pub use array::Array;
pub use object::{Getter, Object, Property, Setter, Slot};

/// How far a container accepts structural changes.
///
/// The levels are ordered: every level includes the restrictions of the
/// levels before it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub enum Extensibility {
    /// New attributes may be added.
    #[default]
    Extensible,
    /// New attributes are rejected; existing ones stay writable.
    NonExtensible,
    /// As [`Extensibility::NonExtensible`], and attributes cannot be removed.
    Sealed,
    /// As [`Extensibility::Sealed`], and every data attribute is read-only.
    Frozen,
}

impl Extensibility {
    /// Returns `true` when new attributes may still be added.
    #[must_use]
    pub const fn allows_new_keys(self) -> bool {
        matches!(self, Self::Extensible)
    }
}

/// Failure reported by a container when a single attribute write is refused.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum WriteError {
    /// The container is closed and `key` is not one of its attributes.
    #[error("cannot add property \"{key}\": object is not extensible")]
    NotExtensible {
        /// Attribute name that could not be added.
        key: String,
    },

    /// The attribute exists but cannot be assigned.
    #[error("cannot assign to read-only property \"{key}\"")]
    ReadOnly {
        /// Attribute name that rejected the write.
        key: String,
    },

    /// A sequence was addressed with a key that is not an index.
    #[error("\"{key}\" is not a valid array index")]
    InvalidIndex {
        /// Offending key.
        key: String,
    },

    /// A registered factory failed to build an empty instance.
    #[error("failed to construct an instance of \"{type_name}\": {reason}")]
    Construction {
        /// Type tag whose factory failed.
        type_name: String,
        /// Reason reported by the factory.
        reason: String,
    },
}

impl WriteError {
    /// Returns `true` for the "cannot add a new attribute" failure, the only
    /// kind that the suggestion path may enrich.
    #[must_use]
    pub const fn is_not_extensible(&self) -> bool {
        matches!(self, Self::NotExtensible { .. })
    }
}

/// Coarse classification of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// An ordered sequence.
    Array,
    /// A map of named attributes.
    Object,
}

impl ValueKind {
    /// Lower-case name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the value tree.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(serde_json::Number),
    /// A string scalar.
    String(String),
    /// Shared handle to a sequence.
    Array(Rc<RefCell<Array>>),
    /// Shared handle to a map of attributes.
    Object(Rc<RefCell<Object>>),
}

impl Value {
    /// Wraps `array` in a fresh shared handle.
    #[must_use]
    pub fn array(array: Array) -> Self {
        Self::Array(Rc::new(RefCell::new(array)))
    }

    /// Wraps `object` in a fresh shared handle.
    #[must_use]
    pub fn object(object: Object) -> Self {
        Self::Object(Rc::new(RefCell::new(object)))
    }

    /// Creates an empty, extensible object.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::object(Object::new())
    }

    /// Creates an empty, extensible array.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::array(Array::new())
    }

    /// Returns the coarse kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` for `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for sequences.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Truthiness as understood by dynamic option structures: `null`, `false`,
    /// zero and the empty string are false, everything else is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }

    /// Returns the string slice for string values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the boolean for boolean values.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Reports whether both values are the same container.
    ///
    /// Scalars never share identity, so this returns `false` for them.
    #[must_use]
    pub fn same_ref(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of own attributes of a container, or `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Array(array) => Some(array.borrow().len()),
            Self::Object(object) => Some(object.borrow().len()),
            _ => None,
        }
    }

    /// Returns `true` when a container has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Returns `true` when `key` is an own attribute of this container.
    #[must_use]
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            Self::Array(array) => array::parse_index(key).is_some_and(|i| i < array.borrow().len()),
            Self::Object(object) => object.borrow().contains_key(key),
            _ => false,
        }
    }

    /// Reads an own attribute, evaluating getters.
    ///
    /// The container borrow is released before a getter runs so accessors may
    /// inspect their owner.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<Self> {
        match self {
            Self::Array(array) => {
                let index = array::parse_index(key)?;
                array.borrow().get(index).cloned()
            }
            Self::Object(object) => {
                let property = object.borrow().get(key).cloned()?;
                Some(property.read())
            }
            _ => None,
        }
    }

    /// Convenience for reading a nested attribute by path.
    #[must_use]
    pub fn pointer<'a>(&self, path: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        path.into_iter()
            .try_fold(self.clone(), |node, key| node.attribute(key))
    }

    /// Own attribute names in enumeration order, enumerable or not.
    #[must_use]
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            Self::Array(array) => array.borrow().keys().collect(),
            Self::Object(object) => object.borrow().keys().map(str::to_owned).collect(),
            _ => Vec::new(),
        }
    }

    /// Enumerable own attribute names in enumeration order.
    #[must_use]
    pub fn enumerable_keys(&self) -> Vec<String> {
        match self {
            Self::Array(array) => array.borrow().keys().collect(),
            Self::Object(object) => object
                .borrow()
                .enumerable_keys()
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Extensibility level of a container; scalars report `None`.
    #[must_use]
    pub fn extensibility(&self) -> Option<Extensibility> {
        match self {
            Self::Array(array) => Some(array.borrow().extensibility()),
            Self::Object(object) => Some(object.borrow().extensibility()),
            _ => None,
        }
    }

    /// Returns `true` when this container accepts new attributes.
    #[must_use]
    pub fn is_extensible(&self) -> bool {
        self.extensibility()
            .is_some_and(Extensibility::allows_new_keys)
    }

    /// Assigns `value` to `key` with assignment semantics.
    ///
    /// Writable data attributes are overwritten, accessors with a setter
    /// receive the value, and new keys are added when the container is
    /// extensible. Setters run after the container borrow is released.
    ///
    /// # Errors
    ///
    /// Returns a [`WriteError`] describing why the container refused the
    /// write. Scalars refuse every write as [`WriteError::NotExtensible`].
    pub fn set_attribute(&self, key: &str, value: Self) -> Result<(), WriteError> {
        match self {
            Self::Array(array) => array.borrow_mut().set(key, value),
            Self::Object(object) => {
                let setter = object.borrow_mut().assign(key, value)?;
                if let Some((setter, pending)) = setter {
                    setter(pending);
                }
                Ok(())
            }
            _ => Err(WriteError::NotExtensible {
                key: key.to_owned(),
            }),
        }
    }

    /// Seals a container in place and returns it for chaining.
    #[must_use]
    pub fn sealed(self) -> Self {
        self.restrict(Extensibility::Sealed);
        self
    }

    /// Freezes a container in place and returns it for chaining.
    #[must_use]
    pub fn frozen(self) -> Self {
        self.restrict(Extensibility::Frozen);
        self
    }

    /// Prevents extensions of a container in place and returns it.
    #[must_use]
    pub fn non_extensible(self) -> Self {
        self.restrict(Extensibility::NonExtensible);
        self
    }

    fn restrict(&self, level: Extensibility) {
        match self {
            Self::Array(array) => array.borrow_mut().restrict(level),
            Self::Object(object) => object.borrow_mut().restrict(level),
            _ => {}
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Self::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Self::String(text) => f.debug_tuple("String").field(text).finish(),
            Self::Array(array) => match array.try_borrow() {
                Ok(inner) => fmt::Debug::fmt(&*inner, f),
                Err(_) => f.write_str("Array(<borrowed>)"),
            },
            Self::Object(object) => match object.try_borrow() {
                Ok(inner) => fmt::Debug::fmt(&*inner, f),
                Err(_) => f.write_str("Object(<borrowed>)"),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number.into())
    }
}

impl From<u64> for Value {
    fn from(number: u64) -> Self {
        Self::Number(number.into())
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(number.into())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::object(object)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::array(array)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests;
