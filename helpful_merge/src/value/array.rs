//! Ordered sequences addressed by stringified indices.

use std::fmt;

use super::{Extensibility, Value, WriteError};

/// Longest run of `null` padding a single write may introduce.
const MAX_GAP: usize = 1024;

/// An ordered sequence of values.
#[derive(Clone, Default)]
pub struct Array {
    items: Vec<Value>,
    extensibility: Extensibility,
}

impl Array {
    /// Creates an empty, extensible sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            extensibility: Extensibility::Extensible,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Elements in order.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Stringified indices `0..len`.
    pub fn keys(&self) -> impl Iterator<Item = String> + use<> {
        (0..self.items.len()).map(|index| index.to_string())
    }

    /// Current extensibility level.
    #[must_use]
    pub const fn extensibility(&self) -> Extensibility {
        self.extensibility
    }

    /// Appends every value in order.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::NotExtensible`] naming the first index that
    /// could not be added when the sequence is closed. Nothing is appended in
    /// that case.
    pub fn push_all(&mut self, values: impl IntoIterator<Item = Value>) -> Result<(), WriteError> {
        let mut values = values.into_iter().peekable();
        if values.peek().is_some() && !self.extensibility.allows_new_keys() {
            return Err(WriteError::NotExtensible {
                key: self.items.len().to_string(),
            });
        }
        self.items.extend(values);
        Ok(())
    }

    /// Assigns the element addressed by `key`.
    ///
    /// Writing past the end grows the sequence, filling any gap with `null`.
    /// A write more than 1024 elements past the end is rejected with
    /// [`WriteError::InvalidIndex`].
    pub(super) fn set(&mut self, key: &str, value: Value) -> Result<(), WriteError> {
        let Some(index) = parse_index(key) else {
            return Err(WriteError::InvalidIndex {
                key: key.to_owned(),
            });
        };
        if let Some(slot) = self.items.get_mut(index) {
            if self.extensibility == Extensibility::Frozen {
                return Err(WriteError::ReadOnly {
                    key: key.to_owned(),
                });
            }
            *slot = value;
            return Ok(());
        }
        if !self.extensibility.allows_new_keys() {
            return Err(WriteError::NotExtensible {
                key: key.to_owned(),
            });
        }
        if index - self.items.len() > MAX_GAP {
            return Err(WriteError::InvalidIndex {
                key: key.to_owned(),
            });
        }
        self.items.resize(index, Value::Null);
        self.items.push(value);
        Ok(())
    }

    /// Raises the extensibility level; levels never decrease.
    pub fn restrict(&mut self, level: Extensibility) {
        self.extensibility = self.extensibility.max(level);
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            extensibility: Extensibility::Extensible,
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// Parses a canonical array index: decimal digits without leading zeros,
/// below `u32::MAX`.
pub(super) fn parse_index(key: &str) -> Option<usize> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>()
        .ok()
        .filter(|index| *index < u32::MAX)
        .and_then(|index| usize::try_from(index).ok())
}
