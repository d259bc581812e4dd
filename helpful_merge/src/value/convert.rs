//! Conversions between the value tree and `serde_json`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

use super::{Array, Object, Value};

impl From<Json> for Value {
    /// Builds a fresh tree; every container in the result is newly allocated.
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(flag) => Self::Bool(flag),
            Json::Number(number) => Self::Number(number),
            Json::String(text) => Self::String(text),
            Json::Array(items) => Self::array(items.into_iter().map(Self::from).collect::<Array>()),
            Json::Object(map) => Self::object(
                map.into_iter()
                    .fold(Object::new(), |object, (key, value)| {
                        object.with(key, Self::from(value))
                    }),
            ),
        }
    }
}

impl Value {
    /// Renders the tree as JSON.
    ///
    /// Only enumerable attributes are emitted and getters are evaluated, the
    /// same view a JSON serialiser of the original structure would see.
    /// Cyclic trees recurse without bound.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Bool(flag) => Json::Bool(*flag),
            Self::Number(number) => Json::Number(number.clone()),
            Self::String(text) => Json::String(text.clone()),
            Self::Array(array) => {
                let items = array.borrow().items().to_vec();
                Json::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Object(object) => {
                let properties: Vec<_> = object
                    .borrow()
                    .properties()
                    .filter(|(_, property)| property.is_enumerable())
                    .map(|(name, property)| (name.to_owned(), property.clone()))
                    .collect();
                let mut map = Map::with_capacity(properties.len());
                for (name, property) in properties {
                    map.insert(name, property.read().to_json());
                }
                Json::Object(map)
            }
        }
    }

    /// Adapts any serialisable value into a fresh tree.
    ///
    /// # Errors
    ///
    /// Returns the serialiser's error when `value` cannot be represented as
    /// JSON (for example, maps with non-string keys).
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self::from)
    }

    /// Reads the tree back into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the deserialiser's error when the tree does not match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.to_json())
    }
}
