//! Materialises empty containers for deep merges into unset attributes.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::value::{Value, WriteError};

/// Builds an empty instance of a registered type. Errors are reported as a
/// human-readable reason.
pub type Factory = Rc<dyn Fn() -> Result<Value, String>>;

/// Maps type tags to zero-argument factories.
///
/// Consulted only when `preserveTypeIfTargetUnset` is enabled. Objects whose
/// tag has no factory fall back to a plain empty object.
///
/// # Examples
/// ```rust
/// use helpful_merge::{Object, TypeRegistry, Value};
///
/// let registry = TypeRegistry::new().register("Point", || {
///     Ok(Value::object(Object::with_type("Point").with("x", 0).with("y", 0)))
/// });
/// assert!(registry.contains("Point"));
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistry {
    factories: HashMap<String, Factory>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` for `type_tag`, replacing any previous factory.
    #[must_use]
    pub fn register(
        mut self,
        type_tag: impl Into<String>,
        factory: impl Fn() -> Result<Value, String> + 'static,
    ) -> Self {
        self.factories.insert(type_tag.into(), Rc::new(factory));
        self
    }

    /// Returns `true` when a factory exists for `type_tag`.
    #[must_use]
    pub fn contains(&self, type_tag: &str) -> bool {
        self.factories.contains_key(type_tag)
    }

    /// Returns the factory registered for `type_tag`.
    #[must_use]
    pub fn get(&self, type_tag: &str) -> Option<&Factory> {
        self.factories.get(type_tag)
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.factories.keys().collect();
        tags.sort();
        f.debug_struct("TypeRegistry").field("types", &tags).finish()
    }
}

/// Creates the empty container a deep merge of `source` starts from.
///
/// Arrays yield an empty array. Tagged objects yield a fresh instance from
/// `registry` when `preserve_type` is set and a factory exists. Everything
/// else yields an empty object.
pub(crate) fn empty_like(
    source: &Value,
    preserve_type: bool,
    registry: &TypeRegistry,
) -> Result<Value, WriteError> {
    let tag = match source {
        Value::Array(_) => return Ok(Value::empty_array()),
        Value::Object(object) if preserve_type => object.borrow().type_tag().map(str::to_owned),
        _ => None,
    };
    let Some((type_name, factory)) =
        tag.and_then(|name| registry.get(&name).cloned().map(|factory| (name, factory)))
    else {
        return Ok(Value::empty_object());
    };

    match factory() {
        Ok(instance) if instance.is_container() => Ok(instance),
        Ok(other) => Err(WriteError::Construction {
            type_name,
            reason: format!("factory returned a {}", other.kind()),
        }),
        Err(reason) => Err(WriteError::Construction { type_name, reason }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn registry() -> TypeRegistry {
        TypeRegistry::new()
            .register("Point", || Ok(Value::object(Object::with_type("Point").with("x", 0))))
            .register("Broken", || Err(String::from("no default")))
            .register("Scalar", || Ok(Value::from(1)))
    }

    fn tagged(tag: &str) -> Value {
        Value::object(Object::with_type(tag))
    }

    #[rstest]
    fn arrays_become_empty_arrays(registry: TypeRegistry) {
        let derived = empty_like(&Value::from(json!([1, 2])), true, &registry)
            .expect("arrays always derive");
        assert!(derived.is_array());
        assert!(derived.is_empty());
    }

    #[rstest]
    fn registered_types_are_instantiated_when_enabled(registry: TypeRegistry) {
        let derived = empty_like(&tagged("Point"), true, &registry).expect("factory succeeds");
        let Value::Object(object) = &derived else {
            panic!("expected an object, got {derived:?}");
        };
        assert_eq!(object.borrow().type_tag(), Some("Point"));
    }

    #[rstest]
    #[case::disabled("Point", false)]
    #[case::unregistered("Line", true)]
    fn falls_back_to_plain_objects(
        registry: TypeRegistry,
        #[case] tag: &str,
        #[case] preserve: bool,
    ) {
        let derived = empty_like(&tagged(tag), preserve, &registry).expect("plain objects derive");
        let Value::Object(object) = &derived else {
            panic!("expected an object, got {derived:?}");
        };
        assert_eq!(object.borrow().type_tag(), None);
        assert!(object.borrow().is_empty());
    }

    #[rstest]
    #[case::factory_error("Broken", "no default")]
    #[case::scalar_instance("Scalar", "factory returned a number")]
    fn construction_failures_name_the_type(
        registry: TypeRegistry,
        #[case] tag: &str,
        #[case] reason: &str,
    ) {
        let err = empty_like(&tagged(tag), true, &registry).expect_err("factory fails");
        assert_eq!(
            err,
            WriteError::Construction {
                type_name: tag.to_owned(),
                reason: reason.to_owned(),
            }
        );
    }
}
