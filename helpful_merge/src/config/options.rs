//! Builder for partial option structures.

use std::fmt;

use crate::derive::TypeRegistry;
use crate::report::MessageFormatter;
use crate::strategy::ArrayStrategy;
use crate::value::{Object, Property, Value};

pub(super) const DEEP: &str = "deep";
pub(super) const USE_REFERENCE_IF_TARGET_UNSET: &str = "useReferenceIfTargetUnset";
pub(super) const USE_REFERENCE_IF_ARRAY: &str = "useReferenceIfArray";
pub(super) const INCLUDE_READ_ONLY: &str = "includeReadOnly";
pub(super) const INCLUDE_NON_ENUMERABLE: &str = "includeNonEnumerable";
pub(super) const ARRAY_STRATEGY: &str = "arrayStrategy";
pub(super) const PRESERVE_TYPE_IF_TARGET_UNSET: &str = "preserveTypeIfTargetUnset";
pub(super) const ERROR_MESSAGE: &str = "errorMessage";

/// Every option name an option structure may use, in record order.
pub const OPTION_NAMES: [&str; 8] = [
    DEEP,
    USE_REFERENCE_IF_TARGET_UNSET,
    USE_REFERENCE_IF_ARRAY,
    INCLUDE_READ_ONLY,
    INCLUDE_NON_ENUMERABLE,
    ARRAY_STRATEGY,
    PRESERVE_TYPE_IF_TARGET_UNSET,
    ERROR_MESSAGE,
];

/// A partial option structure.
///
/// Typed setters cover every known option; [`Options::set`] accepts any name
/// so that dynamic callers can be validated the same way. Unknown names are
/// only rejected when the options are resolved.
///
/// # Examples
/// ```rust
/// use helpful_merge::{ArrayStrategy, Options, resolve};
///
/// let config = resolve(Options::new().deep(true).array_strategy(ArrayStrategy::Push))?;
/// assert!(config.deep);
/// assert_eq!(config.array_strategy, ArrayStrategy::Push);
/// # Ok::<_, helpful_merge::MergeError>(())
/// ```
#[derive(Clone, Default)]
pub struct Options {
    fields: Object,
    error_message: Option<MessageFormatter>,
    type_registry: Option<TypeRegistry>,
}

impl Options {
    /// Creates an empty option structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `deep`.
    #[must_use]
    pub fn deep(self, enabled: bool) -> Self {
        self.set(DEEP, enabled)
    }

    /// Sets `useReferenceIfTargetUnset`.
    #[must_use]
    pub fn use_reference_if_target_unset(self, enabled: bool) -> Self {
        self.set(USE_REFERENCE_IF_TARGET_UNSET, enabled)
    }

    /// Sets `useReferenceIfArray`.
    #[must_use]
    pub fn use_reference_if_array(self, enabled: bool) -> Self {
        self.set(USE_REFERENCE_IF_ARRAY, enabled)
    }

    /// Sets `includeReadOnly`.
    #[must_use]
    pub fn include_read_only(self, enabled: bool) -> Self {
        self.set(INCLUDE_READ_ONLY, enabled)
    }

    /// Sets `includeNonEnumerable`.
    #[must_use]
    pub fn include_non_enumerable(self, enabled: bool) -> Self {
        self.set(INCLUDE_NON_ENUMERABLE, enabled)
    }

    /// Sets `arrayStrategy`.
    #[must_use]
    pub fn array_strategy(self, strategy: ArrayStrategy) -> Self {
        self.set(ARRAY_STRATEGY, strategy)
    }

    /// Sets `preserveTypeIfTargetUnset`.
    #[must_use]
    pub fn preserve_type_if_target_unset(self, enabled: bool) -> Self {
        self.set(PRESERVE_TYPE_IF_TARGET_UNSET, enabled)
    }

    /// Sets an option by name. The name is checked during resolution.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.define(name, Property::data(value));
        self
    }

    /// Installs the formatter used for unknown-attribute diagnostics.
    #[must_use]
    pub fn error_message(
        mut self,
        formatter: impl Fn(&str, Option<&str>) -> String + 'static,
    ) -> Self {
        self.error_message = Some(std::rc::Rc::new(formatter));
        self
    }

    /// Installs an already shared formatter.
    #[must_use]
    pub fn error_formatter(mut self, formatter: MessageFormatter) -> Self {
        self.error_message = Some(formatter);
        self
    }

    /// Installs the factories used by `preserveTypeIfTargetUnset`.
    #[must_use]
    pub fn type_registry(mut self, registry: TypeRegistry) -> Self {
        self.type_registry = Some(registry);
        self
    }

    /// The option structure as a value tree.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::object(self.fields.clone())
    }

    pub(super) const fn formatter(&self) -> Option<&MessageFormatter> {
        self.error_message.as_ref()
    }

    pub(super) const fn registry(&self) -> Option<&TypeRegistry> {
        self.type_registry.as_ref()
    }
}

impl From<Value> for Options {
    /// Copies the attributes of an object, or the elements of an array keyed
    /// by index. The caller's structure is never modified.
    fn from(value: Value) -> Self {
        let fields = match value {
            Value::Object(object) => object.borrow().clone(),
            Value::Array(array) => array
                .borrow()
                .items()
                .iter()
                .enumerate()
                .fold(Object::new(), |fields, (index, item)| {
                    fields.with(index.to_string(), item.clone())
                }),
            _ => Object::new(),
        };
        Self {
            fields,
            ..Self::default()
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("fields", &self.fields)
            .field("error_message", &self.error_message.as_ref().map(|_| "<formatter>"))
            .field("type_registry", &self.type_registry)
            .finish()
    }
}
