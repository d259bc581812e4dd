//! Array strategies: element-wise replacement or wholesale appending.

use std::fmt;
use std::str::FromStr;

use crate::error::{MergeError, MergeResult};
use crate::value::Value;

/// How a sequence source is reconciled with its target.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ArrayStrategy {
    /// Merge by index, exactly like object attributes.
    #[default]
    Replace,
    /// Append every source element to the target sequence.
    Push,
}

impl ArrayStrategy {
    /// The option value naming this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "REPLACE",
            Self::Push => "PUSH",
        }
    }
}

impl fmt::Display for ArrayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrayStrategy {
    type Err = MergeError;

    /// Parses `"REPLACE"` or `"PUSH"`. Matching is exact.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "REPLACE" => Ok(Self::Replace),
            "PUSH" => Ok(Self::Push),
            other => Err(MergeError::InvalidArrayStrategy {
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<&Value> for ArrayStrategy {
    type Error = MergeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value.as_str() {
            Some(name) => name.parse(),
            None => Err(MergeError::InvalidArrayStrategy {
                value: value.to_json().to_string(),
            }),
        }
    }
}

impl From<ArrayStrategy> for Value {
    fn from(strategy: ArrayStrategy) -> Self {
        Self::from(strategy.as_str())
    }
}

/// Appends the elements of `source` to `target` in order.
///
/// `source` must be an array. Write failures from a closed target are
/// returned unchanged.
pub(crate) fn push(target: &Value, source: &Value) -> MergeResult<()> {
    let items = match source {
        Value::Array(array) => array.borrow().items().to_vec(),
        other => return Err(MergeError::SourceInvalid { found: other.kind() }),
    };
    let Value::Array(target_items) = target else {
        return Err(MergeError::PushTargetNotSequence {
            found: target.kind(),
        });
    };
    target_items.borrow_mut().push_all(items)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ValueKind, WriteError};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("REPLACE", ArrayStrategy::Replace)]
    #[case("PUSH", ArrayStrategy::Push)]
    fn parses_known_names(#[case] name: &str, #[case] expected: ArrayStrategy) {
        assert_eq!(name.parse::<ArrayStrategy>(), Ok(expected));
        assert_eq!(expected.as_str(), name);
    }

    #[rstest]
    #[case(Value::from("push"), "push")]
    #[case(Value::from("MERGE"), "MERGE")]
    #[case(Value::from(3), "3")]
    #[case(Value::Null, "null")]
    fn rejects_anything_else(#[case] value: Value, #[case] rendered: &str) {
        assert_eq!(
            ArrayStrategy::try_from(&value),
            Err(MergeError::InvalidArrayStrategy {
                value: rendered.to_owned()
            })
        );
    }

    #[rstest]
    fn push_appends_in_source_order() {
        let target = Value::from(json!(["foo", "bar"]));
        let source = Value::from(json!(["foo", "baz"]));

        push(&target, &source).expect("extensible arrays accept pushes");

        assert_eq!(target.to_json(), json!(["foo", "bar", "foo", "baz"]));
        assert_eq!(source.to_json(), json!(["foo", "baz"]));
    }

    #[rstest]
    fn push_shares_element_containers() {
        let element = Value::empty_object();
        let source = Value::from(crate::value::Array::from_iter([element.clone()]));
        let target = Value::empty_array();

        push(&target, &source).expect("extensible arrays accept pushes");

        assert!(target.attribute("0").is_some_and(|pushed| pushed.same_ref(&element)));
    }

    #[rstest]
    fn push_requires_an_array_target() {
        let err = push(&Value::empty_object(), &Value::from(json!([1])))
            .expect_err("objects cannot be pushed into");
        assert_eq!(
            err,
            MergeError::PushTargetNotSequence {
                found: ValueKind::Object
            }
        );
    }

    #[rstest]
    fn push_into_sealed_array_is_rethrown_verbatim() {
        let target = Value::from(json!([1])).sealed();
        let err = push(&target, &Value::from(json!([2]))).expect_err("sealed arrays cannot grow");
        assert_eq!(
            err,
            MergeError::Write(WriteError::NotExtensible {
                key: String::from("1")
            })
        );
    }
}
