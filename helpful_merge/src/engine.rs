//! The recursive merge engine.

use crate::classify::{Descriptor, own_entries};
use crate::config::{Config, MergeOptions, resolve};
use crate::derive::empty_like;
use crate::error::{MergeError, MergeResult};
use crate::report::enrich;
use crate::strategy::{self, ArrayStrategy};
use crate::value::Value;

/// Merges the attributes of `source` into `target` and returns `target`.
///
/// `options` is resolved once with [`resolve`] and then shared by every
/// recursive step. The returned value aliases `target`; containers are
/// mutated in place.
///
/// # Errors
///
/// Returns the resolution errors described on [`resolve`], and the merge
/// errors described on [`merge_with`].
///
/// # Examples
/// ```rust
/// use helpful_merge::{Value, merge};
/// use serde_json::json;
///
/// let target = Value::from(json!({"foo": {"bar": null}}));
/// let source = Value::from(json!({"foo": {"bar": 1}}));
///
/// let merged = merge(&target, &source, true)?;
/// assert!(merged.same_ref(&target));
/// assert_eq!(target.to_json(), json!({"foo": {"bar": 1}}));
/// assert!(!target.attribute("foo").unwrap().same_ref(&source.attribute("foo").unwrap()));
/// # Ok::<_, helpful_merge::MergeError>(())
/// ```
pub fn merge(
    target: &Value,
    source: &Value,
    options: impl Into<MergeOptions>,
) -> MergeResult<Value> {
    let config = resolve(options)?;
    merge_with(target, source, &config)?;
    Ok(target.clone())
}

/// Merges `source` into `target` under an already resolved `config`.
///
/// Attributes are visited in source enumeration order. Earlier writes are
/// kept when a later one fails; there is no rollback.
///
/// # Errors
///
/// - [`MergeError::TargetInvalid`] / [`MergeError::SourceInvalid`] when
///   either side is not an object or an array.
/// - [`MergeError::PushTargetNotSequence`] when an array is pushed into a
///   non-array under [`ArrayStrategy::Push`].
/// - [`MergeError::AttributeWrite`] when a closed target rejects a new key.
/// - [`MergeError::Write`] wrapping [`WriteError::InvalidIndex`] when an
///   array target is given a key that is not a canonical index below
///   `u32::MAX`, or one more than 1024 elements past its end. Named
///   attributes never land on arrays.
/// - [`MergeError::Write`] for every other rejected write, such as a
///   read-only attribute or a failing type factory.
///
/// [`WriteError::InvalidIndex`]: crate::WriteError::InvalidIndex
pub fn merge_with(target: &Value, source: &Value, config: &Config) -> MergeResult<()> {
    if !target.is_container() {
        return Err(MergeError::TargetInvalid {
            found: target.kind(),
        });
    }
    if !source.is_container() {
        return Err(MergeError::SourceInvalid {
            found: source.kind(),
        });
    }
    if source.is_array() && config.array_strategy == ArrayStrategy::Push {
        return strategy::push(target, source);
    }

    for (key, property) in own_entries(source) {
        if !Descriptor::of(&property).include(config) {
            continue;
        }
        let value = property.read();
        let current = target.attribute(&key).filter(|existing| !existing.is_null());

        if assigns_shallowly(&value, current.as_ref(), config) {
            target
                .set_attribute(&key, value)
                .map_err(|err| enrich(err, target, &key, &config.error_message))?;
            continue;
        }

        let nested = match current {
            Some(existing) => existing,
            None => {
                empty_like(
                    &value,
                    config.preserve_type_if_target_unset,
                    &config.type_registry,
                )
                .and_then(|empty| target.set_attribute(&key, empty))
                .map_err(|err| enrich(err, target, &key, &config.error_message))?;
                target.attribute(&key).unwrap_or_default()
            }
        };
        tracing::trace!(key = %key, "merging nested container");
        merge_with(&nested, &value, config)?;
    }

    Ok(())
}

/// Decides whether `value` is assigned as is rather than merged into.
fn assigns_shallowly(value: &Value, current: Option<&Value>, config: &Config) -> bool {
    !config.deep
        || !value.is_container()
        || (value.is_array() && config.use_reference_if_array)
        || (current.is_none() && config.use_reference_if_target_unset)
}
