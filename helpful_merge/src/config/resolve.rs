//! Turns [`MergeOptions`] into a complete [`Config`].

use super::options::{
    ARRAY_STRATEGY, DEEP, ERROR_MESSAGE, INCLUDE_NON_ENUMERABLE, INCLUDE_READ_ONLY,
    PRESERVE_TYPE_IF_TARGET_UNSET, USE_REFERENCE_IF_ARRAY, USE_REFERENCE_IF_TARGET_UNSET,
};
use super::{Config, MergeOptions, Options};
use crate::engine::merge_with;
use crate::error::{MergeError, MergeResult};
use crate::strategy::ArrayStrategy;
use crate::value::{Object, Value};

/// Resolves `options` into the configuration a merge runs with.
///
/// Option structures are merged into a sealed record of the defaults, so a
/// misspelt option name fails exactly like a write to any closed target and
/// carries the same suggestion.
///
/// # Errors
///
/// - [`MergeError::UnknownConfigurationOption`] for names outside the record.
/// - [`MergeError::InvalidArrayStrategy`] when `arrayStrategy` is neither
///   `"REPLACE"` nor `"PUSH"`.
/// - [`MergeError::InvalidOptionValue`] when `errorMessage` is given as a
///   value instead of through [`Options::error_message`].
///
/// # Examples
/// ```rust
/// use helpful_merge::{MergeError, Options, resolve};
///
/// let err = resolve(Options::new().set("deeep", true)).unwrap_err();
/// assert_eq!(err.suggestion(), Some("deep"));
/// assert!(matches!(err, MergeError::UnknownConfigurationOption { .. }));
/// ```
pub fn resolve(options: impl Into<MergeOptions>) -> MergeResult<Config> {
    match options.into() {
        MergeOptions::Absent => Ok(Config::default()),
        MergeOptions::Deep => Ok(Config::deep()),
        MergeOptions::Resolved(config) => Ok(config),
        MergeOptions::Fields(options) => resolve_fields(&options),
    }
}

fn resolve_fields(options: &Options) -> MergeResult<Config> {
    let defaults = Config::default();
    let record = default_record();
    merge_with(&record, &options.to_value(), &defaults).map_err(unknown_option)?;

    let flag = |name: &str| record.attribute(name).is_some_and(|value| value.is_truthy());
    let array_strategy = record
        .attribute(ARRAY_STRATEGY)
        .map_or(Ok(ArrayStrategy::Replace), |value| {
            ArrayStrategy::try_from(&value)
        })?;
    if record.attribute(ERROR_MESSAGE).is_some_and(|value| !value.is_null()) {
        return Err(MergeError::InvalidOptionValue {
            option: ERROR_MESSAGE.to_owned(),
            expected: "a formatter supplied through Options::error_message",
        });
    }

    Ok(Config {
        deep: flag(DEEP),
        use_reference_if_target_unset: flag(USE_REFERENCE_IF_TARGET_UNSET),
        use_reference_if_array: flag(USE_REFERENCE_IF_ARRAY),
        include_read_only: flag(INCLUDE_READ_ONLY),
        include_non_enumerable: flag(INCLUDE_NON_ENUMERABLE),
        array_strategy,
        preserve_type_if_target_unset: flag(PRESERVE_TYPE_IF_TARGET_UNSET),
        error_message: options
            .formatter()
            .cloned()
            .unwrap_or(defaults.error_message),
        type_registry: options.registry().cloned().unwrap_or_default(),
    })
}

/// The closed record option structures are merged into.
fn default_record() -> Value {
    let defaults = Config::default();
    Value::object(
        Object::new()
            .with(DEEP, defaults.deep)
            .with(
                USE_REFERENCE_IF_TARGET_UNSET,
                defaults.use_reference_if_target_unset,
            )
            .with(USE_REFERENCE_IF_ARRAY, defaults.use_reference_if_array)
            .with(INCLUDE_READ_ONLY, defaults.include_read_only)
            .with(INCLUDE_NON_ENUMERABLE, defaults.include_non_enumerable)
            .with(ARRAY_STRATEGY, defaults.array_strategy)
            .with(
                PRESERVE_TYPE_IF_TARGET_UNSET,
                defaults.preserve_type_if_target_unset,
            )
            .with(ERROR_MESSAGE, Value::Null),
    )
    .sealed()
}

fn unknown_option(err: MergeError) -> MergeError {
    match err {
        MergeError::AttributeWrite {
            key,
            suggestion,
            message,
        } => MergeError::UnknownConfigurationOption {
            option: key,
            suggestion,
            message,
        },
        other => other,
    }
}
