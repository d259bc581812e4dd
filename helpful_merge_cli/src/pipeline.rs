//! Loads the documents named on the command line and merges them.

use std::sync::Arc;

use helpful_merge::{
    FluentLocalizer, Localizer, MergeBuilder, MergeOptions, Options, Value, localized_formatter,
};

use crate::cli::{Args, MergeArgs};
use crate::error::CliError;
use crate::fs_helpers::read_json;
use crate::locale;

/// Builds the localizer selected by `--locale` and `--messages`.
pub fn localizer(args: &Args) -> Result<FluentLocalizer, CliError> {
    let locale = locale::parse_locale(&args.locale)?;
    let resources = match &args.messages {
        Some(dir) => locale::load_consumer_resources(dir)?,
        None => Vec::new(),
    };
    locale::build_localizer(&locale, resources)
}

/// Reads `--options` and layers the individual flags over it.
///
/// A document holding `true` is the deep shorthand; other non-container
/// documents contribute nothing.
pub fn build_options(args: &MergeArgs) -> Result<Options, CliError> {
    let mut options = match &args.options {
        Some(path) => match MergeOptions::from(read_json(path)?) {
            MergeOptions::Fields(fields) => fields,
            MergeOptions::Deep => Options::new().deep(true),
            _ => Options::new(),
        },
        None => Options::new(),
    };
    if args.is_deep {
        options = options.deep(true);
    }
    if let Some(strategy) = args.array_strategy {
        options = options.array_strategy(strategy.into());
    }
    if args.should_use_reference_if_array {
        options = options.use_reference_if_array(true);
    }
    if args.should_use_reference_if_target_unset {
        options = options.use_reference_if_target_unset(true);
    }
    Ok(options)
}

/// Merges every source into the target and returns the result.
///
/// Merge failures are rendered through `localizer`, which also formats the
/// unknown-attribute diagnostics raised by a sealed target.
pub fn run(args: &Args, localizer: Arc<dyn Localizer>) -> Result<Value, CliError> {
    let options =
        build_options(&args.merge)?.error_formatter(localized_formatter(Arc::clone(&localizer)));

    let target = match &args.target {
        Some(path) => read_json(path)?,
        None => Value::empty_object(),
    };
    let target = if args.should_seal_target {
        target.sealed()
    } else {
        target
    };
    let sources = args
        .sources
        .iter()
        .map(|path| read_json(path))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(sources = sources.len(), "merging documents");
    MergeBuilder::new()
        .to(target)
        .from(sources)
        .with(options)
        .exec()
        .map_err(|source| CliError::Merge {
            message: source.localized(localizer.as_ref()),
            source,
        })
}
