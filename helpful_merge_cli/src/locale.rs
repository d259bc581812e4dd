//! Locale selection and Fluent resource loading for `helpful-merge`.

use std::io::Read;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use helpful_merge::{CatalogueError, FluentLocalizer, LanguageIdentifier};

use crate::error::CliError;
use crate::fs_helpers::open_optional_dir;

/// Parses a `--locale` tag.
pub fn parse_locale(value: &str) -> Result<LanguageIdentifier, CliError> {
    LanguageIdentifier::from_str(value).map_err(|err| CliError::InvalidLocale {
        value: value.to_owned(),
        message: err.to_string(),
    })
}

/// Builds a `FluentLocalizer` from the embedded catalogue and consumer
/// resources, later resources taking precedence over earlier ones.
///
/// Locales without embedded catalogues use the consumer resources alone when
/// there are any, and otherwise fall back to the `en-US` catalogue.
pub fn build_localizer(
    locale: &LanguageIdentifier,
    resources: Vec<String>,
) -> Result<FluentLocalizer, CliError> {
    let base = match FluentLocalizer::embedded(locale.clone()) {
        Ok(localizer) => localizer,
        Err(CatalogueError::UnsupportedLocale { .. }) if !resources.is_empty() => {
            FluentLocalizer::bare(locale.clone())
        }
        Err(CatalogueError::UnsupportedLocale { .. }) => {
            tracing::warn!(%locale, "no embedded catalogue for locale; using en-US");
            FluentLocalizer::en_us().map_err(|err| localizer_error(locale, &err))?
        }
        Err(err) => return Err(localizer_error(locale, &err)),
    };
    let localizer = resources
        .into_iter()
        .try_fold(base, |localizer, source| localizer.with_overrides(source))
        .map_err(|err| localizer_error(locale, &err))?;

    let missing = localizer.missing();
    if !missing.is_empty() {
        tracing::warn!(%locale, ?missing, "messages without a translation render in English");
    }
    tracing::debug!(%locale, catalogue = ?localizer.catalogue(), "localizer ready");
    Ok(localizer)
}

/// Loads every `.ftl` file in `dir`, in file-name order.
///
/// A missing directory yields no resources.
pub fn load_consumer_resources(dir_path: &Utf8Path) -> Result<Vec<String>, CliError> {
    let Some(dir) = open_optional_dir(dir_path)? else {
        tracing::debug!(path = %dir_path, "message directory missing; using embedded catalogues");
        return Ok(Vec::new());
    };

    let mut files = Vec::new();
    for entry_result in dir.read_dir(".").map_err(CliError::io(dir_path))? {
        let entry = entry_result.map_err(CliError::io(dir_path))?;
        let file_name = entry.file_name().map_err(CliError::io(dir_path))?;
        if !Utf8Path::new(&file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ftl"))
        {
            continue;
        }
        files.push(Utf8PathBuf::from(file_name));
    }

    files.sort();
    let mut resources = Vec::with_capacity(files.len());
    for file in files {
        let path = dir_path.join(&file);
        let mut handle = dir.open(&file).map_err(CliError::io(&path))?;
        let mut buffer = String::new();
        handle
            .read_to_string(&mut buffer)
            .map_err(CliError::io(&path))?;
        resources.push(buffer);
    }

    Ok(resources)
}

fn localizer_error(locale: &LanguageIdentifier, err: &CatalogueError) -> CliError {
    CliError::Localizer {
        locale: locale.to_string(),
        message: err.to_string(),
    }
}
