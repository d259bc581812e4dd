//! Error types for `helpful-merge`.

use camino::Utf8PathBuf;
use helpful_merge::MergeError;
use thiserror::Error;

/// Errors surfaced by the `helpful-merge` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A document on disk was not valid JSON.
    #[error("failed to parse JSON at {path}: {source}")]
    Json {
        /// Document being parsed.
        path: Utf8PathBuf,
        /// Parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// The merged result could not be rendered.
    #[error("failed to render merged JSON: {0}")]
    Render(#[source] serde_json::Error),

    /// The `--locale` value is not a language tag.
    #[error("failed to parse locale '{value}': {message}")]
    InvalidLocale {
        /// Tag supplied on the command line.
        value: String,
        /// Parser explanation.
        message: String,
    },

    /// The message catalogue for the locale could not be assembled.
    #[error("failed to build localizer for {locale}: {message}")]
    Localizer {
        /// Locale being built.
        locale: String,
        /// Underlying failure.
        message: String,
    },

    /// The merge itself failed; `message` is already localised.
    #[error("{message}")]
    Merge {
        /// Localised rendering of `source`.
        message: String,
        /// Library error.
        #[source]
        source: MergeError,
    },
}

impl CliError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
