//! Fluent-backed catalogues for merge diagnostics.

use std::fmt;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentError, FluentResource};
use fluent_syntax::ast::Entry;
use fluent_syntax::parser::ParserError;
use thiserror::Error;
use tracing::warn;
use unic_langid::{LanguageIdentifier, langid};

use super::{Localizer, MessageArgs, MessageId};
use crate::suggest::best_match;

/// A message catalogue compiled into the crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Catalogue {
    /// American English; the text of every `Display` implementation.
    EnUs,
    /// Japanese.
    Ja,
}

impl Catalogue {
    /// Every embedded catalogue.
    pub const ALL: [Self; 2] = [Self::EnUs, Self::Ja];

    /// The catalogue serving `locale`, matched on its language subtag.
    #[must_use]
    pub fn for_locale(locale: &LanguageIdentifier) -> Option<Self> {
        match locale.language.as_str() {
            "en" => Some(Self::EnUs),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }

    /// The Fluent source text.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::EnUs => include_str!("../../locales/en-US/messages.ftl"),
            Self::Ja => include_str!("../../locales/ja/messages.ftl"),
        }
    }

    /// The locale the catalogue was written for.
    #[must_use]
    pub fn locale(self) -> LanguageIdentifier {
        match self {
            Self::EnUs => langid!("en-US"),
            Self::Ja => langid!("ja"),
        }
    }
}

/// Errors raised while assembling a [`FluentLocalizer`].
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// No embedded catalogue serves the locale.
    #[error("no embedded message catalogue for locale {locale}")]
    UnsupportedLocale {
        /// The requested locale.
        locale: LanguageIdentifier,
    },
    /// The Fluent source did not parse.
    #[error("invalid Fluent syntax in {locale} catalogue: {errors:?}")]
    Parse {
        /// Locale of the localizer receiving the catalogue.
        locale: LanguageIdentifier,
        /// Parser diagnostics.
        errors: Vec<ParserError>,
    },
    /// The catalogue defines a message twice.
    #[error("conflicting messages in {locale} catalogue: {errors:?}")]
    Registration {
        /// Locale of the localizer receiving the catalogue.
        locale: LanguageIdentifier,
        /// Bundle diagnostics.
        errors: Vec<FluentError>,
    },
    /// An override defines a message no diagnostic uses.
    #[error("unknown message \"{id}\"{hint}", hint = did_you_mean(.suggestion.as_deref()))]
    UnknownMessage {
        /// The message name as written.
        id: String,
        /// Closest known message name.
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |candidate| format!("; did you mean \"{candidate}\"?"))
}

#[derive(Clone, Copy, Debug)]
enum Origin {
    Embedded(Catalogue),
    Override,
}

struct Layer {
    origin: Origin,
    bundle: FluentBundle<FluentResource>,
}

impl Layer {
    fn defines(&self, id: MessageId) -> bool {
        self.bundle.has_message(id.as_str())
    }

    fn render(&self, id: MessageId, args: &FluentArgs<'_>) -> Option<String> {
        let pattern = self.bundle.get_message(id.as_str())?.value()?;
        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, Some(args), &mut errors);
        if errors.is_empty() {
            return Some(text.into_owned());
        }
        warn!(%id, origin = ?self.origin, ?errors, "failed to format diagnostic");
        None
    }
}

/// A [`Localizer`] backed by layered Fluent catalogues.
///
/// Overrides added with [`FluentLocalizer::with_overrides`] are searched
/// before earlier ones, and all of them before the embedded catalogue. A
/// message that fails to format in one layer is retried in the next.
///
/// # Examples
/// ```rust
/// use helpful_merge::{FluentLocalizer, Localizer, MessageArgs, MessageId, langid};
///
/// let localizer = FluentLocalizer::embedded(langid!("en-GB"))?
///     .with_overrides("merge-unknown-property = No such key: { $offender }")?;
/// let args = MessageArgs::new().with("offender", "colour");
/// let text = localizer
///     .lookup(MessageId::UnknownProperty, &args)
///     .unwrap_or_default()
///     .replace(['\u{2068}', '\u{2069}'], "");
/// assert_eq!(text, "No such key: colour");
/// # Ok::<(), helpful_merge::CatalogueError>(())
/// ```
pub struct FluentLocalizer {
    locale: LanguageIdentifier,
    layers: Vec<Layer>,
}

impl FluentLocalizer {
    /// Uses the embedded catalogue for `locale`'s language.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::UnsupportedLocale`] when no catalogue serves
    /// the language, or a parse or registration error if the embedded text
    /// is malformed.
    pub fn embedded(locale: LanguageIdentifier) -> Result<Self, CatalogueError> {
        let Some(catalogue) = Catalogue::for_locale(&locale) else {
            return Err(CatalogueError::UnsupportedLocale { locale });
        };
        let resource = parse(&locale, catalogue.source().to_owned())?;
        let bundle = bundle(&locale, resource)?;
        Ok(Self {
            locale,
            layers: vec![Layer {
                origin: Origin::Embedded(catalogue),
                bundle,
            }],
        })
    }

    /// The embedded American English catalogue.
    ///
    /// # Errors
    ///
    /// Returns a parse or registration error if the embedded text is
    /// malformed.
    pub fn en_us() -> Result<Self, CatalogueError> {
        Self::embedded(Catalogue::EnUs.locale())
    }

    /// A localizer for `locale` with no catalogues, ready for
    /// [`FluentLocalizer::with_overrides`].
    #[must_use]
    pub const fn bare(locale: LanguageIdentifier) -> Self {
        Self {
            locale,
            layers: Vec::new(),
        }
    }

    /// Adds a catalogue searched before every existing one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] for invalid Fluent syntax,
    /// [`CatalogueError::UnknownMessage`] when a message name matches no
    /// [`MessageId`], and [`CatalogueError::Registration`] when the source
    /// defines a message twice.
    pub fn with_overrides(mut self, source: impl Into<String>) -> Result<Self, CatalogueError> {
        let resource = parse(&self.locale, source.into())?;
        check_names(&resource)?;
        let bundle = bundle(&self.locale, resource)?;
        self.layers.insert(
            0,
            Layer {
                origin: Origin::Override,
                bundle,
            },
        );
        Ok(self)
    }

    /// The locale messages are formatted for.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// The embedded catalogue beneath the overrides, if any.
    #[must_use]
    pub fn catalogue(&self) -> Option<Catalogue> {
        self.layers.iter().find_map(|layer| match layer.origin {
            Origin::Embedded(catalogue) => Some(catalogue),
            Origin::Override => None,
        })
    }

    /// Ids no layer defines; these render as the English fallback.
    #[must_use]
    pub fn missing(&self) -> Vec<MessageId> {
        MessageId::ALL
            .into_iter()
            .filter(|id| !self.layers.iter().any(|layer| layer.defines(*id)))
            .collect()
    }
}

impl Localizer for FluentLocalizer {
    fn lookup(&self, id: MessageId, args: &MessageArgs<'_>) -> Option<String> {
        let mut fluent_args = FluentArgs::with_capacity(args.len());
        for (name, value) in args.iter() {
            fluent_args.set(name, value);
        }
        self.layers
            .iter()
            .find_map(|layer| layer.render(id, &fluent_args))
    }
}

impl fmt::Debug for FluentLocalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origins: Vec<Origin> = self.layers.iter().map(|layer| layer.origin).collect();
        f.debug_struct("FluentLocalizer")
            .field("locale", &self.locale)
            .field("layers", &origins)
            .finish()
    }
}

fn parse(locale: &LanguageIdentifier, source: String) -> Result<FluentResource, CatalogueError> {
    FluentResource::try_new(source).map_err(|(_, errors)| CatalogueError::Parse {
        locale: locale.clone(),
        errors,
    })
}

fn check_names(resource: &FluentResource) -> Result<(), CatalogueError> {
    for entry in resource.entries() {
        let Entry::Message(message) = entry else {
            continue;
        };
        let name = message.id.name;
        if MessageId::from_name(name).is_none() {
            return Err(CatalogueError::UnknownMessage {
                id: name.to_owned(),
                suggestion: best_match(MessageId::ALL.map(MessageId::as_str), name),
            });
        }
    }
    Ok(())
}

fn bundle(
    locale: &LanguageIdentifier,
    resource: FluentResource,
) -> Result<FluentBundle<FluentResource>, CatalogueError> {
    let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
    bundle
        .add_resource(resource)
        .map_err(|errors| CatalogueError::Registration {
            locale: locale.clone(),
            errors,
        })?;
    Ok(bundle)
}
