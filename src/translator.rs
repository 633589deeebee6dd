//! Generic message lookup: `translate(key, locale, params)`.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    catalog::{Catalog, Params},
    error::TranslateError,
    locale::{LocaleResolver, LocaleSet},
    telemetry::{MessageEvent, MessageTracker, NoopTracker},
};

/// What to do when neither the requested nor the default locale has a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyPolicy {
    /// Fail with [`TranslateError::UnknownKey`].
    Strict,
    /// Return the key itself so the gap is visible but nothing breaks.
    Passthrough,
}

impl MissingKeyPolicy {
    /// `Strict` in debug builds, `Passthrough` in release builds.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            MissingKeyPolicy::Strict
        } else {
            MissingKeyPolicy::Passthrough
        }
    }
}

impl Default for MissingKeyPolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

impl fmt::Display for MissingKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingKeyPolicy::Strict => write!(f, "strict"),
            MissingKeyPolicy::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Resolves messages from an immutable catalog.
///
/// Cheap to share: wrap in `Arc` and call from any thread.
pub struct Translator {
    catalog: Catalog,
    locales: LocaleSet,
    policy: MissingKeyPolicy,
    tracker: Arc<dyn MessageTracker>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locales", &self.locales)
            .field("policy", &self.policy)
            .field("keys", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        let locales = LocaleSet::new(catalog.default_locale(), catalog.locales());
        Self {
            catalog,
            locales,
            policy: MissingKeyPolicy::default(),
            tracker: Arc::new(NoopTracker),
        }
    }

    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.locales = self.locales.with_aliases(aliases);
        self
    }

    pub fn with_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_tracker(mut self, tracker: Arc<dyn MessageTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// Render `key` for `locale`.
    ///
    /// Unsupported locales and locales without a translation use the
    /// default locale's template. Placeholders without a parameter are left
    /// as `{name}`. Unknown keys follow the [`MissingKeyPolicy`].
    pub fn translate(
        &self,
        key: &str,
        locale: &str,
        params: &Params,
    ) -> Result<String, TranslateError> {
        let canonical = self.locales.canonicalize(locale);
        let effective = canonical.unwrap_or(self.locales.default_locale());

        let Some(resolved) = self.catalog.resolve(key, effective) else {
            return match self.policy {
                MissingKeyPolicy::Strict => Err(TranslateError::UnknownKey {
                    key: key.to_string(),
                }),
                MissingKeyPolicy::Passthrough => {
                    warn!(key, locale, "unknown message key, returning the key");
                    Ok(key.to_string())
                }
            };
        };

        let fell_back = resolved.fell_back || canonical.is_none();
        if fell_back {
            debug!(
                key,
                requested = locale,
                resolved = resolved.locale,
                "no translation for locale, using default"
            );
        }
        trace!(
            target: "locat::message",
            key,
            requested = locale,
            resolved = resolved.locale,
            "resolved message"
        );
        self.tracker.track(&MessageEvent {
            key,
            requested_locale: locale,
            resolved_locale: resolved.locale,
            fell_back,
        });

        Ok(resolved.template.render(params))
    }

    /// Bind this translator to an ambient locale source.
    pub fn localizer<R: LocaleResolver>(&self, resolver: R) -> Localizer<'_, R> {
        Localizer {
            translator: self,
            resolver,
        }
    }
}

/// Per-call options for [`Localizer::message`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageOptions<'a> {
    /// Explicit locale, overriding the resolver.
    pub locale: Option<&'a str>,
}

/// A translator plus the application's locale resolver.
pub struct Localizer<'t, R> {
    translator: &'t Translator,
    resolver: R,
}

impl<R: LocaleResolver> Localizer<'_, R> {
    /// Render `key` for `options.locale`, or the resolver's locale when no
    /// override is given or the override is not a supported locale.
    pub fn message(
        &self,
        key: &str,
        params: &Params,
        options: MessageOptions<'_>,
    ) -> Result<String, TranslateError> {
        if let Some(locale) = options.locale
            && self.translator.locales.canonicalize(locale).is_some()
        {
            return self.translator.translate(key, locale, params);
        }
        let ambient = self.resolver.locale();
        self.translator.translate(key, &ambient, params)
    }

    /// Shorthand for `message` without options.
    pub fn t(&self, key: &str, params: &Params) -> Result<String, TranslateError> {
        self.message(key, params, MessageOptions::default())
    }

    /// The supported locale the resolver currently maps to.
    pub fn current_locale(&self) -> String {
        let ambient = self.resolver.locale();
        self.translator
            .locales
            .canonicalize(&ambient)
            .unwrap_or(self.translator.locales.default_locale())
            .to_string()
    }
}
