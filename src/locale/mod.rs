//! Locale handling: canonicalization against the supported set, the
//! resolver seam for the ambient locale, and request-based detection.

mod detect;

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
};

pub use detect::{DetectInput, detect_language, detect_locale};

/// Produces the active locale on demand.
///
/// This is the only contract the translator needs from the application's
/// locale source (cookie, header, session, ...).
pub trait LocaleResolver {
    fn locale(&self) -> Cow<'_, str>;
}

/// A resolver that always returns the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleResolver for FixedLocale {
    fn locale(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl<F> LocaleResolver for F
where
    F: Fn() -> String,
{
    fn locale(&self) -> Cow<'_, str> {
        Cow::Owned(self())
    }
}

/// Supported locales, aliases, and the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    default_locale: String,
    supported: BTreeSet<String>,
    aliases: BTreeMap<String, String>,
}

impl LocaleSet {
    pub fn new<I, S>(default_locale: impl Into<String>, supported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default_locale = default_locale.into();
        let mut supported: BTreeSet<String> = supported.into_iter().map(Into::into).collect();
        supported.insert(default_locale.clone());
        Self {
            default_locale,
            supported,
            aliases: BTreeMap::new(),
        }
    }

    /// Map alternate codes onto supported locales, e.g. `uk -> en`.
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.contains(locale)
    }

    /// Map a requested locale onto a supported one.
    ///
    /// Tries, in order: exact match, alias, case-insensitive match, then the
    /// same steps for the primary subtag (`bg-BG` -> `bg`, `pt_BR` -> `pt`).
    pub fn canonicalize(&self, requested: &str) -> Option<&str> {
        let requested = requested.trim();
        if requested.is_empty() {
            return None;
        }

        if let Some(found) = self.lookup(requested) {
            return Some(found);
        }

        let primary = requested.split(['-', '_']).next().unwrap_or(requested);
        if primary != requested {
            return self.lookup(primary);
        }
        None
    }

    fn lookup(&self, tag: &str) -> Option<&str> {
        if let Some(found) = self.supported.get(tag) {
            return Some(found.as_str());
        }

        let alias = self.aliases.get(tag).or_else(|| {
            self.aliases
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(tag))
                .map(|(_, v)| v)
        });
        if let Some(target) = alias
            && let Some(found) = self.supported.get(target.as_str())
        {
            return Some(found.as_str());
        }

        self.supported
            .iter()
            .find(|s| s.eq_ignore_ascii_case(tag))
            .map(String::as_str)
    }
}
