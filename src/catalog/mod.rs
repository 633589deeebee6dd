//! Translation catalog: message key -> locale -> template.
//!
//! A catalog is immutable once built. Every (key, locale) pair for a key
//! that the default locale defines is explicit: either a translation of
//! its own or [`Variant::Inherited`], meaning lookups fall back to the
//! default locale's template.

mod loader;
mod params;
mod template;

use std::collections::{BTreeMap, BTreeSet};

pub use loader::{
    LoadResult, LoadWarning, LoadWarningKind, extract_locale, load_catalog, load_combined,
    load_dir,
};
pub use params::{ParamValue, Params, parse_param_pair};
pub use template::{Segment, Template};

/// Position of a template in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageLocation {
    pub file_path: String,
    /// 1-based.
    pub line: usize,
    /// 1-based.
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A template for one locale, with the place it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub template: Template,
    pub location: Option<MessageLocation>,
}

/// How a locale provides a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Translated(Translation),
    /// No translation of its own; inherits the default locale's template.
    Inherited,
}

impl Variant {
    pub fn translation(&self) -> Option<&Translation> {
        match self {
            Variant::Translated(t) => Some(t),
            Variant::Inherited => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    key: String,
    variants: BTreeMap<String, Variant>,
}

impl MessageEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn variant(&self, locale: &str) -> Option<&Variant> {
        self.variants.get(locale)
    }

    pub fn translation(&self, locale: &str) -> Option<&Translation> {
        self.variants.get(locale).and_then(Variant::translation)
    }

    pub fn variants(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.variants.iter().map(|(l, v)| (l.as_str(), v))
    }

    /// Locales that carry their own translation, sorted.
    pub fn translated_locales(&self) -> Vec<&str> {
        self.variants
            .iter()
            .filter(|(_, v)| matches!(v, Variant::Translated(_)))
            .map(|(l, _)| l.as_str())
            .collect()
    }

    /// Locales that inherit the default locale's template, sorted.
    pub fn inherited_locales(&self) -> Vec<&str> {
        self.variants
            .iter()
            .filter(|(_, v)| matches!(v, Variant::Inherited))
            .map(|(l, _)| l.as_str())
            .collect()
    }
}

/// Outcome of resolving a key for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub template: &'a Template,
    /// The locale whose template was used.
    pub locale: &'a str,
    /// True when the requested locale had no translation and the default was used.
    pub fell_back: bool,
}

/// Per-locale counts for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleStats {
    pub translated: usize,
    pub inherited: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    default_locale: String,
    locales: BTreeSet<String>,
    entries: BTreeMap<String, MessageEntry>,
}

impl Catalog {
    pub fn builder(default_locale: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(default_locale)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// All locales, sorted. Always contains the default locale.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains(locale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entry(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.values()
    }

    /// Find the template for `key` in `locale`, falling back to the default locale.
    ///
    /// `locale` must already be canonical (see [`crate::locale::LocaleSet`]);
    /// an unknown locale simply has no variants and falls back.
    pub fn resolve(&self, key: &str, locale: &str) -> Option<Resolved<'_>> {
        let entry = self.entries.get(key)?;

        if let Some((own_locale, Variant::Translated(t))) = entry.variants.get_key_value(locale) {
            return Some(Resolved {
                template: &t.template,
                locale: own_locale,
                fell_back: false,
            });
        }

        let (default_locale, variant) = entry.variants.get_key_value(&self.default_locale)?;
        let translation = variant.translation()?;
        Some(Resolved {
            template: &translation.template,
            locale: default_locale,
            fell_back: locale != self.default_locale,
        })
    }

    pub fn locale_stats(&self, locale: &str) -> LocaleStats {
        let mut stats = LocaleStats::default();
        for entry in self.entries.values() {
            match entry.variants.get(locale) {
                Some(Variant::Translated(_)) => stats.translated += 1,
                Some(Variant::Inherited) => stats.inherited += 1,
                None => {}
            }
        }
        stats
    }
}

/// Collects translations per locale, then fixes up inheritance on `build`.
#[derive(Debug)]
pub struct CatalogBuilder {
    default_locale: String,
    locales: BTreeSet<String>,
    entries: BTreeMap<String, BTreeMap<String, Translation>>,
}

impl CatalogBuilder {
    pub fn new(default_locale: impl Into<String>) -> Self {
        let default_locale = default_locale.into();
        let mut locales = BTreeSet::new();
        locales.insert(default_locale.clone());
        Self {
            default_locale,
            locales,
            entries: BTreeMap::new(),
        }
    }

    /// Register a locale even if it ends up with no translations.
    pub fn add_locale(&mut self, locale: impl Into<String>) -> &mut Self {
        self.locales.insert(locale.into());
        self
    }

    /// Add a translation. Returns true if it replaced an earlier one.
    pub fn insert(
        &mut self,
        locale: &str,
        key: &str,
        template: impl Into<Template>,
        location: Option<MessageLocation>,
    ) -> bool {
        self.locales.insert(locale.to_string());
        self.entries
            .entry(key.to_string())
            .or_default()
            .insert(
                locale.to_string(),
                Translation {
                    template: template.into(),
                    location,
                },
            )
            .is_some()
    }

    /// Builder-style insert without a source location, mostly for tests.
    pub fn message(mut self, locale: &str, key: &str, template: &str) -> Self {
        self.insert(locale, key, template, None);
        self
    }

    pub fn build(self) -> Catalog {
        let CatalogBuilder {
            default_locale,
            locales,
            entries,
        } = self;

        let entries = entries
            .into_iter()
            .map(|(key, translations)| {
                let has_default = translations.contains_key(&default_locale);
                let mut variants: BTreeMap<String, Variant> = translations
                    .into_iter()
                    .map(|(locale, t)| (locale, Variant::Translated(t)))
                    .collect();

                if has_default {
                    for locale in &locales {
                        variants
                            .entry(locale.clone())
                            .or_insert(Variant::Inherited);
                    }
                }

                (key.clone(), MessageEntry { key, variants })
            })
            .collect();

        Catalog {
            default_locale,
            locales,
            entries,
        }
    }
}
