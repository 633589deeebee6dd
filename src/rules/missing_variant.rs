//! Keys that some locales do not translate.
//!
//! Not an error: those locales fall back to the default template at
//! runtime. Reported once per key, pointing at the default locale's entry.

use super::message_context;
use crate::{catalog::Catalog, issues::MissingVariantIssue};

pub fn check_missing_variants(catalog: &Catalog) -> Vec<MissingVariantIssue> {
    let default_locale = catalog.default_locale();

    catalog
        .entries()
        .filter_map(|entry| {
            let translation = entry.translation(default_locale)?;
            let missing_in: Vec<String> = entry
                .inherited_locales()
                .into_iter()
                .map(String::from)
                .collect();
            if missing_in.is_empty() {
                return None;
            }
            Some(MissingVariantIssue {
                context: message_context(entry.key(), translation),
                default_locale: default_locale.to_string(),
                missing_in,
            })
        })
        .collect()
}
