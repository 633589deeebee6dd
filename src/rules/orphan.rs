//! Orphan translation key detection rule.
//!
//! Detects keys that exist in non-default locales but are missing from the
//! default locale. Lookups for these keys fail everywhere except in the
//! locales that define them.

use super::message_context;
use crate::{catalog::Catalog, issues::OrphanKeyIssue};

pub fn check_orphan_keys(catalog: &Catalog) -> Vec<OrphanKeyIssue> {
    let default_locale = catalog.default_locale();

    catalog
        .entries()
        .filter(|entry| entry.translation(default_locale).is_none())
        .flat_map(|entry| {
            entry.variants().filter_map(move |(locale, variant)| {
                let translation = variant.translation()?;
                Some(OrphanKeyIssue {
                    context: message_context(entry.key(), translation),
                    locale: locale.to_string(),
                })
            })
        })
        .collect()
}
