//! Untranslated value detection rule.
//!
//! Detects translations identical to the default locale, which may mean the
//! text was copied but never translated. Values without literal letters
//! (`"{count}"`, `"20+"`) are skipped.

use super::message_context;
use crate::{catalog::Catalog, issues::UntranslatedIssue, utils::has_literal_text};

pub fn check_untranslated(catalog: &Catalog) -> Vec<UntranslatedIssue> {
    let default_locale = catalog.default_locale();

    catalog
        .entries()
        .filter_map(|entry| {
            let default = entry.translation(default_locale)?;
            if !has_literal_text(&default.template) {
                return None;
            }

            let identical_in: Vec<String> = entry
                .variants()
                .filter(|(locale, _)| *locale != default_locale)
                .filter_map(|(locale, variant)| {
                    let t = variant.translation()?;
                    (t.template == default.template).then(|| locale.to_string())
                })
                .collect();
            if identical_in.is_empty() {
                return None;
            }

            Some(UntranslatedIssue {
                context: message_context(entry.key(), default),
                default_locale: default_locale.to_string(),
                identical_in,
            })
        })
        .collect()
}
