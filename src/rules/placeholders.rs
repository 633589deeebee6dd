//! Placeholder consistency rule.
//!
//! Every translation must use exactly the placeholders of the default
//! locale's template. A missing one silently drops data from the message;
//! an extra one renders as literal `{name}` because callers never pass it.

use super::message_context;
use crate::{catalog::Catalog, issues::PlaceholderMismatchIssue};

pub fn check_placeholder_mismatches(catalog: &Catalog) -> Vec<PlaceholderMismatchIssue> {
    let default_locale = catalog.default_locale();
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        let Some(default) = entry.translation(default_locale) else {
            continue;
        };
        let expected = default.template.placeholders();

        for (locale, variant) in entry.variants() {
            if locale == default_locale {
                continue;
            }
            let Some(translation) = variant.translation() else {
                continue;
            };
            let found = translation.template.placeholders();
            if found == expected {
                continue;
            }

            issues.push(PlaceholderMismatchIssue {
                context: message_context(entry.key(), translation),
                locale: locale.to_string(),
                missing: expected.difference(&found).map(|s| s.to_string()).collect(),
                unexpected: found.difference(&expected).map(|s| s.to_string()).collect(),
            });
        }
    }

    issues
}
