//! Naive plural detection rule.
//!
//! Flags placeholders glued to a preceding letter, like `photo{s}`: a
//! hand-rolled plural suffix that only works for some languages and counts.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use super::message_context;
use crate::{catalog::Catalog, issues::NaivePluralIssue};

static GLUED_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}\{(\w+)\}").unwrap());

pub fn check_naive_plurals(catalog: &Catalog) -> Vec<NaivePluralIssue> {
    let mut issues = Vec::new();

    for entry in catalog.entries() {
        for (locale, variant) in entry.variants() {
            let Some(translation) = variant.translation() else {
                continue;
            };

            let glued: BTreeSet<&str> = GLUED_PLACEHOLDER_REGEX
                .captures_iter(translation.template.as_str())
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .collect();

            issues.extend(glued.into_iter().map(|placeholder| NaivePluralIssue {
                context: message_context(entry.key(), translation),
                locale: locale.to_string(),
                placeholder: placeholder.to_string(),
            }));
        }
    }

    issues
}
