//! Catalog check rules.
//!
//! Each rule is a pure function over a [`Catalog`] returning its own issue
//! type. [`run_checks`] runs a selection of them and drops ignored keys.
//!
//! - `orphan`: keys missing from the default locale
//! - `missing_variant`: keys some locales inherit from the default
//! - `untranslated`: values identical to the default locale
//! - `placeholders`: placeholder sets that differ from the default
//! - `plural`: placeholders glued to words (`photo{s}`)

pub mod missing_variant;
pub mod orphan;
pub mod placeholders;
pub mod plural;
pub mod untranslated;

use clap::ValueEnum;
use glob::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, Translation},
    issues::{Issue, MessageContext},
    utils::matches_any,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum CheckRule {
    Orphan,
    MissingVariant,
    Untranslated,
    Placeholders,
    Plural,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Orphan,
            CheckRule::MissingVariant,
            CheckRule::Untranslated,
            CheckRule::Placeholders,
            CheckRule::Plural,
        ]
    }
}

/// Run `rules` (all of them when empty) and drop issues for keys matching
/// `ignore_keys`.
pub fn run_checks(catalog: &Catalog, rules: &[CheckRule], ignore_keys: &[Pattern]) -> Vec<Issue> {
    let rules = if rules.is_empty() {
        CheckRule::all()
    } else {
        rules.to_vec()
    };

    let mut issues: Vec<Issue> = Vec::new();
    for rule in rules {
        match rule {
            CheckRule::Orphan => {
                let found = orphan::check_orphan_keys(catalog);
                issues.extend(found.into_iter().map(Issue::OrphanKey));
            }
            CheckRule::MissingVariant => {
                let found = missing_variant::check_missing_variants(catalog);
                issues.extend(found.into_iter().map(Issue::MissingVariant));
            }
            CheckRule::Untranslated => {
                let found = untranslated::check_untranslated(catalog);
                issues.extend(found.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Placeholders => {
                let found = placeholders::check_placeholder_mismatches(catalog);
                issues.extend(found.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Plural => {
                let found = plural::check_naive_plurals(catalog);
                issues.extend(found.into_iter().map(Issue::NaivePlural));
            }
        }
    }

    issues.retain(|issue| !issue.key().is_some_and(|key| matches_any(key, ignore_keys)));
    issues
}

fn message_context(key: &str, translation: &Translation) -> MessageContext {
    MessageContext::new(
        translation.location.clone(),
        key,
        translation.template.as_str(),
    )
}
