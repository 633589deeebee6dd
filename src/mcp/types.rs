use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::ParamValue,
    config::Config,
    issues::{Issue, Report},
    rules::CheckRule,
};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Message key, e.g. "welcome_back"
    pub key: String,
    /// Requested locale; the default locale when omitted
    pub locale: Option<String>,
    /// Placeholder values by name
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckCatalogParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Rules to run; all rules when omitted
    pub checks: Option<Vec<CheckRule>>,
    /// Maximum items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub messages_root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<String>,
    pub default_locale: String,
    pub aliases: BTreeMap<String, String>,
    pub locale_names: BTreeMap<String, String>,
    /// Effective policy ("strict" or "passthrough")
    pub missing_key: String,
    pub ignore_keys: Vec<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        let missing_key = c.missing_key_policy().to_string();
        Self {
            messages_root: c.messages_root,
            catalog_file: c.catalog_file,
            default_locale: c.default_locale,
            aliases: c.aliases,
            locale_names: c.locale_names,
            missing_key,
            ignore_keys: c.ignore_keys,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub catalog_path: String,
    pub default_locale: String,
    pub key_count: usize,
    pub locales: Vec<LocaleInfo>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_default: bool,
    pub translated: usize,
    pub inherited: usize,
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub key: String,
    /// Locale the caller asked for (or the default)
    pub requested_locale: String,
    pub output: String,
}

// ============================================================
// Check Types (check_catalog)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckCatalogResult {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub items: Vec<CheckItem>,
    pub pagination: Pagination,
}

/// A single check finding
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    pub rule: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl From<&Issue> for CheckItem {
    fn from(issue: &Issue) -> Self {
        let location = issue.location();
        let parts = location.parts();
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            key: issue.key().map(String::from),
            message: issue.message(),
            details: issue.details(),
            file_path: parts.map(|(path, _, _)| path.to_string()),
            line: parts.map(|(_, line, _)| line).filter(|line| *line > 0),
        }
    }
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
