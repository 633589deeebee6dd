use crate::{import::ImportSummary, issues::Issue};

#[derive(Debug)]
pub struct CheckSummary {
    pub locale_count: usize,
    pub key_count: usize,
    pub file_count: usize,
    pub default_locale: String,
}

#[derive(Debug)]
pub struct TranslateSummary {
    /// Rendered message, or `None` when the key is unknown under the strict policy.
    pub output: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct LocaleRow {
    pub locale: String,
    pub name: Option<String>,
    pub is_default: bool,
    pub translated: usize,
    pub inherited: usize,
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub rows: Vec<LocaleRow>,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct DetectSummary {
    pub locale: String,
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Translate(TranslateSummary),
    Locales(LocalesSummary),
    Detect(DetectSummary),
    Import(ImportSummary),
    Init(InitSummary),
}

/// Result of running locat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Issues found during the check; empty for other commands.
    pub issues: Vec<Issue>,
    /// Catalog files that failed to load.
    pub parse_error_count: usize,
}
