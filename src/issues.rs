//! Issue types for catalog checks.
//!
//! Each issue carries everything a reporter needs: where it is, what it is
//! about, and the details for the `= note:` line.

use enum_dispatch::enum_dispatch;

use crate::catalog::{LoadWarning, LoadWarningKind, MessageLocation};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    OrphanKey,
    MissingVariant,
    Untranslated,
    PlaceholderMismatch,
    NaivePlural,
    DuplicateKey,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::MissingVariant => write!(f, "missing-variant"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::NaivePlural => write!(f, "naive-plural"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message Context
// ============================================================

/// A catalog entry as seen by one issue: key, template text, and where it
/// was loaded from (absent for catalogs built in memory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: Option<MessageLocation>,
    pub key: String,
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: Option<MessageLocation>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key exists in a non-default locale but not in the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanKeyIssue {
    pub context: MessageContext,
    /// The locale where this orphan key exists.
    pub locale: String,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// Key inherits the default template in some locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariantIssue {
    /// The default locale's entry.
    pub context: MessageContext,
    pub default_locale: String,
    /// Locales without their own translation.
    pub missing_in: Vec<String>,
}

impl MissingVariantIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingVariant
    }
}

/// Value is identical to the default locale (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    pub default_locale: String,
    /// Locales where the value is identical to the default.
    pub identical_in: Vec<String>,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// A translation's placeholders differ from the default locale's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    /// The translation that disagrees.
    pub context: MessageContext,
    pub locale: String,
    /// In the default template but not in this one.
    pub missing: Vec<String>,
    /// In this template but not in the default one.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// A placeholder glued to a word, like `photo{s}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaivePluralIssue {
    pub context: MessageContext,
    pub locale: String,
    pub placeholder: String,
}

impl NaivePluralIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::NaivePlural
    }
}

/// A key defined twice for one locale; the later definition wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyIssue {
    /// The definition that was kept.
    pub context: MessageContext,
    pub locale: String,
}

impl DuplicateKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateKey
    }
}

/// Catalog file could not be loaded, or part of it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    OrphanKey(OrphanKeyIssue),
    MissingVariant(MissingVariantIssue),
    Untranslated(UntranslatedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    NaivePlural(NaivePluralIssue),
    DuplicateKey(DuplicateKeyIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::OrphanKey(_) => OrphanKeyIssue::severity(),
            Issue::MissingVariant(_) => MissingVariantIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::NaivePlural(_) => NaivePluralIssue::severity(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::OrphanKey(_) => OrphanKeyIssue::rule(),
            Issue::MissingVariant(_) => MissingVariantIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::NaivePlural(_) => NaivePluralIssue::rule(),
            Issue::DuplicateKey(_) => DuplicateKeyIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    /// The message key this issue is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Issue::OrphanKey(i) => Some(&i.context.key),
            Issue::MissingVariant(i) => Some(&i.context.key),
            Issue::Untranslated(i) => Some(&i.context.key),
            Issue::PlaceholderMismatch(i) => Some(&i.context.key),
            Issue::NaivePlural(i) => Some(&i.context.key),
            Issue::DuplicateKey(i) => Some(&i.context.key),
            Issue::ParseError(_) => None,
        }
    }
}

impl From<&LoadWarning> for Issue {
    fn from(warning: &LoadWarning) -> Self {
        match &warning.kind {
            LoadWarningKind::DuplicateKey {
                key,
                locale,
                value,
                location,
            } => Issue::DuplicateKey(DuplicateKeyIssue {
                context: MessageContext::new(Some(location.clone()), key, value),
                locale: locale.clone(),
            }),
            LoadWarningKind::Skipped => Issue::ParseError(ParseErrorIssue {
                file_path: warning.file_path.clone(),
                error: warning.message.clone(),
            }),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message with a known file position.
    Message(&'a MessageLocation),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
    /// No position at all.
    Unknown,
}

impl ReportLocation<'_> {
    /// (file, line, col); line and col are 0 when unknown.
    pub fn parts(&self) -> Option<(&str, usize, usize)> {
        match self {
            ReportLocation::Message(loc) => Some((&loc.file_path, loc.line, loc.col)),
            ReportLocation::File { path } => Some((path, 0, 0)),
            ReportLocation::Unknown => None,
        }
    }
}

fn context_location(context: &MessageContext) -> ReportLocation<'_> {
    match &context.location {
        Some(loc) => ReportLocation::Message(loc),
        None => ReportLocation::Unknown,
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls on
/// the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for OrphanKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        context_location(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.context.value))
    }

    fn hint(&self) -> Option<&str> {
        Some("lookups for this key fail in every other locale")
    }
}

impl Report for MissingVariantIssue {
    fn location(&self) -> ReportLocation<'_> {
        context_location(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") falls back to {} in: {}",
            self.context.value,
            self.default_locale,
            self.missing_in.join(", ")
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        context_location(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") identical in: {}",
            self.context.value,
            self.identical_in.join(", ")
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        context_location(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", braced(&self.missing)));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", braced(&self.unexpected)));
        }
        Some(format!("in {}: {}", self.locale, parts.join("; ")))
    }
}

impl Report for NaivePluralIssue {
    fn location(&self) -> ReportLocation<'_> {
        context_location(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in {} (\"{}\") glues {{{}}} to a word",
            self.locale, self.context.value, self.placeholder
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("plural forms are not selected automatically; use one key per form")
    }
}

impl Report for DuplicateKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        context_location(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "defined more than once in {}; using (\"{}\")",
            self.locale, self.context.value
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("keep one definition per key: a flat \"a.b\" key and a nested one collide")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

fn braced(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("{{{}}}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        // Sort by: file_path (unknown last), line, col, rule, message
        match (self.location().parts(), other.location().parts()) {
            (Some((a_path, a_line, a_col)), Some((b_path, b_line, b_col))) => a_path
                .cmp(b_path)
                .then_with(|| a_line.cmp(&b_line))
                .then_with(|| a_col.cmp(&b_col))
                .then_with(|| self.rule().cmp(&other.rule()))
                .then_with(|| self.message().cmp(&other.message())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .message()
                .cmp(&other.message())
                .then_with(|| self.rule().cmp(&other.rule())),
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
