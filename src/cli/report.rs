//! Report formatting and printing utilities.
//!
//! Issues are shown in cargo style; other commands print their summaries.
//! Kept apart from the commands so the library can be used without output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, DetectSummary, InitSummary, LocalesSummary,
    TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::import::ImportSummary;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);
    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} in {} {} - no issues found",
            summary.key_count,
            if summary.key_count == 1 { "key" } else { "keys" },
            summary.locale_count,
            if summary.locale_count == 1 {
                "locale"
            } else {
                "locales"
            }
        )
        .green()
    );
}

/// Print a warning when some catalog files were skipped while loading.
pub fn print_parse_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} catalog {} could not be loaded; {} keys were not checked",
            "warning:".bold().yellow(),
            count,
            if count == 1 { "file" } else { "files" },
            if count == 1 { "its" } else { "their" }
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location().parts() {
        Some((path, 0, _)) => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        Some((path, line, col)) => {
            let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, col);
        }
        None => {}
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().parts().map(|(_, line, _)| line))
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, &mut out, &mut err);
}

pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            if result.issues.is_empty() {
                print_success_to(summary, out);
            } else {
                report_to(&result.issues, out);
            }
            print_parse_warning_to(result.parse_error_count, err);
        }
        CommandSummary::Translate(summary) => print_translate(summary, out, err),
        CommandSummary::Locales(summary) => print_locales(summary, out),
        CommandSummary::Detect(summary) => print_detect(summary, out),
        CommandSummary::Import(summary) => print_import(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_translate<O: Write, E: Write>(summary: &TranslateSummary, out: &mut O, err: &mut E) {
    if let Some(output) = &summary.output {
        let _ = writeln!(out, "{}", output);
    }
    if let Some(error) = &summary.error {
        let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
    }
}

fn print_locales<O: Write>(summary: &LocalesSummary, out: &mut O) {
    let locale_width = summary
        .rows
        .iter()
        .map(|r| r.locale.width())
        .max()
        .unwrap_or(0);
    let name_width = summary
        .rows
        .iter()
        .map(|r| r.name.as_deref().map_or(0, UnicodeWidthStr::width))
        .max()
        .unwrap_or(0);
    let count_width = summary.key_count.to_string().len();

    for row in &summary.rows {
        let marker = if row.is_default { "*" } else { " " };
        let name = row.name.as_deref().unwrap_or("");
        let _ = writeln!(
            out,
            "{} {}{}  {}{}  {:>cw$} translated, {:>cw$} inherited",
            marker.green(),
            row.locale.bold(),
            pad(&row.locale, locale_width),
            name,
            pad(name, name_width),
            row.translated,
            row.inherited,
            cw = count_width
        );
    }
    let _ = writeln!(
        out,
        "\n{} {} {} in {} {} (* default)",
        SUCCESS_MARK.green(),
        summary.key_count,
        if summary.key_count == 1 { "key" } else { "keys" },
        summary.rows.len(),
        if summary.rows.len() == 1 {
            "locale"
        } else {
            "locales"
        }
    );
}

/// Spaces to pad `text` to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn print_detect<O: Write>(summary: &DetectSummary, out: &mut O) {
    match &summary.name {
        Some(name) => {
            let _ = writeln!(out, "{}  {}", summary.locale, name.dimmed());
        }
        None => {
            let _ = writeln!(out, "{}", summary.locale);
        }
    }
}

fn print_import<O: Write>(summary: &ImportSummary, out: &mut O) {
    for locale in &summary.locales {
        for skipped in &locale.skipped {
            let _ = writeln!(
                out,
                "{}: \"{}\" {}",
                "warning".bold().yellow(),
                skipped.key,
                skipped.reason.dimmed()
            );
            let _ = writeln!(
                out,
                "  {} {}:{}",
                "-->".blue(),
                locale.source.display(),
                skipped.line
            );
        }
    }

    for locale in &summary.locales {
        let _ = writeln!(
            out,
            "{} {}: {} messages, {} inherited, {} skipped -> {}",
            SUCCESS_MARK.green(),
            locale.locale.bold(),
            locale.messages,
            locale.inherited,
            locale.skipped.len(),
            locale.output.display()
        );
    }

    let _ = writeln!(
        out,
        "{} {} messages into {} {}",
        "Imported".green().bold(),
        summary.message_count(),
        summary.locales.len(),
        if summary.locales.len() == 1 {
            "file"
        } else {
            "files"
        }
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}
