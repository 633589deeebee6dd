//! Migration from generated paraglide message modules to a JSON catalog.

mod paraglide;
mod writer;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub use paraglide::{ExportedMessage, parse_message_module};
pub use writer::{CatalogWriter, KeyAction};

use crate::catalog::extract_locale;

/// An export that could not be turned into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedExport {
    pub key: String,
    pub line: usize,
    pub reason: String,
}

/// What happened to one locale module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleImport {
    pub locale: String,
    pub source: PathBuf,
    pub output: PathBuf,
    /// Messages written to the output file.
    pub messages: usize,
    /// Re-exported keys, left to fall back at runtime.
    pub inherited: usize,
    pub skipped: Vec<SkippedExport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Sorted by locale.
    pub locales: Vec<LocaleImport>,
}

impl ImportSummary {
    pub fn message_count(&self) -> usize {
        self.locales.iter().map(|l| l.messages).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.locales.iter().map(|l| l.skipped.len()).sum()
    }
}

/// Convert every `<locale>.js` module in `source_dir` into
/// `<out_dir>/<locale>.json`.
///
/// Nothing is written unless every module parses and, without `force`, no
/// output file already exists.
pub fn import_paraglide(source_dir: &Path, out_dir: &Path, force: bool) -> Result<ImportSummary> {
    if !source_dir.is_dir() {
        bail!("{} is not a directory", source_dir.display());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to read {}", source_dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == "js") {
            sources.push(path.to_path_buf());
        }
    }
    if sources.is_empty() {
        bail!("no message modules (*.js) found in {}", source_dir.display());
    }

    let parsed: Vec<(PathBuf, Result<Vec<ExportedMessage>>)> = sources
        .par_iter()
        .map(|path| (path.clone(), parse_file(path)))
        .collect();

    let mut writers = Vec::new();
    let mut summary = ImportSummary::default();

    for (source, exports) in parsed {
        let exports = exports?;
        let Some(locale) = extract_locale(&source) else {
            continue;
        };
        let output = out_dir.join(format!("{}.json", locale));
        let mut writer = CatalogWriter::create(&output, force)?;
        let mut report = LocaleImport {
            locale: locale.clone(),
            source: source.clone(),
            output,
            messages: 0,
            inherited: 0,
            skipped: Vec::new(),
        };

        for export in exports {
            match export {
                ExportedMessage::Template { key, template, .. } => {
                    if writer.add_message(&key, &template) == KeyAction::Updated {
                        warn!(key, locale, "message exported more than once, keeping the last");
                    } else {
                        report.messages += 1;
                    }
                }
                ExportedMessage::Inherited { key, from, .. } => {
                    debug!(key, locale, from, "re-exported message left to fall back");
                    report.inherited += 1;
                }
                ExportedMessage::Skipped { key, reason, line } => {
                    warn!(key, locale, line, reason, "skipping export");
                    report.skipped.push(SkippedExport { key, line, reason });
                }
            }
        }

        writers.push(writer);
        summary.locales.push(report);
    }

    for writer in &writers {
        writer.save()?;
    }

    summary.locales.sort_by(|a, b| a.locale.cmp(&b.locale));
    Ok(summary)
}

fn parse_file(path: &Path) -> Result<Vec<ExportedMessage>> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_message_module(code, &path.to_string_lossy())
}
