use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use serde_json::Value;
use walkdir::WalkDir;

use super::{Catalog, CatalogBuilder, MessageLocation};
use crate::error::CatalogError;

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_path: String,
    pub message: String,
    pub kind: LoadWarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarningKind {
    /// An unreadable file or a non-string value was skipped.
    Skipped,
    /// A later definition replaced an earlier one for the same locale.
    DuplicateKey {
        key: String,
        locale: String,
        value: String,
        location: MessageLocation,
    },
}

impl LoadWarning {
    fn skipped(file_path: impl Into<String>, message: String) -> Self {
        Self {
            file_path: file_path.into(),
            message,
            kind: LoadWarningKind::Skipped,
        }
    }
}

#[derive(Debug)]
pub struct LoadResult {
    pub catalog: Catalog,
    pub warnings: Vec<LoadWarning>,
    /// Catalog files that were read, in load order.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml" | "yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// A flattened string leaf of a catalog file.
#[derive(Debug)]
struct Leaf {
    key: String,
    value: String,
    line: usize,
}

#[derive(Debug, Default)]
struct ParsedFile {
    leaves: Vec<Leaf>,
    /// (key, found type) for values that are not strings.
    skipped: Vec<(String, &'static str)>,
}

/// Load a catalog from a per-locale directory or a combined file.
pub fn load_catalog(path: &Path, default_locale: &str) -> Result<LoadResult, CatalogError> {
    if path.is_dir() {
        load_dir(path, default_locale)
    } else if path.is_file() {
        load_combined(path, default_locale)
    } else {
        Err(CatalogError::MissingRoot {
            path: path.to_path_buf(),
        })
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.yaml" -> Some("zh-CN")
/// - "/path/to/messages/bg.json" -> Some("bg")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json|yaml|yml` file directly under `dir`.
pub fn load_dir(dir: &Path, default_locale: &str) -> Result<LoadResult, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::MissingRoot {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CatalogError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && Format::of(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    let has_default = files
        .iter()
        .any(|f| extract_locale(f).as_deref() == Some(default_locale));
    if !has_default {
        return Err(CatalogError::MissingDefaultLocale {
            locale: default_locale.to_string(),
            path: dir.to_path_buf(),
        });
    }

    let parsed: Vec<(PathBuf, Result<ParsedFile, CatalogError>)> = files
        .par_iter()
        .map(|path| (path.clone(), parse_locale_file(path)))
        .collect();

    let mut builder = CatalogBuilder::new(default_locale);
    let mut warnings = Vec::new();

    for (path, result) in parsed {
        let Some(locale) = extract_locale(&path) else {
            continue;
        };
        let file_path = path.to_string_lossy().to_string();
        builder.add_locale(locale.clone());

        match result {
            Ok(parsed) => {
                for leaf in parsed.leaves {
                    let location = MessageLocation::new(&file_path, leaf.line, 1);
                    let template = leaf.value.as_str();
                    if builder.insert(&locale, &leaf.key, template, Some(location.clone())) {
                        warnings.push(LoadWarning {
                            file_path: file_path.clone(),
                            message: format!(
                                "key \"{}\" is defined more than once for locale '{}'",
                                leaf.key, locale
                            ),
                            kind: LoadWarningKind::DuplicateKey {
                                key: leaf.key,
                                locale: locale.clone(),
                                value: leaf.value,
                                location,
                            },
                        });
                    }
                }
                warnings.extend(parsed.skipped.into_iter().map(|(key, found)| {
                    LoadWarning::skipped(
                        &file_path,
                        format!("key \"{}\" is not a string (found {})", key, found),
                    )
                }));
            }
            Err(e) => warnings.push(LoadWarning::skipped(file_path, error_chain(&e))),
        }
    }

    Ok(LoadResult {
        catalog: builder.build(),
        warnings,
        files,
    })
}

/// Load a single file shaped `{ "<key>": { "<locale>": "<template>" } }`.
pub fn load_combined(path: &Path, default_locale: &str) -> Result<LoadResult, CatalogError> {
    let format = Format::of(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let (content, root) = read_value(path, format)?;
    let Value::Object(root) = root else {
        return Err(CatalogError::InvalidRoot {
            path: path.to_path_buf(),
        });
    };

    let file_path = path.to_string_lossy().to_string();
    let line_index = build_line_index(&content);
    let mut builder = CatalogBuilder::new(default_locale);
    let mut warnings = Vec::new();
    let mut has_default = false;

    for (key, variants) in &root {
        let Value::Object(variants) = variants else {
            warnings.push(LoadWarning::skipped(
                &file_path,
                format!(
                    "key \"{}\" is not an object of locales (found {})",
                    key,
                    type_name(variants)
                ),
            ));
            continue;
        };

        for (locale, value) in variants {
            match value {
                Value::String(s) => {
                    let parts = [key.as_str(), locale.as_str()];
                    let line = find_key_line(&content, &parts, &line_index, format);
                    let location = MessageLocation::new(&file_path, line, 1);
                    builder.insert(locale, key, s.as_str(), Some(location));
                    has_default |= locale == default_locale;
                }
                other => warnings.push(LoadWarning::skipped(
                    &file_path,
                    format!(
                        "key \"{}\" is not a string for locale '{}' (found {})",
                        key,
                        locale,
                        type_name(other)
                    ),
                )),
            }
        }
    }

    if !has_default {
        return Err(CatalogError::MissingDefaultLocale {
            locale: default_locale.to_string(),
            path: path.to_path_buf(),
        });
    }

    Ok(LoadResult {
        catalog: builder.build(),
        warnings,
        files: vec![path.to_path_buf()],
    })
}

fn read_value(path: &Path, format: Format) -> Result<(String, Value), CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value = match format {
        Format::Json => serde_json::from_str(&content).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| CatalogError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
    };

    Ok((content, value))
}

fn parse_locale_file(path: &Path) -> Result<ParsedFile, CatalogError> {
    let format = Format::of(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let (content, value) = read_value(path, format)?;

    if !matches!(value, Value::Object(_) | Value::Null) {
        return Err(CatalogError::InvalidRoot {
            path: path.to_path_buf(),
        });
    }

    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(&content);
    let mut parsed = ParsedFile::default();
    flatten(&value, &mut Vec::new(), &content, &line_index, format, &mut parsed);
    Ok(parsed)
}

/// Walk nested objects, keeping the raw key of each level in `path` so a
/// flat `"nav.home"` key is located as one token.
fn flatten<'a>(
    value: &'a Value,
    path: &mut Vec<&'a str>,
    content: &str,
    line_index: &[usize],
    format: Format,
    result: &mut ParsedFile,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                path.push(key);
                flatten(val, path, content, line_index, format, result);
                path.pop();
            }
        }
        Value::String(s) => {
            let line = find_key_line(content, path, line_index, format);
            result.leaves.push(Leaf {
                key: path.join("."),
                value: s.clone(),
                line,
            });
        }
        // An empty document carries no messages.
        Value::Null if path.is_empty() => {}
        other => result.skipped.push((path.join("."), type_name(other))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search. Returns 1-based line.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a key path appears.
///
/// Searches for each part in sequence so that `common.submit` finds the
/// `submit` that comes after `common`, not one in another namespace. A match
/// only counts when it is a mapping key (followed by `:`), not a value.
fn find_key_line(content: &str, parts: &[&str], line_index: &[usize], format: Format) -> usize {
    let mut search_start = 0;
    let mut last_key_pos = None;

    for part in parts {
        match find_key_from(content, search_start, part, format) {
            Some((pos, end)) => {
                last_key_pos = Some(pos);
                search_start = end;
            }
            None => break,
        }
    }

    match last_key_pos {
        Some(pos) => offset_to_line(line_index, pos),
        None => 1,
    }
}

/// Returns (start, end) byte offsets of the key token, searching from `from`.
fn find_key_from(content: &str, from: usize, part: &str, format: Format) -> Option<(usize, usize)> {
    match format {
        Format::Json => {
            // Keys are matched in their escaped form: `say "hi"` is `"say \"hi\""`.
            let pattern =
                serde_json::to_string(part).unwrap_or_else(|_| format!("\"{}\"", part));
            let mut pos = from;
            while let Some(rel) = content.get(pos..).and_then(|rest| rest.find(&pattern)) {
                let start = pos + rel;
                let end = start + pattern.len();
                if content[end..].trim_start().starts_with(':') {
                    return Some((start, end));
                }
                pos = next_char(content, start);
            }
            None
        }
        Format::Yaml => {
            let mut pos = from;
            while let Some(rel) = content.get(pos..).and_then(|rest| rest.find(part)) {
                let start = pos + rel;
                let end = start + part.len();
                if is_yaml_key(content, start, end) {
                    return Some((start, end));
                }
                pos = next_char(content, start);
            }
            None
        }
    }
}

/// Byte offset of the character after the one at `pos`.
fn next_char(content: &str, pos: usize) -> usize {
    pos + content[pos..].chars().next().map_or(1, char::len_utf8)
}

fn is_yaml_key(content: &str, start: usize, end: usize) -> bool {
    let line_start = content[..start].rfind('\n').map_or(0, |i| i + 1);
    let before = content[line_start..start].trim_start();
    let quote = match before {
        "" => None,
        "\"" => Some('"'),
        "'" => Some('\''),
        _ => return false,
    };

    let mut after = &content[end..];
    if let Some(q) = quote {
        match after.strip_prefix(q) {
            Some(rest) => after = rest,
            None => return false,
        }
    }
    after.starts_with(':')
}
