//! Writes a per-locale JSON catalog file.
//!
//! Keys stay in insertion order and are written flat, since message keys
//! may contain dots that are not nesting.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

#[derive(Debug)]
pub struct CatalogWriter {
    file_path: PathBuf,
    root: Map<String, Value>,
}

impl CatalogWriter {
    /// Start an empty catalog for `path`. Fails if the file exists and
    /// `overwrite` is false.
    pub fn create(path: &Path, overwrite: bool) -> Result<Self> {
        if path.exists() && !overwrite {
            bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        Ok(Self {
            file_path: path.to_path_buf(),
            root: Map::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn add_message(&mut self, key: &str, template: &str) -> KeyAction {
        match self
            .root
            .insert(key.to_string(), Value::String(template.to_string()))
        {
            Some(_) => KeyAction::Updated,
            None => KeyAction::Added,
        }
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut content =
            serde_json::to_string_pretty(&self.root).context("Failed to serialize JSON")?;
        if !content.ends_with('\n') {
            content.push('\n');
        }

        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}
