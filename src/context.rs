//! Project loading shared by the CLI and the MCP server.
//!
//! A project is a root directory, the `.locatrc.json` found from it (or the
//! defaults), command-line overrides, and the catalog those settings point at.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::{
    catalog::{Catalog, LoadWarning, load_catalog},
    config::{Config, load_config},
    locale::LocaleSet,
    translator::{MissingKeyPolicy, Translator},
};

/// Settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub messages_root: Option<PathBuf>,
    pub catalog_file: Option<PathBuf>,
    pub default_locale: Option<String>,
}

/// Config resolved for a root, before any catalog is read.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    /// True if a `.locatrc.json` was found.
    pub from_file: bool,
}

/// Find and merge configuration for `root`.
pub fn resolve_config(root: &Path, overrides: &Overrides) -> Result<ResolvedConfig> {
    let loaded = load_config(root)?;
    let mut config = loaded.config;

    if let Some(messages_root) = &overrides.messages_root {
        config.messages_root = messages_root.to_string_lossy().to_string();
        config.catalog_file = None;
    }
    if let Some(catalog_file) = &overrides.catalog_file {
        config.catalog_file = Some(catalog_file.to_string_lossy().to_string());
    }
    if let Some(locale) = &overrides.default_locale {
        config.default_locale = locale.clone();
    }
    config.validate()?;

    Ok(ResolvedConfig {
        config,
        from_file: loaded.from_file,
    })
}

/// A loaded project: config plus catalog.
#[derive(Debug)]
pub struct ProjectContext {
    pub root_dir: PathBuf,
    pub config: Config,
    pub config_from_file: bool,
    pub catalog: Catalog,
    /// Non-fatal load problems (bad files, non-string values, duplicates).
    pub warnings: Vec<LoadWarning>,
    /// Catalog files that were read.
    pub files: Vec<PathBuf>,
}

impl ProjectContext {
    pub fn load(root: &Path, overrides: &Overrides) -> Result<Self> {
        let ResolvedConfig { config, from_file } = resolve_config(root, overrides)?;
        if !from_file {
            debug!(root = %root.display(), "no config file found, using defaults");
        }

        let catalog_path = config.catalog_path(root);
        let loaded = load_catalog(&catalog_path, &config.default_locale)
            .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

        debug!(
            files = loaded.files.len(),
            keys = loaded.catalog.len(),
            warnings = loaded.warnings.len(),
            "catalog loaded"
        );

        Ok(Self {
            root_dir: root.to_path_buf(),
            config,
            config_from_file: from_file,
            catalog: loaded.catalog,
            warnings: loaded.warnings,
            files: loaded.files,
        })
    }

    pub fn locale_set(&self) -> LocaleSet {
        LocaleSet::new(self.catalog.default_locale(), self.catalog.locales())
            .with_aliases(self.config.aliases.clone())
    }

    /// A translator over a copy of the catalog.
    ///
    /// `policy` overrides the configured missing-key policy.
    pub fn translator(&self, policy: Option<MissingKeyPolicy>) -> Translator {
        Translator::new(self.catalog.clone())
            .with_aliases(self.config.aliases.clone())
            .with_policy(policy.unwrap_or_else(|| self.config.missing_key_policy()))
    }
}
