use std::{
    collections::BTreeMap,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::translator::MissingKeyPolicy;

pub const CONFIG_FILE_NAME: &str = ".locatrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    /// Combined `{key: {locale: template}}` file. Wins over `messagesRoot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<String>,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub locale_names: BTreeMap<String, String>,
    /// Unset means "by build profile".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_key: Option<MissingKeyPolicy>,
    #[serde(default)]
    pub ignore_keys: Vec<String>,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            catalog_file: None,
            default_locale: default_locale(),
            aliases: BTreeMap::new(),
            locale_names: BTreeMap::new(),
            missing_key: None,
            ignore_keys: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignoreKeys` and for
    /// aliases that map a locale onto itself.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore_keys {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignoreKeys': \"{}\"", pattern))?;
        }

        for (alias, target) in &self.aliases {
            if alias.eq_ignore_ascii_case(target) {
                bail!("Invalid entry in 'aliases': \"{}\" points at itself", alias);
            }
        }

        if self.default_locale.trim().is_empty() {
            bail!("'defaultLocale' must not be empty");
        }

        Ok(())
    }

    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        self.missing_key.unwrap_or_default()
    }

    /// Where the catalog lives, relative to the project root.
    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        let relative = self.catalog_file.as_ref().unwrap_or(&self.messages_root);
        let relative: PathBuf = Path::new(relative)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        root.join(relative)
    }

    /// Compiled `ignoreKeys` patterns. Call after `validate`.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignore_keys
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }

    pub fn locale_name(&self, locale: &str) -> Option<&str> {
        self.locale_names.get(locale).map(String::as_str)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
