use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a messages/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("messages"))?;
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with locale message files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_messages(vec![
    ///     ("en", json!({"key": "value"})),
    ///     ("bg", json!({"key": "стойност"})),
    /// ])?;
    /// ```
    pub fn with_messages(locales: Vec<(&str, Value)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (locale, content) in locales {
            fixture.write_locale_file(locale, &content)?;
        }
        Ok(fixture)
    }

    /// Write a locale JSON file to messages/<locale>.json
    pub fn write_locale_file(&self, locale: &str, content: &Value) -> Result<()> {
        let path = self
            .project_root
            .join("messages")
            .join(format!("{}.json", locale));
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for locale: {}", locale))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write locale file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .locatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".locatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Three locales; `bg` translates everything, `ru` only part of it.
pub fn fixture_multi_locale() -> Result<McpTestFixture> {
    McpTestFixture::with_messages(vec![
        (
            "en",
            json!({
                "welcome_back": "Welcome back, {username}!",
                "photo_count": "{count} photo",
                "filter_under20": "Under 20"
            }),
        ),
        (
            "bg",
            json!({
                "welcome_back": "Добре дошъл отново, {username}!",
                "photo_count": "{count} снимка",
                "filter_under20": "Под 20"
            }),
        ),
        (
            "ru",
            json!({
                "welcome_back": "С возвращением, {username}!"
            }),
        ),
    ])
}

/// A catalog with one problem of each kind.
pub fn fixture_with_problems() -> Result<McpTestFixture> {
    McpTestFixture::with_messages(vec![
        (
            "en",
            json!({
                "welcome_back": "Welcome back, {username}!",
                "brand": "Photo Market",
                "photos": "{count} photo{s}"
            }),
        ),
        (
            "bg",
            json!({
                "welcome_back": "Здравей, {user}!",
                "brand": "Photo Market",
                "photos": "{count} снимки{s}",
                "sell_moreTag": "още"
            }),
        ),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a paginated result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
