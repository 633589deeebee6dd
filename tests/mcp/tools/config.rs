use locat::mcp::{
    LocatMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({}))]).unwrap();
    let server = LocatMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["messagesRoot"], "./messages");
    assert_eq!(json_result["config"]["defaultLocale"], "en");
    assert!(json_result["config"]["ignoreKeys"].is_array());
    assert!(json_result["config"].get("catalogFile").is_none());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_locatrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messagesRoot": "locales",
            "defaultLocale": "bg",
            "aliases": { "uk": "en" },
            "missingKey": "passthrough"
        }))
        .unwrap();

    let server = LocatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["messagesRoot"], "locales");
    assert_eq!(json_result["config"]["defaultLocale"], "bg");
    assert_eq!(json_result["config"]["aliases"]["uk"], "en");
    assert_eq!(json_result["config"]["missingKey"], "passthrough");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignoreKeys": ["[invalid"] }))
        .unwrap();

    let server = LocatMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_counts() {
    let fixture = fixture_multi_locale().unwrap();
    fixture
        .write_config(&json!({ "localeNames": { "bg": "Български" } }))
        .unwrap();
    let server = LocatMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["defaultLocale"], "en");
    assert_eq!(json_result["keyCount"], 3);
    assert_eq!(
        json_result["catalogPath"],
        fixture.root_path().join("messages").to_string_lossy().to_string()
    );

    let locales = json_result["locales"].as_array().unwrap();
    let names: Vec<&str> = locales
        .iter()
        .map(|l| l["locale"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bg", "en", "ru"]);

    assert_eq!(locales[0]["name"], "Български");
    assert_eq!(locales[0]["translated"], 3);
    assert_eq!(locales[1]["isDefault"], true);
    assert_eq!(locales[2]["translated"], 1);
    assert_eq!(locales[2]["inherited"], 2);
    assert!(locales[2].get("name").is_none());
}

#[tokio::test]
async fn test_get_locales_missing_default_locale() {
    let fixture = McpTestFixture::with_messages(vec![("bg", json!({"a": "б"}))]).unwrap();
    let server = LocatMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let err = server.get_locales(params).await.unwrap_err();
    assert!(err.message.contains("default locale 'en' has no messages"));
}
