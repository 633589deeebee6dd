use std::collections::BTreeMap;

use locat::{
    ParamValue,
    mcp::{
        LocatMcpServer,
        types::{CheckCatalogParams, TranslateParams},
    },
    rules::CheckRule,
};
use rmcp::handler::server::wrapper::Parameters;

use crate::{
    assert_pagination, extract_tool_result_json, fixture_multi_locale, fixture_with_problems,
};

fn translate_params(root: String, key: &str, locale: Option<&str>) -> TranslateParams {
    TranslateParams {
        project_root_path: root,
        key: key.to_string(),
        locale: locale.map(String::from),
        params: BTreeMap::new(),
    }
}

// ============================================================================
// translate tests
// ============================================================================

#[tokio::test]
async fn test_translate_with_params() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocatMcpServer::new();

    let mut params = translate_params(fixture.root(), "welcome_back", Some("bg"));
    params
        .params
        .insert("username".to_string(), ParamValue::from("Мария"));

    let result = server.translate(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["output"], "Добре дошъл отново, Мария!");
    assert_eq!(json_result["requestedLocale"], "bg");
}

#[tokio::test]
async fn test_translate_number_param_and_fallback() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocatMcpServer::new();

    let mut params = translate_params(fixture.root(), "photo_count", Some("ru"));
    params.params.insert("count".to_string(), ParamValue::Int(3));

    let result = server.translate(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // ru inherits photo_count from en
    assert_eq!(json_result["output"], "3 photo");
}

#[tokio::test]
async fn test_translate_default_locale() {
    let fixture = fixture_multi_locale().unwrap();
    let server = LocatMcpServer::new();

    let params = translate_params(fixture.root(), "filter_under20", None);
    let result = server.translate(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["requestedLocale"], "en");
    assert_eq!(json_result["output"], "Under 20");
}

#[tokio::test]
async fn test_translate_unknown_key() {
    let fixture = fixture_multi_locale().unwrap();
    fixture
        .write_config(&serde_json::json!({ "missingKey": "strict" }))
        .unwrap();
    let server = LocatMcpServer::new();

    let params = translate_params(fixture.root(), "nope", Some("bg"));
    let err = server.translate(Parameters(params)).await.unwrap_err();

    assert!(err.message.contains("unknown message key \"nope\""));
}

// ============================================================================
// check_catalog tests
// ============================================================================

fn check_params(root: String, checks: Option<Vec<CheckRule>>) -> CheckCatalogParams {
    CheckCatalogParams {
        project_root_path: root,
        checks,
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn test_check_catalog_all_rules() {
    let fixture = fixture_with_problems().unwrap();
    let server = LocatMcpServer::new();

    let result = server
        .check_catalog(Parameters(check_params(fixture.root(), None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    // placeholder mismatch, untranslated, orphan, two naive plurals
    assert_eq!(json_result["totalCount"], 5);
    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 4);
    assert_pagination(&json_result, 0, 20, false);

    let items = json_result["items"].as_array().unwrap();
    let mismatch = items
        .iter()
        .find(|i| i["rule"] == "placeholder-mismatch")
        .unwrap();
    assert_eq!(mismatch["key"], "welcome_back");
    assert_eq!(mismatch["severity"], "error");
    assert_eq!(
        mismatch["details"],
        "in bg: missing {username}; unexpected {user}"
    );
    assert!(mismatch["filePath"].as_str().unwrap().ends_with("bg.json"));
    assert_eq!(mismatch["line"], 2);
}

#[tokio::test]
async fn test_check_catalog_selected_rules() {
    let fixture = fixture_with_problems().unwrap();
    let server = LocatMcpServer::new();

    let result = server
        .check_catalog(Parameters(check_params(
            fixture.root(),
            Some(vec![CheckRule::Orphan]),
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["key"], "sell_moreTag");
    assert_eq!(json_result["items"][0]["rule"], "orphan-key");
}

#[tokio::test]
async fn test_check_catalog_pagination() {
    let fixture = fixture_with_problems().unwrap();
    let server = LocatMcpServer::new();

    let mut params = check_params(fixture.root(), None);
    params.limit = Some(2);
    params.offset = Some(1);

    let result = server.check_catalog(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_pagination(&json_result, 1, 2, true);

    let mut params = check_params(fixture.root(), None);
    params.offset = Some(4);
    let result = server.check_catalog(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_pagination(&json_result, 4, 20, false);
}
