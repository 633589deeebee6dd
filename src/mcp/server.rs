use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    catalog::Params,
    context::{Overrides, ProjectContext, resolve_config},
    issues::{Issue, Severity},
    rules::run_checks,
};

use super::types::{
    CheckCatalogParams, CheckCatalogResult, CheckItem, ConfigDto, ConfigValues, GetConfigParams,
    GetLocalesParams, LocaleInfo, LocalesResult, Pagination, TranslateParams, TranslateResult,
};

#[derive(Clone)]
pub struct LocatMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for LocatMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl LocatMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get available locales with translation counts
    #[tool(
        description = "Get the catalog's locales with translated/inherited key counts and display names."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);
        let ctx = load_project(root)?;
        let catalog = &ctx.catalog;

        let locales = catalog
            .locales()
            .map(|locale| {
                let stats = catalog.locale_stats(locale);
                LocaleInfo {
                    locale: locale.to_string(),
                    name: ctx.config.locale_name(locale).map(String::from),
                    is_default: locale == catalog.default_locale(),
                    translated: stats.translated,
                    inherited: stats.inherited,
                }
            })
            .collect();

        let result = LocalesResult {
            catalog_path: ctx.config.catalog_path(root).to_string_lossy().to_string(),
            default_locale: catalog.default_locale().to_string(),
            key_count: catalog.len(),
            locales,
        };

        to_json_result(&result)
    }

    /// Render one message
    #[tool(
        description = "Render a message for a locale with {name} placeholders filled from params. Unsupported locales fall back to the default locale."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let TranslateParams {
            project_root_path,
            key,
            locale,
            params,
        } = params.0;
        let ctx = load_project(Path::new(&project_root_path))?;
        let translator = ctx.translator(None);

        let requested_locale = locale.unwrap_or_else(|| ctx.catalog.default_locale().to_string());
        let values: Params = params.into_iter().collect();

        let output = translator
            .translate(&key, &requested_locale, &values)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        to_json_result(&TranslateResult {
            key,
            requested_locale,
            output,
        })
    }

    /// Run catalog checks
    #[tool(
        description = "Check the catalog for orphan keys, missing variants, untranslated values, placeholder mismatches and naive plurals. Load problems (duplicate keys, unreadable files) are included. Returns paginated list of issues."
    )]
    pub async fn check_catalog(
        &self,
        params: Parameters<CheckCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_project(Path::new(&params.project_root_path))?;
        let checks = params.checks.unwrap_or_default();

        let mut issues = run_checks(&ctx.catalog, &checks, &ctx.config.ignore_patterns());
        issues.extend(ctx.warnings.iter().map(Issue::from));
        issues.sort();

        let total_count = issues.len();
        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        // Apply pagination
        let items: Vec<CheckItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(CheckItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        let result = CheckCatalogResult {
            total_count,
            error_count,
            warning_count: total_count - error_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_json_result(&result)
    }

    /// Get the current locat configuration
    #[tool(description = "Get the current locat configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = resolve_config(path, &Overrides::default())
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        to_json_result(&config_dto)
    }
}

fn load_project(root: &Path) -> Result<ProjectContext, McpError> {
    debug!(root = %root.display(), "loading project for MCP tool");
    ProjectContext::load(root, &Overrides::default())
        .map_err(|e| McpError::internal_error(format!("Failed to load project: {:#}", e), None))
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for LocatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Locat MCP gives AI agents read access to a project's message catalog.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get locales with translated/inherited counts\n\
                 3. translate - Render a message for a locale\n\
                 4. check_catalog - List catalog problems (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use get_locales to see coverage per locale\n\
                 2. Use check_catalog to find orphan keys and placeholder mismatches\n\
                 3. Use translate to confirm how a message renders after edits"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LocatMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
