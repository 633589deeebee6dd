//! Reads generated paraglide message modules.
//!
//! A module exports one arrow function per message:
//!
//! ```js
//! export const hello = () => `Здравей`
//! export const dashboard_welcomeBack = (params) => `Welcome back, ${params.username}!`
//! export { close } from "./en.js"
//! ```
//!
//! Template literals become `{name}` templates. Re-exports mean the locale
//! has no translation of its own.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Span};
use swc_ecma_ast::{
    ArrowExpr, BlockStmtOrExpr, Decl, ExportDecl, ExportSpecifier, Expr, Lit, MemberProp,
    ModuleExportName, NamedExport, Pat, Stmt, Tpl,
};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};
use swc_ecma_visit::{Visit, VisitWith};

/// One `export` found in a message module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedMessage {
    /// A message with its own text, already in `{name}` syntax.
    Template {
        key: String,
        template: String,
        line: usize,
    },
    /// `export { key } from "./en.js"`.
    Inherited {
        key: String,
        from: String,
        line: usize,
    },
    /// An export whose shape is not a plain message.
    Skipped {
        key: String,
        reason: String,
        line: usize,
    },
}

impl ExportedMessage {
    pub fn key(&self) -> &str {
        match self {
            ExportedMessage::Template { key, .. }
            | ExportedMessage::Inherited { key, .. }
            | ExportedMessage::Skipped { key, .. } => key,
        }
    }
}

/// Parse a message module's source into its exports, in source order.
pub fn parse_message_module(code: String, file_path: &str) -> Result<Vec<ExportedMessage>> {
    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Es(EsSyntax::default());
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        let mut collector = ExportCollector {
            source_map,
            exports: Vec::new(),
        };
        module.visit_with(&mut collector);
        Ok(collector.exports)
    })
}

struct ExportCollector {
    source_map: Arc<SourceMap>,
    exports: Vec<ExportedMessage>,
}

impl ExportCollector {
    fn line(&self, span: Span) -> usize {
        self.source_map.lookup_char_pos(span.lo).line
    }

    fn message_from_init(key: String, init: Option<&Expr>, line: usize) -> ExportedMessage {
        let skipped = |reason: &str| ExportedMessage::Skipped {
            key: key.clone(),
            reason: reason.to_string(),
            line,
        };

        let Some(Expr::Arrow(arrow)) = init.map(unwrap_paren) else {
            return skipped("not an arrow function");
        };
        let param = match arrow.params.as_slice() {
            [] => None,
            [Pat::Ident(ident)] => Some(ident.id.sym.to_string()),
            _ => return skipped("unsupported parameter list"),
        };
        let Some(body) = arrow_body(arrow) else {
            return skipped("function body is not a single returned value");
        };

        match template_text(body, param.as_deref()) {
            Ok(template) => ExportedMessage::Template {
                key,
                template,
                line,
            },
            Err(reason) => ExportedMessage::Skipped { key, reason, line },
        }
    }
}

impl Visit for ExportCollector {
    fn visit_export_decl(&mut self, node: &ExportDecl) {
        let Decl::Var(var_decl) = &node.decl else {
            if let Decl::Fn(f) = &node.decl {
                self.exports.push(ExportedMessage::Skipped {
                    key: f.ident.sym.to_string(),
                    reason: "function declaration".to_string(),
                    line: self.line(node.span),
                });
            }
            return;
        };

        for decl in &var_decl.decls {
            let Pat::Ident(binding) = &decl.name else {
                continue;
            };
            let key = binding.id.sym.to_string();
            let line = self.line(decl.span);
            self.exports
                .push(Self::message_from_init(key, decl.init.as_deref(), line));
        }
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        let from = node
            .src
            .as_ref()
            .and_then(|s| s.value.as_str())
            .map(|s| s.to_string());
        let line = self.line(node.span);

        for specifier in &node.specifiers {
            let ExportSpecifier::Named(named) = specifier else {
                continue;
            };
            let key = export_name(named.exported.as_ref().unwrap_or(&named.orig));
            let message = match &from {
                Some(from) => ExportedMessage::Inherited {
                    key,
                    from: from.clone(),
                    line,
                },
                None => ExportedMessage::Skipped {
                    key,
                    reason: "local re-export".to_string(),
                    line,
                },
            };
            self.exports.push(message);
        }
    }
}

fn export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::Ident(ident) => ident.sym.to_string(),
        ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
    }
}

fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        other => other,
    }
}

fn arrow_body(arrow: &ArrowExpr) -> Option<&Expr> {
    match &*arrow.body {
        BlockStmtOrExpr::Expr(expr) => Some(unwrap_paren(expr)),
        BlockStmtOrExpr::BlockStmt(block) => match block.stmts.as_slice() {
            [Stmt::Return(ret)] => ret.arg.as_deref().map(unwrap_paren),
            _ => None,
        },
    }
}

/// Turn a message body into `{name}` template text.
fn template_text(body: &Expr, param: Option<&str>) -> std::result::Result<String, String> {
    match body {
        Expr::Lit(Lit::Str(s)) => s
            .value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| "string literal is not valid UTF-8".to_string()),
        Expr::Tpl(tpl) => tpl_text(tpl, param),
        _ => Err("body is not a string or template literal".to_string()),
    }
}

fn tpl_text(tpl: &Tpl, param: Option<&str>) -> std::result::Result<String, String> {
    let mut out = String::new();
    for (i, quasi) in tpl.quasis.iter().enumerate() {
        let text = quasi
            .cooked
            .as_ref()
            .and_then(|cooked| cooked.as_str())
            .ok_or_else(|| "template literal has an invalid escape".to_string())?;
        out.push_str(text);

        if let Some(expr) = tpl.exprs.get(i) {
            let name = placeholder_name(unwrap_paren(expr), param)
                .ok_or_else(|| "interpolation is not a plain parameter".to_string())?;
            out.push('{');
            out.push_str(&name);
            out.push('}');
        }
    }
    Ok(out)
}

/// `params.name` for the arrow's own parameter, or a bare identifier.
fn placeholder_name(expr: &Expr, param: Option<&str>) -> Option<String> {
    match expr {
        Expr::Member(member) => {
            let Expr::Ident(obj) = &*member.obj else {
                return None;
            };
            if Some(obj.sym.as_str()) != param {
                return None;
            }
            match &member.prop {
                MemberProp::Ident(prop) => Some(prop.sym.to_string()),
                _ => None,
            }
        }
        Expr::Ident(ident) if Some(ident.sym.as_str()) != param => Some(ident.sym.to_string()),
        _ => None,
    }
}
