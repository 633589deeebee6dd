//! Locat - translation catalog with locale fallback
//!
//! Locat loads message catalogs (one JSON/YAML file per locale, or a single
//! combined file), renders messages with `{name}` placeholders, and falls back
//! to the default locale for anything a locale does not translate. The same
//! catalog can be checked for orphan keys, placeholder drift and other
//! problems from the CLI or over MCP.
//!
//! ```
//! use locat::{Catalog, Params, Translator};
//!
//! let catalog = Catalog::builder("en")
//!     .message("en", "welcome_back", "Welcome back, {username}!")
//!     .message("bg", "welcome_back", "Добре дошъл отново, {username}!")
//!     .build();
//! let translator = Translator::new(catalog);
//! let params = Params::new().with("username", "Ива");
//!
//! assert_eq!(
//!     translator.translate("welcome_back", "bg", &params).unwrap(),
//!     "Добре дошъл отново, Ива!"
//! );
//! ```
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog model, templates, parameters and file loading
//! - `translator`: Lookup with fallback and the missing-key policy
//! - `locale`: Locale canonicalization, resolvers and request detection
//! - `telemetry`: Message resolution hook
//! - `config`: Configuration file loading and parsing
//! - `context`: Project loading shared by CLI and MCP
//! - `rules` / `issues`: Catalog checks and their findings
//! - `import`: Paraglide message module importer
//! - `cli`: Command-line interface layer
//! - `mcp`: Model Context Protocol server implementation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod import;
pub mod issues;
pub mod locale;
pub mod mcp;
pub mod rules;
pub mod telemetry;
pub mod translator;
pub mod utils;

pub use catalog::{Catalog, CatalogBuilder, ParamValue, Params, Template};
pub use error::{CatalogError, TranslateError};
pub use locale::{FixedLocale, LocaleResolver, LocaleSet};
pub use translator::{Localizer, MessageOptions, MissingKeyPolicy, Translator};
