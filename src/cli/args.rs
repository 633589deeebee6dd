//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check the catalog for orphan keys, missing variants, placeholder drift, ...
//! - `translate`: Render one message for a locale
//! - `locales`: List locales with translation counts
//! - `detect`: Pick a locale from request signals
//! - `import`: Convert paraglide message modules to a JSON catalog
//! - `init`: Write a default `.locatrc.json`
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{
    catalog::parse_param_pair, context::Overrides, rules::CheckRule, translator::MissingKeyPolicy,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Detect(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that load a catalog.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root (where `.locatrc.json` is searched from)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Per-locale messages directory (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Combined catalog file (overrides config file)
    #[arg(long, conflicts_with = "messages_root")]
    pub catalog_file: Option<PathBuf>,

    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            messages_root: self.messages_root.clone(),
            catalog_file: self.catalog_file.clone(),
            default_locale: self.default_locale.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Message key
    pub key: String,

    /// Requested locale (default: the catalog's default locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Placeholder value, repeatable: --param username=Maria
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param_pair)]
    pub params: Vec<(String, String)>,

    /// Fail on unknown keys
    #[arg(long, conflicts_with = "passthrough")]
    pub strict: bool,

    /// Print unknown keys as-is
    #[arg(long)]
    pub passthrough: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TranslateCommand {
    pub fn policy(&self) -> Option<MissingKeyPolicy> {
        if self.strict {
            Some(MissingKeyPolicy::Strict)
        } else if self.passthrough {
            Some(MissingKeyPolicy::Passthrough)
        } else {
            None
        }
    }
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DetectCommand {
    /// Request path, e.g. /bg/home
    #[arg(long = "url-path")]
    pub url_path: Option<String>,

    /// Value of the `locale` query parameter
    #[arg(long)]
    pub query_locale: Option<String>,

    /// Locale cookie value
    #[arg(long)]
    pub cookie: Option<String>,

    /// Accept-Language header
    #[arg(long)]
    pub header: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Directory with generated `<locale>.js` message modules
    pub source: PathBuf,

    /// Output directory (default: the configured messages root)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Overwrite existing catalog files
    #[arg(long)]
    pub force: bool,

    /// Project root (where `.locatrc.json` is searched from)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the catalog (orphan keys, missing variants, placeholders, naive plurals)
    Check(CheckCommand),
    /// Render a message for a locale
    Translate(TranslateCommand),
    /// List locales with translated and inherited message counts
    Locales(LocalesCommand),
    /// Pick a locale from a request path, query, cookie or Accept-Language header
    Detect(DetectCommand),
    /// Convert paraglide message modules into a JSON catalog
    Import(ImportCommand),
    /// Initialize a new .locatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
