//! Model Context Protocol (MCP) server.
//!
//! Exposes the catalog to AI assistants over stdio: locales, rendering
//! and checks.
//!
//! - `server`: tool implementations and `run_server`
//! - `types`: tool parameters and JSON results

mod server;
pub mod types;

pub use server::{LocatMcpServer, run_server};
