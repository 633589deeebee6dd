pub mod check;
mod command_result;
pub mod detect;
mod helper;
pub mod import;
pub mod init;
pub mod locales;
pub mod translate;

pub use command_result::*;
