use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    cli::args::ImportCommand,
    context::{Overrides, resolve_config},
    import::import_paraglide,
};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let out = match &cmd.out {
        Some(out) => out.clone(),
        None => {
            let mut config = resolve_config(&cmd.path, &Overrides::default())?.config;
            // Import always produces the per-locale directory layout.
            config.catalog_file = None;
            config.catalog_path(&cmd.path)
        }
    };

    let summary = import_paraglide(&cmd.source, &out, cmd.force)?;
    Ok(finish(CommandSummary::Import(summary), Vec::new(), false))
}
