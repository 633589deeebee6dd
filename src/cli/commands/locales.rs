use anyhow::Result;

use super::{CommandResult, CommandSummary, LocaleRow, LocalesSummary, helper::finish};
use crate::{cli::args::LocalesCommand, context::ProjectContext};

pub fn locales(cmd: LocalesCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common.path, &cmd.common.overrides())?;
    let catalog = &ctx.catalog;

    let rows = catalog
        .locales()
        .map(|locale| {
            let stats = catalog.locale_stats(locale);
            LocaleRow {
                locale: locale.to_string(),
                name: ctx.config.locale_name(locale).map(String::from),
                is_default: locale == catalog.default_locale(),
                translated: stats.translated,
                inherited: stats.inherited,
            }
        })
        .collect();

    let summary = LocalesSummary {
        rows,
        key_count: catalog.len(),
    };
    Ok(finish(CommandSummary::Locales(summary), Vec::new(), false))
}
