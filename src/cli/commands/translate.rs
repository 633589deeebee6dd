use anyhow::Result;

use super::{CommandResult, CommandSummary, TranslateSummary, helper::finish};
use crate::{catalog::Params, cli::args::TranslateCommand, context::ProjectContext};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common.path, &cmd.common.overrides())?;
    let translator = ctx.translator(cmd.policy());

    let locale = cmd
        .locale
        .as_deref()
        .unwrap_or(ctx.catalog.default_locale());
    let params: Params = cmd.params.iter().cloned().collect();

    let summary = match translator.translate(&cmd.key, locale, &params) {
        Ok(output) => TranslateSummary {
            output: Some(output),
            error: None,
        },
        Err(err) => TranslateSummary {
            output: None,
            error: Some(err.to_string()),
        },
    };

    Ok(finish(CommandSummary::Translate(summary), Vec::new(), true))
}
