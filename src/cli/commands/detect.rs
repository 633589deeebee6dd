use anyhow::Result;

use super::{CommandResult, CommandSummary, DetectSummary, helper::finish};
use crate::{
    cli::args::DetectCommand,
    context::ProjectContext,
    locale::{DetectInput, detect_locale},
};

pub fn detect(cmd: DetectCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common.path, &cmd.common.overrides())?;
    let locales = ctx.locale_set();

    let input = DetectInput {
        path: cmd.url_path.as_deref(),
        query_locale: cmd.query_locale.as_deref(),
        cookie: cmd.cookie.as_deref(),
        accept_language: cmd.header.as_deref(),
        default_locale: None,
    };
    let locale = detect_locale(&input, &locales);
    let name = ctx.config.locale_name(&locale).map(String::from);

    Ok(finish(
        CommandSummary::Detect(DetectSummary { locale, name }),
        Vec::new(),
        false,
    ))
}
