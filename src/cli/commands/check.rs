use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    cli::args::CheckCommand,
    context::ProjectContext,
    issues::Issue,
    rules::run_checks,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::load(&cmd.common.path, &cmd.common.overrides())?;
    let ignore_keys = ctx.config.ignore_patterns();

    let mut issues = run_checks(&ctx.catalog, &cmd.checks, &ignore_keys);
    issues.extend(ctx.warnings.iter().map(Issue::from));

    let summary = CheckSummary {
        locale_count: ctx.catalog.locales().count(),
        key_count: ctx.catalog.len(),
        file_count: ctx.files.len(),
        default_locale: ctx.catalog.default_locale().to_string(),
    };

    Ok(finish(CommandSummary::Check(summary), issues, true))
}
