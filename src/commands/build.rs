use anyhow::Result;
use rulemerge::{BuildUseCase, LocalFs};

use super::Session;

pub fn cmd_build(session: &Session, dry_run: bool) -> Result<()> {
    let use_case = BuildUseCase::with_events(LocalFs::new(), session.event_sink("build", true));

    if !dry_run {
        use_case.execute(&session.build)?;
        return Ok(());
    }

    let report = use_case.dry_run(&session.build)?;
    if !session.ui.json && session.ui.verbose > 1 {
        print!("{}", report.document.content());
    }
    Ok(())
}
