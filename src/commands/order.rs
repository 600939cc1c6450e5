use anyhow::Result;
use rulemerge::{LocalFs, OrderUseCase};

use super::Session;

pub fn cmd_order(session: &Session) -> Result<()> {
    let use_case = OrderUseCase::with_events(LocalFs::new(), session.event_sink("order", false));
    let order = use_case.execute(&session.build)?;

    if session.ui.json {
        let event = serde_json::json!({
            "event": "complete",
            "command": "order",
            "status": "success",
            "order": order,
        });
        println!("{}", event);
        return Ok(());
    }

    for name in &order {
        println!("{}", name);
    }
    Ok(())
}
