use anyhow::Result;
use rulemerge::{CheckReport, CheckUseCase, DestinationStatus, LocalFs};

use super::Session;
use crate::ui::context::UiContext;
use crate::ui::diff::render_unified_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Returns whether every destination is up to date
pub fn cmd_check(session: &Session) -> Result<bool> {
    let use_case = CheckUseCase::with_events(LocalFs::new(), session.event_sink("check", false));
    let report = use_case.execute(&session.build)?;

    if session.ui.json {
        print_json(&report);
    } else {
        print!("{}", render_report(&report, &session.ui));
    }

    Ok(report.is_up_to_date())
}

fn status_name(status: &DestinationStatus) -> &'static str {
    match status {
        DestinationStatus::UpToDate => "up_to_date",
        DestinationStatus::Stale { .. } => "stale",
        DestinationStatus::Missing => "missing",
    }
}

fn print_json(report: &CheckReport) {
    for destination in &report.destinations {
        let event = serde_json::json!({
            "event": "destination",
            "command": "check",
            "path": destination.path.display().to_string(),
            "status": status_name(&destination.status),
        });
        println!("{}", event);
    }

    let outdated = report.outdated().count();
    let event = serde_json::json!({
        "event": "complete",
        "command": "check",
        "status": if outdated == 0 { "success" } else { "outdated" },
        "destinations": report.destinations.len(),
        "outdated": outdated,
    });
    println!("{}", event);
}

fn render_report(report: &CheckReport, ui: &UiContext) -> String {
    let mut out = String::new();

    for destination in &report.destinations {
        let path = destination.path.display().to_string();
        let (icon, label) = match &destination.status {
            DestinationStatus::UpToDate => (Icon::Success, ColoredText::success("up to date")),
            DestinationStatus::Stale { .. } => (Icon::Error, ColoredText::error("out of date")),
            DestinationStatus::Missing => (Icon::Error, ColoredText::error("missing")),
        };
        out.push_str(&format!(
            "{} {} {}\n",
            icon.colored(ui.color, ui.unicode),
            path,
            label.render(ui.color)
        ));

        if ui.verbose > 0 {
            let current = match &destination.status {
                DestinationStatus::Stale { current } => current.as_str(),
                DestinationStatus::Missing => "",
                DestinationStatus::UpToDate => continue,
            };
            out.push_str(&render_unified_diff(&path, current, &report.expected, ui.color));
        }
    }

    let outdated = report.outdated().count();
    if outdated > 0 {
        out.push_str(&format!(
            "\n{} destination(s) out of date; run `rulemerge build` to update them\n",
            outdated
        ));
    }
    out
}
