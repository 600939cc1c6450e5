use rulemerge::RuleMergeError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error("Error").bold().render(ui.color)
    );

    for line in err.to_string().lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        for cause in causes {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(ui.color, ui.unicode),
                cause
            ));
        }
    }

    if let Some(fix) = err.downcast_ref::<RuleMergeError>().and_then(fix_hint) {
        out.push_str(&format!(
            "\n  {} {}\n",
            ColoredText::info("Fix:").bold().render(ui.color),
            fix
        ));
    }

    out
}

fn fix_hint(err: &RuleMergeError) -> Option<&'static str> {
    match err {
        RuleMergeError::NotADirectory { .. } => {
            Some("Remove or rename the file that is in the way of the output directory.")
        }
        RuleMergeError::FragmentRead { .. } => {
            Some("Check the permissions of the listed fragments; nothing was written.")
        }
        RuleMergeError::NoDestinations => {
            Some("Pass --output <PATH> or set [output] destinations in rulemerge.toml.")
        }
        RuleMergeError::InvalidConfig { .. } => Some("Fix the config file and try again."),
        RuleMergeError::ConfigRead { .. } => {
            Some("Check that the config file is a readable file, or pass --config <PATH>.")
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let paths: Vec<String> = err
            .downcast_ref::<RuleMergeError>()
            .map(|e| e.paths().iter().map(|p| p.display().to_string()).collect())
            .unwrap_or_default();
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "paths": paths,
        });
        println!("{}", output);
        return;
    }

    eprint!("{}", format_error(err, ui));
}
