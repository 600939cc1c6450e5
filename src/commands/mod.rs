//! Command handlers for the rulemerge binary

pub mod build;
pub mod check;
pub mod order;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rulemerge::config::{self, LoadedConfig};
use rulemerge::domain::ports::BuildEventSink;
use rulemerge::{BuildConfig, JsonEventSink};

use crate::cli::{ColorWhen, SourceArgs};
use crate::ui::console_sink::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Resolved configuration and output settings for one command run
pub struct Session {
    pub ui: UiContext,
    pub build: BuildConfig,
}

impl Session {
    /// Load config, report its warnings and apply CLI path overrides.
    ///
    /// CLI paths are relative to the working directory; config paths to
    /// the config file's directory.
    pub fn prepare(
        config_file: Option<&Path>,
        args: &SourceArgs,
        json: bool,
        verbose: u8,
        color: Option<ColorWhen>,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine working directory")?;
        let loaded = config::discover(config_file, &cwd)?;
        let ui = UiContext::new(json, verbose, color, loaded.config.output.color);
        report_config_warnings(&ui, &loaded);

        let mut build = loaded.config.to_build_config(&loaded.root);
        if let Some(source) = &args.source {
            build.source_dir = cwd.join(source);
        }
        if !args.outputs.is_empty() {
            build.destinations = args.outputs.iter().map(|o| cwd.join(o)).collect();
        }

        Ok(Self { ui, build })
    }

    /// Event sink for `command`; `progress` selects the full console output
    pub fn event_sink(&self, command: &'static str, progress: bool) -> Arc<dyn BuildEventSink> {
        if self.ui.json {
            Arc::new(JsonEventSink::stdout(command))
        } else if progress {
            Arc::new(ConsoleEventSink::new(self.ui))
        } else {
            Arc::new(ConsoleEventSink::warnings_only(self.ui))
        }
    }
}

fn report_config_warnings(ui: &UiContext, loaded: &LoadedConfig) {
    let messages = loaded
        .warnings
        .iter()
        .map(ToString::to_string)
        .chain(loaded.env_warnings.iter().cloned());

    for message in messages {
        if ui.json {
            let event = serde_json::json!({
                "event": "warning",
                "kind": "config",
                "message": message,
            });
            println!("{}", event);
        } else {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                ColoredText::warning(message).render(ui.color)
            );
        }
    }
}
