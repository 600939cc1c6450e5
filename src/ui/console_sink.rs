//! Console Event Sink
//!
//! Renders build events as human-readable lines. Warnings and errors go to
//! stderr, progress to stdout.

use std::path::Path;

use rulemerge::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub struct ConsoleEventSink {
    ui: UiContext,
    progress: bool,
}

impl ConsoleEventSink {
    /// Sink that shows progress, warnings and the final summary
    pub fn new(ui: UiContext) -> Self {
        Self { ui, progress: true }
    }

    /// Sink that only shows warnings and errors
    pub fn warnings_only(ui: UiContext) -> Self {
        Self {
            ui,
            progress: false,
        }
    }

    pub(crate) fn render(&self, event: &BuildEvent) -> Option<(Stream, String)> {
        let color = self.ui.color;
        let unicode = self.ui.unicode;
        let icon = |i: Icon| i.colored(color, unicode);

        let warning = |message: String| {
            Some((
                Stream::Stderr,
                format!("{} {}", icon(Icon::Warning), ColoredText::warning(message).render(color)),
            ))
        };
        let error = |message: String| {
            Some((
                Stream::Stderr,
                format!("{} {}", icon(Icon::Error), ColoredText::error(message).render(color)),
            ))
        };

        match event {
            BuildEvent::SourceMissing { path: dir } => warning(format!(
                "Source directory {} not found; treating it as empty",
                show(dir)
            )),
            BuildEvent::NoFragments {
                source,
                primary: Some(primary),
            } => warning(format!(
                "No rule fragments in {}; {} gets an empty document",
                show(source),
                show(primary)
            )),
            BuildEvent::NoFragments {
                source,
                primary: None,
            } => warning(format!("No rule fragments in {}", show(source))),
            BuildEvent::BaseMissing { base } => {
                warning(format!("Base fragment '{}' not found", base))
            }
            BuildEvent::UnlistedFragments { names } => warning(format!(
                "{} fragment(s) not in the priority list, appended alphabetically: {}",
                names.len(),
                names.join(", ")
            )),
            BuildEvent::FragmentFailed { path: p, error: e, .. } => {
                error(format!("Failed to read {}: {}", show(p), e))
            }
            BuildEvent::DestinationFailed { path: p, error: e } => {
                error(format!("Failed to write {}: {}", show(p), e))
            }
            _ if !self.progress => None,

            BuildEvent::Started { source, .. } => Some((
                Stream::Stdout,
                format!("{} Building rules from {}", icon(Icon::Progress), show(source)),
            )),
            BuildEvent::OrderResolved { order } => Some((
                Stream::Stdout,
                format!(
                    "  {} {}",
                    ColoredText::dim("order:").render(color),
                    order.join(", ")
                ),
            )),
            BuildEvent::DirectoryCreated { path: p } => {
                self.detail(format!("created directory {}", show(p)))
            }
            BuildEvent::FragmentRead { index, path: p } => {
                self.detail(format!("read #{} {}", index + 1, show(p)))
            }
            BuildEvent::DestinationWriting { path: p } => {
                if self.ui.verbose > 1 {
                    self.detail(format!("writing {}", show(p)))
                } else {
                    None
                }
            }
            BuildEvent::DestinationWritten { path: p, bytes } => {
                self.detail(format!("wrote {} ({} bytes)", show(p), bytes))
            }
            BuildEvent::Completed {
                fragment_count,
                destinations,
                hash,
                dry_run,
            } => {
                let targets = destinations
                    .iter()
                    .map(|d| show(d))
                    .collect::<Vec<_>>()
                    .join(", ");
                let verb = if *dry_run { "Would write" } else { "Wrote" };
                Some((
                    Stream::Stdout,
                    format!(
                        "{} {} {} fragment(s) to {} {}",
                        icon(Icon::Success),
                        ColoredText::success(verb).bold().render(color),
                        fragment_count,
                        targets,
                        ColoredText::dim(format!("[{}]", short_hash(hash))).render(color)
                    ),
                ))
            }
            _ => None,
        }
    }

    fn detail(&self, message: String) -> Option<(Stream, String)> {
        Some((
            Stream::Stdout,
            format!(
                "  {} {}",
                Icon::Arrow.colored(self.ui.color, self.ui.unicode),
                message
            ),
        ))
    }
}

fn show(path: &Path) -> String {
    path.display().to_string()
}

fn short_hash(hash: &str) -> &str {
    let hex = hash.strip_prefix("sha256:").unwrap_or(hash);
    hex.get(..12).unwrap_or(hex)
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match self.render(&event) {
            Some((Stream::Stdout, line)) => println!("{}", line),
            Some((Stream::Stderr, line)) => eprintln!("{}", line),
            None => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.progress && self.ui.verbose > 0
    }
}
