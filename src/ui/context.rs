use rulemerge::config::ColorMode;

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// How output should look for this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config_color: ColorMode,
    ) -> Self {
        Self::from_caps(json, verbose, cli_color, config_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config_color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config_color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Context used before any config is loaded
    pub fn bootstrap(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::new(json, verbose, cli_color, ColorMode::Auto)
    }
}
