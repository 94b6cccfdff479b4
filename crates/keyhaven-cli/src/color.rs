//! Terminal color selection.

use clap::ValueEnum;
use color_eyre::{
    config::{HookBuilder, Theme},
    eyre::Result,
};

/// When to use colored output.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Color {
    /// Color when stdout is a terminal that supports it.
    Auto,
    /// Always color.
    Yes,
    /// Never color.
    No,
}

impl Color {
    /// Whether colored output should be produced for this setting.
    pub fn is_enabled(self) -> bool {
        match self {
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
            Color::Yes => true,
            Color::No => false,
        }
    }
}

/// Install the `color_eyre` error/panic hooks, honoring the color setting.
pub fn install_color_eyre(color: Color) -> Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // Same hooks, colorless theme.
        HookBuilder::default().theme(Theme::new()).install()
    }
}
