//! Configuration options for the renderer.
//!
//! The output envelope is fixed; the one knob is [`DisplayMode`], which
//! selects whether the body is wrapped in `<mstyle displaystyle="true">`.
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Configuration for the `mathml` renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// See [`DisplayMode`].
    pub display_mode: DisplayMode,
}

impl RenderConfig {
    pub fn with_display_mode(display_mode: DisplayMode) -> Self {
        Self { display_mode }
    }
}

/// How the math is displayed.
///
/// In `Block` mode the body is wrapped in `<mstyle displaystyle="true">`,
/// so elements such as `\int` and `\sum` render at display size with their
/// limits above and below. `Inline` omits the wrapper and leaves the choice
/// to the embedding document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// The equation is sized to sit within a line of text.
    ///
    /// __This is the default value.__
    #[default]
    Inline,
    /// The equation is rendered at display size (`displaystyle` in LaTeX).
    Block,
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Inline => f.write_str("inline"),
            DisplayMode::Block => f.write_str("block"),
        }
    }
}

/// Error returned when parsing a [`DisplayMode`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized display mode `{0}`, expected `inline` or `block`")]
pub struct DisplayModeError(String);

impl FromStr for DisplayMode {
    type Err = DisplayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(DisplayMode::Inline),
            "block" => Ok(DisplayMode::Block),
            other => Err(DisplayModeError(other.to_owned())),
        }
    }
}
