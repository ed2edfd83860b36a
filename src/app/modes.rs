//! Input mode and screen selector types for the application.
//!
//! This module defines the two selector enums that drive the top-level UI:
//! which screen is shown and which input surface is active on the input
//! screen.
//!
//! # State Machine
//!
//! The application loops between two screens:
//! - **Input**: draft entry with one of three input surfaces active
//! - **Result**: the last analysis (loading, error, or ready)
//!
//! `Input --submit--> Result` and `Result --back--> Input`; there is no
//! terminal state. Switching input modes never clears the other modes'
//! drafts.

/// The active input surface on the input screen.
///
/// Determines which draft field receives keystrokes, which validation runs
/// on submit, and which tab is highlighted. Exactly one mode is active at a
/// time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Paste an article URL.
    #[default]
    Link,

    /// Paste raw article text.
    Text,

    /// Attach a screenshot or photo by path.
    Image,
}

impl InputMode {
    /// Returns the next mode in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Link => Self::Text,
            Self::Text => Self::Image,
            Self::Image => Self::Link,
        }
    }

    /// Tab label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Text => "Text",
            Self::Image => "Image",
        }
    }
}

/// The top-level screen currently rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Draft entry screen with the mode tabs.
    #[default]
    Input,

    /// Analysis result screen (loading, error, or ready).
    Result,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_wraps() {
        assert_eq!(InputMode::Link.next(), InputMode::Text);
        assert_eq!(InputMode::Text.next(), InputMode::Image);
        assert_eq!(InputMode::Image.next(), InputMode::Link);
    }

    #[test]
    fn defaults_match_initial_state() {
        assert_eq!(InputMode::default(), InputMode::Link);
        assert_eq!(Screen::default(), Screen::Input);
    }
}
