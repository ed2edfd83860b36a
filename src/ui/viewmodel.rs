//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like tab activation, the gauge
//! score, and which result cards to show.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.
//! Which screen to draw, which result body to show, and whether the
//! manipulation and fallacy cards appear are all decided here, never in the
//! component renderers.

use crate::domain::ScoreTier;

/// Complete UI view model for rendering, one variant per screen.
#[derive(Debug, Clone)]
pub enum UiViewModel {
    /// Input collector screen.
    Input(InputViewModel),
    /// Result presenter screen.
    Result(ResultViewModel),
}

/// View model for the input collector screen.
#[derive(Debug, Clone)]
pub struct InputViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Mode tabs in display order, exactly one active.
    pub tabs: Vec<TabInfo>,

    /// Body for the active input surface.
    pub body: InputBody,

    /// Validation message shown under the input field, if any.
    pub inline_error: Option<String>,

    /// Footer information (keybindings for the active mode).
    pub footer: FooterInfo,
}

/// One mode tab in the input screen's tab bar.
#[derive(Debug, Clone)]
pub struct TabInfo {
    /// Tab label ("Link", "Text", "Image").
    pub label: &'static str,

    /// Whether this tab's surface is the active one.
    pub is_active: bool,
}

/// Display content for the active input surface.
#[derive(Debug, Clone)]
pub enum InputBody {
    /// URL entry field.
    Link {
        /// Draft URL text.
        url: String,
    },
    /// Multi-line article text field.
    Text {
        /// Draft article text.
        text: String,
    },
    /// Image path entry plus optional loaded attachment.
    Image {
        /// Path typed so far, attached or not.
        typed_path: String,
        /// Loaded attachment details, once Enter validated the path.
        attachment: Option<AttachmentInfo>,
    },
}

/// Display details for a loaded image attachment.
#[derive(Debug, Clone)]
pub struct AttachmentInfo {
    /// File name of the attached image (no directory).
    pub file_name: String,

    /// Detected format label ("PNG", "JPEG", "GIF", "WebP").
    pub format_label: &'static str,

    /// Size of the attached image in bytes.
    pub size_bytes: usize,

    /// Location of the preview copy in the cache directory, if it exists.
    pub preview_path: Option<String>,
}

/// View model for the result presenter screen.
#[derive(Debug, Clone)]
pub struct ResultViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Loading, failure, or the ready result card.
    pub body: ResultBody,

    /// Footer information (keybindings for the current body).
    pub footer: FooterInfo,
}

/// The three mutually exclusive result screen bodies.
///
/// Precedence is decided during view model computation: error wins over
/// loading, loading wins over a stored result.
#[derive(Debug, Clone)]
pub enum ResultBody {
    /// Analysis in flight (or no result exists yet).
    Loading {
        /// Current spinner glyph.
        spinner: char,
    },
    /// Analysis failed or timed out.
    Error {
        /// Failure message to display.
        message: String,
    },
    /// Completed analysis ready to display.
    Ready(ResultCard),
}

/// Display content for a completed analysis.
#[derive(Debug, Clone)]
pub struct ResultCard {
    /// Score currently shown by the gauge (count-up animation).
    pub displayed_score: u8,

    /// Tier of the real score, driving gauge and verdict colors.
    pub tier: ScoreTier,

    /// Verdict category text (e.g. "Propaganda").
    pub verdict: String,

    /// One-paragraph analysis summary.
    pub summary: String,

    /// Human-readable age of the analysis (e.g. "3m ago").
    pub analyzed_ago: String,

    /// Visual manipulation warning, present only when flagged.
    pub manipulation: Option<ManipulationInfo>,

    /// Detected fallacies in detection order; empty hides the section.
    pub fallacies: Vec<FallacyInfo>,

    /// Cross-referenced sources in analysis order; always rendered.
    pub sources: Vec<SourceInfo>,
}

/// Visual manipulation warning card content.
#[derive(Debug, Clone)]
pub struct ManipulationInfo {
    /// What the visual analysis found (e.g. "Mismatched font sizes").
    pub description: String,
}

/// One detected logical fallacy.
#[derive(Debug, Clone)]
pub struct FallacyInfo {
    /// Fallacy name (e.g. "Ad Hominem").
    pub kind: String,

    /// The offending passage, quoted verbatim.
    pub quoted_text: String,

    /// Short explanation of why the passage qualifies.
    pub explanation: String,
}

/// One cross-referenced source.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Outlet name (e.g. "Reuters").
    pub name: String,

    /// Source URL.
    pub url: String,

    /// Whether the source supports the analyzed claim.
    pub is_supporting: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "b: back  q: quit").
    pub keybindings: String,
}
