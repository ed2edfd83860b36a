//! Truth Lens: a Zellij plugin for verifying news authenticity.
//!
//! Truth Lens is a terminal multiplexer plugin that provides:
//! - Three ways to submit suspect content: an article link, pasted text, or
//!   a screenshot path
//! - A truth-score verdict with an animated gauge and tiered coloring
//! - Visual manipulation warnings, a logical fallacy breakdown, and a
//!   cross-referenced source list
//! - Asynchronous analysis via Zellij worker threads, with stale responses
//!   discarded by request id

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Analysis      │   │ Worker Layer  │
//! │ (ui/)         │   │ (analysis/)   │   │ (worker/)     │
//! │ - Rendering   │   │ - Analyzer    │   │ - Async run   │
//! │ - Theming     │   │   trait       │   │ - IPC bridge  │
//! │ - Components  │   │ - Mock backend│   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Drafts and results (domain/draft, domain/analysis)│
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating file log                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (drafts, analysis results, errors)
//! - [`analysis`]: Analyzer capability trait and the mock backend
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker running analysis off the event loop
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/truthlens.wasm" {
//!         theme "catppuccin-mocha"
//!         analysis_timeout_secs "30"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme and cache directory
//!    - Subscribe to Zellij events
//!
//! 2. **Submission**:
//!    - Validate the active draft, allocate a request id
//!    - Post an `Analyze` message to the worker, switch to the result screen
//!
//! 3. **Worker Processing**:
//!    - Run the analyzer against the request
//!    - Send `AnalysisComplete` or `AnalysisFailed` back to the plugin
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, tabs/gauge/cards, footer)
//!
//! # Key Design Decisions
//!
//! ## Request-Id Cancellation
//!
//! There is no way to abort a worker thread mid-call, so cancellation is
//! modeled at the receiver: each submission carries a fresh id, and any
//! response whose id does not match the live pending request is discarded.
//! Navigating back simply drops the pending id.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Card visibility (manipulation, fallacies) decided in one place
//! - Components only draw what they are handed
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod analysis;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen};
pub use domain::{AnalysisRequest, AnalysisResult, Result, ScoreTier, TruthLensError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Pending-analysis timeout applied when the configuration omits one.
const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 30;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/truthlens.wasm" {
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     analysis_timeout_secs "30"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Seconds a submitted analysis may stay pending before it is failed
    /// locally with a retryable error. Default: 30
    pub analysis_timeout_secs: u64,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            analysis_timeout_secs: DEFAULT_ANALYSIS_TIMEOUT_SECS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `analysis_timeout_secs`: String → `u64` (falls back to 30 on parse
    ///   error)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use truthlens::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("analysis_timeout_secs".to_string(), "10".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.analysis_timeout_secs, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let analysis_timeout_secs = config
            .get("analysis_timeout_secs")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_ANALYSIS_TIMEOUT_SECS);

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            analysis_timeout_secs,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - The preview cache directory
/// - The configured pending-analysis timeout
///
/// # Example
///
/// ```rust
/// use truthlens::{Config, initialize};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing truthlens plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(
        theme,
        infrastructure::get_cache_dir(),
        config.analysis_timeout_secs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_on_empty_map() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.theme_name.is_none());
        assert_eq!(config.analysis_timeout_secs, 30);
    }

    #[test]
    fn malformed_timeout_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("analysis_timeout_secs".to_string(), "soon".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.analysis_timeout_secs, 30);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
