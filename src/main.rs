//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Truth Lens
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle, and registers the background
//! worker that runs analyses.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for background processing:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ TruthLensWorker  │   │  ← Background analysis
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, `Timer` events
//! 3. **Update**: Handle events, delegate to library layer
//! 4. **Render**: Call library render function
//!
//! # Worker Communication
//!
//! Messages between plugin and worker use JSON serialization:
//!
//! - Plugin → Worker: [`WorkerMessage`] (`Analyze` with a request id)
//! - Worker → Plugin: [`WorkerResponse`] (`AnalysisComplete`, `AnalysisFailed`)
//!
//! # Keybindings
//!
//! On the input screen:
//! - `Tab`: Cycle input mode (Link → Text → Image)
//! - `Enter`: Submit (Link), newline (Text), attach then submit (Image)
//! - `Alt+Enter`: Submit from any mode
//! - `Ctrl+u`: Clear the active field
//! - `Ctrl+x`: Remove the image attachment
//! - `Esc`: Close the plugin pane
//!
//! On the result screen:
//! - `b`/`Esc`/`Backspace`: Back to the input screen
//! - `r`: Retry after a failure
//! - `q`: Close the plugin pane

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use truthlens::worker::{TruthLensWorker, WorkerMessage, WorkerResponse};
use truthlens::{handle_event, Action, Config, Event, InputMode, Screen};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(TruthLensWorker, truthlens_worker, TRUTHLENS_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication.
struct State {
    /// Core application state from library layer.
    app: truthlens::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: truthlens::initialize(&default_config),
            worker_name: "truthlens".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing and application state, and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        truthlens::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = truthlens::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("subscribing to events");
        subscribe(&[EventType::Key, EventType::CustomMessage, EventType::Timer]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_) => Event::Tick,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        truthlens::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Dispatch depends on the active screen: the input screen feeds most
    /// keys into the draft, while the result screen only reacts to a handful
    /// of navigation keys.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.screen {
            Screen::Input => self.map_input_screen_key(key),
            Screen::Result => Self::map_result_screen_key(key),
        }
    }

    fn map_input_screen_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('u') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::ClearField);
        }
        if key.bare_key == BareKey::Char('x') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::ClearImage);
        }
        if key.bare_key == BareKey::Enter && key.has_modifiers(&[KeyModifier::Alt]) {
            return Some(Event::Submit);
        }

        Some(match key.bare_key {
            BareKey::Tab => Event::NextMode,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Enter => match self.app.input_mode {
                InputMode::Link => Event::Submit,
                // Text entry is multi-line; Alt+Enter submits.
                InputMode::Text => Event::Char('\n'),
                // First Enter attaches the typed path, the next one submits.
                InputMode::Image => {
                    if self.app.draft.image.is_some() {
                        Event::Submit
                    } else {
                        Event::AttachImage
                    }
                }
            },
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_result_screen_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::GoBack,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('r') => Event::Submit,
            // Share and report affordances are present but not wired yet.
            _ => return None,
        })
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Logs serialization errors but does not propagate them.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `PostToWorker`: Send IPC message to worker thread
    /// - `ScheduleTick`: Arm the plugin timer
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!("posting message to worker");
                self.post_worker_message(message);
            }
            Action::ScheduleTick { delay_secs } => {
                set_timeout(*delay_secs);
            }
        }
    }
}
