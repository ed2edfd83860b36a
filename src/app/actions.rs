//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! hiding the pane, communicating with the background worker, or arming the
//! animation timer.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence via the action processor.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful operations like worker communication and timer scheduling.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g.,
    /// pressing Esc on an empty input screen or 'q' on the result screen).
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Analysis runs off the main event loop; results come back as
    /// [`crate::worker::WorkerResponse`] payloads via custom messages.
    PostToWorker(WorkerMessage),

    /// Arms the plugin timer to fire after the given delay.
    ///
    /// Ticks drive the score count-up animation, the loading spinner, and
    /// the pending-analysis timeout check.
    ScheduleTick {
        /// Delay in seconds before the timer fires.
        delay_secs: f64,
    },
}
