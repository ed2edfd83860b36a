//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer ticks, and worker responses, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Mode Switching**: `SelectMode`, `NextMode`
//! - **Draft Editing**: `Char`, `Backspace`, `ClearField`, `AttachImage`,
//!   `ClearImage`
//! - **Navigation**: `Submit`, `GoBack`, `CloseFocus`
//! - **System**: `Tick`
//! - **Worker**: `WorkerResponse` with typed message variants

use crate::app::{Action, AppState};
use crate::app::modes::{InputMode, Screen};
use crate::app::state::PendingAnalysis;
use crate::domain::{AnalysisRequest, Result};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Tick cadence driving the spinner, score animation, and timeout check.
const TICK_INTERVAL_SECS: f64 = 0.1;

/// Events triggered by user input, timer expiry, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Activates a specific input surface.
    SelectMode(InputMode),
    /// Cycles to the next input surface in tab order.
    NextMode,
    /// Appends a character to the active mode's draft field.
    Char(char),
    /// Removes the last character from the active mode's draft field.
    Backspace,
    /// Clears the active mode's draft field.
    ClearField,
    /// Loads the typed image path into an attachment with a preview copy.
    AttachImage,
    /// Removes the current attachment, releasing its preview copy.
    ClearImage,
    /// Validates the active draft and submits it for analysis.
    Submit,
    /// Returns from the result screen to the input screen.
    ///
    /// Cancels any pending request. Drafts and the stored result survive.
    GoBack,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Timer expiry. Drives the spinner, the score count-up, and the
    /// pending-analysis timeout.
    Tick,
    /// Wraps a response from the background worker thread.
    ///
    /// Responses carry the request id they answer; anything not matching
    /// the current pending id is stale and gets discarded.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `false` when the
/// event left visible state untouched.
///
/// # Errors
///
/// Returns errors from state mutation methods. Validation and analysis
/// failures are surfaced through state, not through the error channel.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectMode(mode) => {
            state.select_mode(*mode);
            Ok((true, vec![]))
        }
        Event::NextMode => {
            state.select_mode(state.input_mode.next());
            Ok((true, vec![]))
        }
        Event::Char(ch) => {
            if state.screen != Screen::Input {
                return Ok((false, vec![]));
            }
            state.push_char(*ch);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.screen != Screen::Input {
                return Ok((false, vec![]));
            }
            state.pop_char();
            Ok((true, vec![]))
        }
        Event::ClearField => {
            if state.screen != Screen::Input {
                return Ok((false, vec![]));
            }
            state.clear_field();
            Ok((true, vec![]))
        }
        Event::AttachImage => {
            if state.draft.image_path.trim().is_empty() {
                state.inline_error = Some("Enter a file path to attach".to_string());
                return Ok((true, vec![]));
            }
            match state.attach_image() {
                Ok(()) => {
                    tracing::debug!(path = %state.draft.image_path, "image attached");
                    state.inline_error = None;
                }
                Err(error) => {
                    tracing::debug!(%error, "image attach rejected");
                    state.inline_error = Some(error.to_string());
                }
            }
            Ok((true, vec![]))
        }
        Event::ClearImage => {
            state.draft.clear_image();
            state.inline_error = None;
            Ok((true, vec![]))
        }
        Event::Submit => submit(state),
        Event::GoBack => {
            if state.pending.take().is_some() {
                tracing::debug!("pending analysis cancelled by navigation");
            }
            state.result_error = None;
            state.screen = Screen::Input;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Tick => handle_tick(state),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Validates the active draft and turns it into an analysis request.
///
/// Returns the request on success or the inline message to show on failure.
fn validate_draft(state: &AppState) -> std::result::Result<AnalysisRequest, String> {
    match state.input_mode {
        InputMode::Link => {
            let url = state.draft.url.trim();
            if url.is_empty() {
                return Err("Paste an article link first".to_string());
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Links must start with http:// or https://".to_string());
            }
            Ok(AnalysisRequest::Url(url.to_string()))
        }
        InputMode::Text => {
            let text = state.draft.text.trim();
            if text.is_empty() {
                return Err("Paste some article text first".to_string());
            }
            Ok(AnalysisRequest::Text(text.to_string()))
        }
        InputMode::Image => state.draft.image.as_ref().map_or_else(
            || Err("Attach an image first (Enter on a file path)".to_string()),
            |attachment| Ok(AnalysisRequest::Image(attachment.bytes.clone())),
        ),
    }
}

fn submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if let Some(pending) = &state.pending {
        tracing::debug!(request_id = pending.request_id, "submit rejected, analysis in flight");
        state.inline_error = Some("An analysis is already running".to_string());
        return Ok((true, vec![]));
    }

    let request = match validate_draft(state) {
        Ok(request) => request,
        Err(message) => {
            tracing::debug!(%message, "submit rejected by validation");
            state.inline_error = Some(message);
            // A failed submit never leaves the input screen.
            return Ok((true, vec![]));
        }
    };

    let request_id = state.allocate_request_id();
    tracing::info!(request_id, kind = request.kind(), "submitting for analysis");

    state.pending = Some(PendingAnalysis {
        request_id,
        submitted_at: chrono::Utc::now().timestamp(),
    });
    state.inline_error = None;
    state.result_error = None;
    state.spinner_frame = 0;
    state.screen = Screen::Result;

    Ok((
        true,
        vec![
            Action::PostToWorker(WorkerMessage::analyze(request_id, request)),
            Action::ScheduleTick {
                delay_secs: TICK_INTERVAL_SECS,
            },
        ],
    ))
}

fn handle_tick(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.screen != Screen::Result {
        return Ok((false, vec![]));
    }

    if let Some(pending) = state.pending {
        let elapsed = chrono::Utc::now().timestamp() - pending.submitted_at;
        if elapsed >= state.analysis_timeout_secs as i64 {
            tracing::warn!(
                request_id = pending.request_id,
                elapsed_secs = elapsed,
                "analysis timed out"
            );
            state.pending = None;
            state.result_error = Some(format!(
                "Analysis timed out after {} seconds",
                state.analysis_timeout_secs
            ));
            return Ok((true, vec![]));
        }
        state.step_spinner();
        return Ok((
            true,
            vec![Action::ScheduleTick {
                delay_secs: TICK_INTERVAL_SECS,
            }],
        ));
    }

    if state.result_error.is_none() && state.step_score_animation() {
        return Ok((
            true,
            vec![Action::ScheduleTick {
                delay_secs: TICK_INTERVAL_SECS,
            }],
        ));
    }

    // Animation may have taken its final step this tick.
    Ok((state.result_error.is_none() && state.result.is_some(), vec![]))
}

fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::AnalysisComplete { request_id, result } => {
            if state.pending.map(|p| p.request_id) != Some(*request_id) {
                tracing::debug!(request_id, "discarding stale analysis result");
                return Ok((false, vec![]));
            }
            tracing::info!(
                request_id,
                truth_score = result.truth_score,
                verdict = %result.verdict_category,
                "analysis complete"
            );
            state.pending = None;
            state.result_error = None;
            state.result = Some(result.clone());
            state.displayed_score = 0;
            Ok((
                true,
                vec![Action::ScheduleTick {
                    delay_secs: TICK_INTERVAL_SECS,
                }],
            ))
        }
        WorkerResponse::AnalysisFailed { request_id, message } => {
            if state.pending.map(|p| p.request_id) != Some(*request_id) {
                tracing::debug!(request_id, "discarding stale analysis failure");
                return Ok((false, vec![]));
            }
            tracing::warn!(request_id, %message, "analysis failed");
            state.pending = None;
            // The previous result survives a failure; only the error is shown.
            state.result_error = Some(message.clone());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalysisResult, Source, VisualAnalysis};
    use crate::ui::theme::Theme;

    fn test_state() -> AppState {
        AppState::new(Theme::default(), std::env::temp_dir(), 30)
    }

    fn sample_result(score: u8) -> AnalysisResult {
        AnalysisResult {
            truth_score: score,
            verdict_category: "Propaganda".to_string(),
            summary: "Emotionally charged language throughout.".to_string(),
            visual_analysis: VisualAnalysis {
                is_manipulated: false,
                description: String::new(),
            },
            logical_fallacies: vec![],
            sources: vec![Source {
                name: "Reuters".to_string(),
                url: "https://reuters.com".to_string(),
                is_supporting: false,
            }],
            analyzed_at: chrono::Utc::now().timestamp(),
        }
    }

    fn pending_id(state: &AppState) -> u64 {
        state.pending.as_ref().map(|p| p.request_id).unwrap()
    }

    #[test]
    fn link_submit_posts_request_and_shows_loading() {
        let mut state = test_state();
        for ch in "https://example.com/story".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }

        let (should_render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(should_render);
        assert_eq!(state.screen, Screen::Result);
        assert!(state.pending.is_some());
        assert!(state.result_error.is_none());
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::Analyze { .. })
        ));
        assert!(matches!(actions[1], Action::ScheduleTick { .. }));
    }

    #[test]
    fn completed_analysis_lands_and_starts_animation() {
        let mut state = test_state();
        for ch in "https://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();
        let request_id = pending_id(&state);

        let (should_render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::AnalysisComplete {
                request_id,
                result: sample_result(25),
            }),
        )
        .unwrap();

        assert!(should_render);
        assert!(state.pending.is_none());
        assert_eq!(state.result.as_ref().unwrap().truth_score, 25);
        assert_eq!(state.displayed_score, 0);
        assert!(matches!(actions[0], Action::ScheduleTick { .. }));
    }

    #[test]
    fn empty_link_is_rejected_inline() {
        let mut state = test_state();
        let (should_render, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(should_render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Input);
        assert!(state.inline_error.is_some());
        assert!(state.pending.is_none());
    }

    #[test]
    fn non_http_link_is_rejected_inline() {
        let mut state = test_state();
        for ch in "ftp://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(state.screen, Screen::Input);
        assert!(state.inline_error.as_ref().unwrap().contains("http"));
    }

    #[test]
    fn whitespace_text_is_rejected_inline() {
        let mut state = test_state();
        handle_event(&mut state, &Event::SelectMode(InputMode::Text)).unwrap();
        for ch in "   ".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(state.screen, Screen::Input);
        assert!(state.inline_error.is_some());
    }

    #[test]
    fn image_submit_without_attachment_is_rejected() {
        let mut state = test_state();
        handle_event(&mut state, &Event::SelectMode(InputMode::Image)).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(state.screen, Screen::Input);
        assert!(state.inline_error.is_some());
    }

    #[test]
    fn submit_is_rejected_while_pending() {
        let mut state = test_state();
        for ch in "https://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();
        let first_id = pending_id(&state);

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());
        assert_eq!(pending_id(&state), first_id);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = test_state();
        for ch in "https://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();
        handle_event(&mut state, &Event::GoBack).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();
        let live_id = pending_id(&state);

        // Response for the abandoned first request arrives late.
        let (should_render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::AnalysisComplete {
                request_id: live_id - 1,
                result: sample_result(90),
            }),
        )
        .unwrap();

        assert!(!should_render);
        assert!(state.result.is_none());
        assert_eq!(pending_id(&state), live_id);
    }

    #[test]
    fn failure_preserves_previous_result() {
        let mut state = test_state();
        state.result = Some(sample_result(80));
        for ch in "https://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();
        let request_id = pending_id(&state);

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::AnalysisFailed {
                request_id,
                message: "backend unavailable".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(state.result_error.as_deref(), Some("backend unavailable"));
        assert_eq!(state.result.as_ref().unwrap().truth_score, 80);
        assert!(state.pending.is_none());
    }

    #[test]
    fn new_result_overwrites_previous_one() {
        let mut state = test_state();
        state.result = Some(sample_result(80));
        for ch in "https://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();
        let request_id = pending_id(&state);

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::AnalysisComplete {
                request_id,
                result: sample_result(25),
            }),
        )
        .unwrap();

        assert_eq!(state.result.as_ref().unwrap().truth_score, 25);
    }

    #[test]
    fn go_back_cancels_pending_and_keeps_draft() {
        let mut state = test_state();
        let stored = sample_result(60);
        state.result = Some(stored.clone());
        for ch in "https://example.com".chars() {
            handle_event(&mut state, &Event::Char(ch)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();
        handle_event(&mut state, &Event::GoBack).unwrap();

        assert_eq!(state.screen, Screen::Input);
        assert!(state.pending.is_none());
        assert_eq!(state.draft.url, "https://example.com");
        // The stored result is untouched by cancellation.
        assert_eq!(state.result, Some(stored));
    }

    #[test]
    fn tick_times_out_overdue_analysis() {
        let mut state = test_state();
        state.screen = Screen::Result;
        state.pending = Some(PendingAnalysis {
            request_id: 1,
            submitted_at: chrono::Utc::now().timestamp() - 31,
        });

        let (should_render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(should_render);
        assert!(actions.is_empty());
        assert!(state.pending.is_none());
        assert!(state.result_error.as_ref().unwrap().contains("timed out"));
    }

    #[test]
    fn tick_reschedules_while_pending() {
        let mut state = test_state();
        state.screen = Screen::Result;
        state.pending = Some(PendingAnalysis {
            request_id: 1,
            submitted_at: chrono::Utc::now().timestamp(),
        });

        let (_, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(matches!(actions[0], Action::ScheduleTick { .. }));
        assert_eq!(state.spinner_frame, 1);
    }

    #[test]
    fn tick_stops_once_animation_reaches_score() {
        let mut state = test_state();
        state.screen = Screen::Result;
        state.result = Some(sample_result(8));
        state.displayed_score = 0;

        // Two steps of four points reach the target of eight.
        let (_, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.displayed_score, 8);
    }

    #[test]
    fn mode_cycle_event_wraps_and_clears_inline_error() {
        let mut state = test_state();
        state.inline_error = Some("old".to_string());
        handle_event(&mut state, &Event::NextMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Text);
        assert!(state.inline_error.is_none());
    }
}
