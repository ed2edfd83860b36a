//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with draft editing helpers and UI view model generation. It
//! serves as the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the input draft, the last stored analysis
//! result) from derived presentation state (displayed score, spinner frame)
//! to keep transitions simple. View models are computed on-demand from state
//! snapshots and contain no logic of their own.
//!
//! # State Components
//!
//! - **Screen**: input collector vs. result presenter
//! - **Input Mode**: which of the three input surfaces is active
//! - **Draft**: per-mode entry buffers, retained across mode switches
//! - **Result**: the last completed analysis, if any
//! - **Pending**: the in-flight analysis request, if any
//! - **Result Error**: failure message shown instead of a result card
//!
//! # View Model Computation
//!
//! `compute_viewmodel` projects state into a renderable representation. On
//! the result screen the projection follows a fixed precedence: a failure
//! message wins over everything, then the loading view while a request is
//! pending (or no result exists yet), then the ready result card.

use super::modes::{InputMode, Screen};
use crate::domain::{AnalysisResult, InputDraft, Result, ScoreTier};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AttachmentInfo, FallacyInfo, FooterInfo, HeaderInfo, InputBody, InputViewModel,
    ManipulationInfo, ResultBody, ResultCard, ResultViewModel, SourceInfo, TabInfo, UiViewModel,
};
use std::path::PathBuf;

/// Spinner glyphs cycled by timer ticks while an analysis is pending.
pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// How many score points the count-up animation advances per tick.
pub const SCORE_ANIMATION_STEP: u8 = 4;

/// A submitted analysis request awaiting a worker response.
///
/// The request id is matched against incoming worker responses; responses
/// carrying any other id are stale and get discarded. Leaving the result
/// screen clears the pending entry, which is all cancellation amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnalysis {
    /// Id assigned at submit time, echoed back by the worker.
    pub request_id: u64,

    /// Unix timestamp of submission, for the timeout check on ticks.
    pub submitted_at: i64,
}

/// Central application state container.
///
/// Holds all transient UI state including the input draft, the last analysis
/// result, the pending request, and presentation state for animations.
/// Mutated by the event handler in response to user input and system events.
#[derive(Debug)]
pub struct AppState {
    /// Screen currently rendered.
    pub screen: Screen,

    /// Active input surface on the input screen.
    ///
    /// Switching modes changes which draft field receives keystrokes; it
    /// never clears the other modes' drafts.
    pub input_mode: InputMode,

    /// Per-mode entry buffers.
    pub draft: InputDraft,

    /// Last completed analysis, kept until the next one overwrites it.
    ///
    /// A failed submission leaves this untouched; only a successful
    /// response replaces it.
    pub result: Option<AnalysisResult>,

    /// In-flight request, if any. `None` once a response lands or the user
    /// navigates back.
    pub pending: Option<PendingAnalysis>,

    /// Failure message shown on the result screen instead of a card.
    ///
    /// Cleared on resubmit and on navigating back to the input screen.
    pub result_error: Option<String>,

    /// Validation message shown inline on the input screen.
    ///
    /// Cleared by the next draft edit or mode switch.
    pub inline_error: Option<String>,

    /// Score currently shown by the gauge.
    ///
    /// Counts up from zero toward `result.truth_score` on timer ticks.
    /// Purely cosmetic; verdict and tier always come from the stored result.
    pub displayed_score: u8,

    /// Index into [`SPINNER_FRAMES`], advanced on ticks while pending.
    pub spinner_frame: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Directory where image preview copies are written.
    pub cache_dir: PathBuf,

    /// Seconds a pending request may wait before it is failed locally.
    pub analysis_timeout_secs: u64,

    /// Next id to hand out at submit time. Monotonic within a plugin run.
    next_request_id: u64,
}

impl AppState {
    /// Creates a new application state on the input screen with empty drafts.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    /// * `cache_dir` - Directory for image preview copies
    /// * `analysis_timeout_secs` - Pending-request timeout in seconds
    #[must_use]
    pub fn new(theme: Theme, cache_dir: PathBuf, analysis_timeout_secs: u64) -> Self {
        Self {
            screen: Screen::Input,
            input_mode: InputMode::Link,
            draft: InputDraft::default(),
            result: None,
            pending: None,
            result_error: None,
            inline_error: None,
            displayed_score: 0,
            spinner_frame: 0,
            theme,
            cache_dir,
            analysis_timeout_secs,
            next_request_id: 1,
        }
    }

    /// Switches the active input surface, keeping all drafts intact.
    ///
    /// Any inline validation message belongs to the previous mode and is
    /// dropped.
    pub fn select_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.inline_error = None;
    }

    /// Appends a character to the active mode's draft field.
    pub fn push_char(&mut self, ch: char) {
        match self.input_mode {
            InputMode::Link => self.draft.url.push(ch),
            InputMode::Text => self.draft.text.push(ch),
            InputMode::Image => self.draft.image_path.push(ch),
        }
        self.inline_error = None;
    }

    /// Removes the last character from the active mode's draft field.
    pub fn pop_char(&mut self) {
        match self.input_mode {
            InputMode::Link => {
                self.draft.url.pop();
            }
            InputMode::Text => {
                self.draft.text.pop();
            }
            InputMode::Image => {
                self.draft.image_path.pop();
            }
        }
        self.inline_error = None;
    }

    /// Clears the active mode's draft field.
    ///
    /// In image mode this clears the typed path only; a loaded attachment is
    /// removed separately via [`InputDraft::clear_image`].
    pub fn clear_field(&mut self) {
        match self.input_mode {
            InputMode::Link => self.draft.url.clear(),
            InputMode::Text => self.draft.text.clear(),
            InputMode::Image => self.draft.image_path.clear(),
        }
        self.inline_error = None;
    }

    /// Loads the typed image path into an attachment with a preview copy.
    ///
    /// The typed path is tilde-expanded for the plugin sandbox first.
    /// Replaces any previous attachment, releasing its preview.
    ///
    /// # Errors
    ///
    /// Returns a resource error when the file cannot be read or its bytes
    /// are not a recognized image format.
    pub fn attach_image(&mut self) -> Result<()> {
        let cache_dir = self.cache_dir.clone();
        let path = crate::infrastructure::expand_tilde(self.draft.image_path.trim());
        self.draft.attach_image_at(&path, &cache_dir)
    }

    /// Hands out a fresh request id for a submission.
    pub fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Advances the score count-up animation by one tick.
    ///
    /// Returns `true` while the displayed score is still below the stored
    /// result's score, i.e. while further ticks are wanted.
    pub fn step_score_animation(&mut self) -> bool {
        let Some(target) = self.result.as_ref().map(|r| r.truth_score) else {
            return false;
        };
        if self.displayed_score >= target {
            return false;
        }
        self.displayed_score = self
            .displayed_score
            .saturating_add(SCORE_ANIMATION_STEP)
            .min(target);
        self.displayed_score < target
    }

    /// Advances the loading spinner by one frame.
    pub fn step_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Computes a renderable UI view model from current state.
    ///
    /// Pure projection; never mutates state. The `cols` parameter drives
    /// text wrapping widths in the renderer, so it is threaded through the
    /// view model untouched here.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        match self.screen {
            Screen::Input => UiViewModel::Input(self.compute_input_viewmodel()),
            Screen::Result => UiViewModel::Result(self.compute_result_viewmodel()),
        }
    }

    fn compute_input_viewmodel(&self) -> InputViewModel {
        let tabs = [InputMode::Link, InputMode::Text, InputMode::Image]
            .iter()
            .map(|mode| TabInfo {
                label: mode.label(),
                is_active: *mode == self.input_mode,
            })
            .collect();

        let body = match self.input_mode {
            InputMode::Link => InputBody::Link {
                url: self.draft.url.clone(),
            },
            InputMode::Text => InputBody::Text {
                text: self.draft.text.clone(),
            },
            InputMode::Image => InputBody::Image {
                typed_path: self.draft.image_path.clone(),
                attachment: self.draft.image.as_ref().map(|attachment| AttachmentInfo {
                    file_name: std::path::Path::new(&attachment.source_path)
                        .file_name()
                        .map_or_else(String::new, |name| name.to_string_lossy().into_owned()),
                    format_label: attachment.format.label(),
                    size_bytes: attachment.bytes.len(),
                    preview_path: attachment
                        .preview
                        .path()
                        .map(|p| crate::infrastructure::strip_host_prefix(&p.display().to_string())),
                }),
            },
        };

        InputViewModel {
            header: HeaderInfo {
                title: " Truth Lens ".to_string(),
            },
            tabs,
            body,
            inline_error: self.inline_error.clone(),
            footer: FooterInfo {
                keybindings: Self::input_footer_keybindings(self.input_mode).to_string(),
            },
        }
    }

    fn compute_result_viewmodel(&self) -> ResultViewModel {
        let body = if let Some(message) = &self.result_error {
            ResultBody::Error {
                message: message.clone(),
            }
        } else if self.pending.is_some() || self.result.is_none() {
            ResultBody::Loading {
                spinner: SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
            }
        } else if let Some(result) = &self.result {
            ResultBody::Ready(Self::compute_result_card(result, self.displayed_score))
        } else {
            // Unreachable: the previous branch covers `result.is_none()`.
            ResultBody::Loading {
                spinner: SPINNER_FRAMES[0],
            }
        };

        let keybindings = match body {
            ResultBody::Error { .. } => "r: retry  b: back  q: quit",
            ResultBody::Loading { .. } => "Esc/b: back  q: quit",
            ResultBody::Ready(_) => "b: back  s: share  !: report  q: quit",
        };

        ResultViewModel {
            header: HeaderInfo {
                title: " Truth Lens ".to_string(),
            },
            body,
            footer: FooterInfo {
                keybindings: keybindings.to_string(),
            },
        }
    }

    /// Projects a stored analysis into the ready-state result card.
    ///
    /// The manipulation card appears only when visual analysis flagged the
    /// image. The fallacy section appears only when at least one fallacy was
    /// found, in detection order. The source list always appears, in the
    /// order the analysis returned it.
    fn compute_result_card(result: &AnalysisResult, displayed_score: u8) -> ResultCard {
        let manipulation = if result.visual_analysis.is_manipulated {
            Some(ManipulationInfo {
                description: result.visual_analysis.description.clone(),
            })
        } else {
            None
        };

        let fallacies = result
            .logical_fallacies
            .iter()
            .map(|fallacy| FallacyInfo {
                kind: fallacy.kind.clone(),
                quoted_text: fallacy.quoted_text.clone(),
                explanation: fallacy.explanation.clone(),
            })
            .collect();

        let sources = result
            .sources
            .iter()
            .map(|source| SourceInfo {
                name: source.name.clone(),
                url: source.url.clone(),
                is_supporting: source.is_supporting,
            })
            .collect();

        ResultCard {
            displayed_score,
            tier: ScoreTier::from_score(result.truth_score),
            verdict: result.verdict_category.clone(),
            summary: result.summary.clone(),
            analyzed_ago: result.time_ago(),
            manipulation,
            fallacies,
            sources,
        }
    }

    const fn input_footer_keybindings(mode: InputMode) -> &'static str {
        match mode {
            InputMode::Link => "Tab: mode  Enter: verify  Ctrl+u: clear  Esc: quit",
            InputMode::Text => "Tab: mode  Alt+Enter: verify  Ctrl+u: clear  Esc: quit",
            InputMode::Image => {
                "Tab: mode  Enter: attach/verify  Ctrl+x: remove  Ctrl+u: clear  Esc: quit"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogicalFallacy, Source, VisualAnalysis};

    fn test_state() -> AppState {
        AppState::new(Theme::default(), std::env::temp_dir(), 30)
    }

    fn sample_result(is_manipulated: bool, fallacies: Vec<LogicalFallacy>) -> AnalysisResult {
        AnalysisResult {
            truth_score: 25,
            verdict_category: "Propaganda".to_string(),
            summary: "Emotionally charged language throughout.".to_string(),
            visual_analysis: VisualAnalysis {
                is_manipulated,
                description: "Mismatched font sizes.".to_string(),
            },
            logical_fallacies: fallacies,
            sources: vec![
                Source {
                    name: "FactCheck.org".to_string(),
                    url: "https://factcheck.org".to_string(),
                    is_supporting: false,
                },
                Source {
                    name: "Reuters".to_string(),
                    url: "https://reuters.com".to_string(),
                    is_supporting: false,
                },
            ],
            analyzed_at: chrono::Utc::now().timestamp(),
        }
    }

    #[test]
    fn mode_switch_preserves_other_drafts() {
        let mut state = test_state();
        state.push_char('h');
        state.select_mode(InputMode::Text);
        state.push_char('x');
        state.select_mode(InputMode::Link);

        assert_eq!(state.draft.url, "h");
        assert_eq!(state.draft.text, "x");
    }

    #[test]
    fn draft_edits_target_active_mode_only() {
        let mut state = test_state();
        state.select_mode(InputMode::Image);
        for ch in "/tmp/a.png".chars() {
            state.push_char(ch);
        }
        state.select_mode(InputMode::Link);
        state.push_char('z');
        state.pop_char();

        assert_eq!(state.draft.image_path, "/tmp/a.png");
        assert!(state.draft.url.is_empty());
    }

    #[test]
    fn clear_field_only_touches_active_mode() {
        let mut state = test_state();
        state.push_char('a');
        state.select_mode(InputMode::Text);
        state.push_char('b');
        state.clear_field();

        assert!(state.draft.text.is_empty());
        assert_eq!(state.draft.url, "a");
    }

    #[test]
    fn request_ids_are_monotonic() {
        let mut state = test_state();
        let first = state.allocate_request_id();
        let second = state.allocate_request_id();
        assert!(second > first);
    }

    #[test]
    fn score_animation_stops_at_target() {
        let mut state = test_state();
        state.result = Some(sample_result(true, vec![]));
        state.displayed_score = 0;

        while state.step_score_animation() {}
        assert_eq!(state.displayed_score, 25);

        // Further ticks are no-ops.
        assert!(!state.step_score_animation());
        assert_eq!(state.displayed_score, 25);
    }

    #[test]
    fn error_takes_precedence_over_stored_result() {
        let mut state = test_state();
        state.screen = Screen::Result;
        state.result = Some(sample_result(false, vec![]));
        state.result_error = Some("analysis failed".to_string());

        let UiViewModel::Result(vm) = state.compute_viewmodel() else {
            panic!("expected result viewmodel");
        };
        assert!(matches!(vm.body, ResultBody::Error { .. }));
    }

    #[test]
    fn pending_shows_loading_even_with_old_result() {
        let mut state = test_state();
        state.screen = Screen::Result;
        state.result = Some(sample_result(false, vec![]));
        state.pending = Some(PendingAnalysis {
            request_id: 7,
            submitted_at: 0,
        });

        let UiViewModel::Result(vm) = state.compute_viewmodel() else {
            panic!("expected result viewmodel");
        };
        assert!(matches!(vm.body, ResultBody::Loading { .. }));
    }

    #[test]
    fn manipulation_card_only_when_flagged() {
        let mut state = test_state();
        state.screen = Screen::Result;
        state.result = Some(sample_result(false, vec![]));
        state.displayed_score = 25;

        let UiViewModel::Result(vm) = state.compute_viewmodel() else {
            panic!("expected result viewmodel");
        };
        let ResultBody::Ready(card) = vm.body else {
            panic!("expected ready card");
        };
        assert!(card.manipulation.is_none());
        assert!(card.fallacies.is_empty());
        // Sources render regardless of the rest of the card.
        assert_eq!(card.sources.len(), 2);
        assert_eq!(card.sources[0].name, "FactCheck.org");
        assert_eq!(card.sources[1].name, "Reuters");
    }

    #[test]
    fn fallacies_keep_detection_order() {
        let fallacies = vec![
            LogicalFallacy {
                kind: "Ad Hominem".to_string(),
                quoted_text: "Only a traitor would support this law.".to_string(),
                explanation: "Attacks the person instead of the argument.".to_string(),
            },
            LogicalFallacy {
                kind: "Slippery Slope".to_string(),
                quoted_text: "If we pass this, society will collapse.".to_string(),
                explanation: "Asserts an extreme outcome without evidence.".to_string(),
            },
        ];
        let mut state = test_state();
        state.screen = Screen::Result;
        state.result = Some(sample_result(true, fallacies));

        let UiViewModel::Result(vm) = state.compute_viewmodel() else {
            panic!("expected result viewmodel");
        };
        let ResultBody::Ready(card) = vm.body else {
            panic!("expected ready card");
        };
        assert!(card.manipulation.is_some());
        assert_eq!(card.fallacies[0].kind, "Ad Hominem");
        assert_eq!(card.fallacies[1].kind, "Slippery Slope");
    }

    #[test]
    fn attachment_preview_path_is_shown_without_sandbox_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("shot.png");
        std::fs::write(&source, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();

        let mut state = AppState::new(Theme::default(), dir.path().join("previews"), 30);
        state.select_mode(InputMode::Image);
        for ch in source.to_string_lossy().chars() {
            state.push_char(ch);
        }
        state.attach_image().unwrap();

        let raw = state
            .draft
            .image
            .as_ref()
            .unwrap()
            .preview
            .path()
            .unwrap()
            .display()
            .to_string();

        let UiViewModel::Input(vm) = state.compute_viewmodel() else {
            panic!("expected input viewmodel");
        };
        let InputBody::Image { attachment, .. } = vm.body else {
            panic!("expected image body");
        };
        let shown = attachment.unwrap().preview_path.unwrap();
        assert_eq!(shown, crate::infrastructure::strip_host_prefix(&raw));
        assert!(!shown.starts_with("/host"));
    }

    #[test]
    fn tab_info_marks_active_mode() {
        let mut state = test_state();
        state.select_mode(InputMode::Text);

        let UiViewModel::Input(vm) = state.compute_viewmodel() else {
            panic!("expected input viewmodel");
        };
        let active: Vec<&str> = vm
            .tabs
            .iter()
            .filter(|tab| tab.is_active)
            .map(|tab| tab.label)
            .collect();
        assert_eq!(active, vec!["Text"]);
    }
}
