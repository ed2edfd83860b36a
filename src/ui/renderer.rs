//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It dispatches on the
//! active screen and ensures proper layout filling.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UiViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// screen-specific layout. Prints ANSI-styled output using `print!`; does
/// not clear the screen or manage cursor position beyond explicit moves.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    match state.compute_viewmodel() {
        UiViewModel::Input(vm) => components::render_input_screen(&vm, &state.theme, cols, rows),
        UiViewModel::Result(vm) => components::render_result_screen(&vm, &state.theme, cols, rows),
    }
}
