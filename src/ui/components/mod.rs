//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Help text and keybinding hints
//! - [`tabs`]: Link / Text / Image mode tab bar
//! - [`form`]: Draft entry surfaces and inline validation messages
//! - [`gauge`]: Truth score gauge with verdict line
//! - [`cards`]: Summary, manipulation warning, fallacy, and source cards
//! - [`status`]: Loading spinner and failure views
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_input_screen`]: Header + Tabs + Form + Footer
//! - [`render_result_screen`]: Header + (Loading | Error | Cards) + Footer

mod cards;
mod footer;
mod form;
mod gauge;
mod header;
mod status;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{InputViewModel, ResultBody, ResultViewModel};

use cards::{render_fallacies, render_manipulation, render_sources, render_summary};
use footer::render_footer;
use form::render_input_body;
use gauge::render_gauge;
use header::render_header;
use status::{render_error, render_loading};
use tabs::render_tabs;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the input collector screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Tab bar]
/// [Form body + inline error]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_input_screen(vm: &InputViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_tabs(current_row + 1, &vm.tabs, theme, cols);
    let _current_row = render_input_body(
        current_row + 1,
        &vm.body,
        vm.inline_error.as_deref(),
        theme,
        cols,
    );

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the result presenter screen.
///
/// Layout structure for a ready result:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Gauge + Verdict]
/// [Summary]
/// [Manipulation warning, when flagged]
/// [Fallacy list, when non-empty]
/// [Source list]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Loading and failure bodies replace everything between the borders.
pub fn render_result_screen(vm: &ResultViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row += 1;

    match &vm.body {
        ResultBody::Loading { spinner } => {
            let middle = rows / 2;
            render_loading(middle.max(current_row), *spinner, theme, cols);
        }
        ResultBody::Error { message } => {
            render_error(current_row + 1, message, theme, cols);
        }
        ResultBody::Ready(card) => {
            current_row = render_gauge(current_row, card, theme, cols);
            current_row = render_summary(current_row + 1, &card.summary, theme, cols);
            if let Some(manipulation) = &card.manipulation {
                current_row = render_manipulation(current_row, manipulation, theme, cols);
            }
            if !card.fallacies.is_empty() {
                current_row = render_fallacies(current_row, &card.fallacies, theme, cols);
            }
            let _current_row = render_sources(current_row, &card.sources, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
