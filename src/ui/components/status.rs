//! Loading and failure state renderers for the result screen.

use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::theme::Theme;

const STATUS_INDENT: usize = 4;

/// Renders the centered loading spinner and message.
///
/// # Returns
///
/// The next available row position.
pub fn render_loading(row: usize, spinner: char, theme: &Theme, cols: usize) -> usize {
    let message = format!("{spinner} Analyzing...");
    let padding = (cols.saturating_sub(message.chars().count())) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{message}");
    print!("{}", Theme::reset());

    row + 1
}

/// Renders the analysis failure message with a retry hint.
///
/// # Returns
///
/// The next available row position.
pub fn render_error(row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(STATUS_INDENT * 2);

    position_cursor(row, STATUS_INDENT + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("Analysis failed");
    print!("{}", Theme::reset());

    let mut current_row = row + 2;
    for line in wrap_text(message, width) {
        position_cursor(current_row, STATUS_INDENT + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row + 1, STATUS_INDENT + 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Press r to retry the same input.");
    print!("{}", Theme::reset());

    current_row + 2
}
