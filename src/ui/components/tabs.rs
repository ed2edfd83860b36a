//! Mode tab bar renderer for the input screen.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabInfo;

/// Renders the Link / Text / Image tab bar at the specified row.
///
/// The active tab gets the theme's active tab colors and bold styling; the
/// rest render dimmed. Tabs are centered as a group.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_tabs(row: usize, tabs: &[TabInfo], theme: &Theme, cols: usize) -> usize {
    // Each tab renders as " Label " with one separating space.
    let total_width: usize = tabs
        .iter()
        .map(|tab| tab.label.chars().count() + 2)
        .sum::<usize>()
        + tabs.len().saturating_sub(1);
    let padding = (cols.saturating_sub(total_width)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));

    for (index, tab) in tabs.iter().enumerate() {
        if index > 0 {
            print!(" ");
        }
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", tab.label);
        print!("{}", Theme::reset());
    }

    row + 1
}
