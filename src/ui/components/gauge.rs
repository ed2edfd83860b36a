//! Truth score gauge and verdict renderer.
//!
//! Draws the horizontal score gauge, the numeric score, the verdict line,
//! and the analysis age. Gauge fill and verdict share the tier color; the
//! displayed score comes pre-animated from the view model.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultCard;

const GAUGE_INDENT: usize = 4;

/// Renders the score gauge block starting at the specified row.
///
/// # Returns
///
/// The next available row position after the verdict and age lines.
pub fn render_gauge(row: usize, card: &ResultCard, theme: &Theme, cols: usize) -> usize {
    let tier_color = theme.tier_fg(card.tier);
    let gauge_width = cols.saturating_sub(GAUGE_INDENT * 2 + 8).max(10);
    let filled = usize::from(card.displayed_score) * gauge_width / 100;

    position_cursor(row, GAUGE_INDENT + 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Truth Score");
    print!("{}", Theme::reset());

    position_cursor(row + 1, GAUGE_INDENT + 1);
    print!("{}", Theme::fg(tier_color));
    print!("{}", "\u{2588}".repeat(filled));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", "\u{2591}".repeat(gauge_width.saturating_sub(filled)));
    print!("{}", Theme::reset());
    print!(" {}", Theme::bold());
    print!("{}", Theme::fg(tier_color));
    print!("{:>3}/100", card.displayed_score);
    print!("{}", Theme::reset());

    position_cursor(row + 3, GAUGE_INDENT + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(tier_color));
    print!("{}", card.verdict);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  analyzed {}", card.analyzed_ago);
    print!("{}", Theme::reset());

    row + 4
}
