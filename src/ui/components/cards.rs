//! Result card renderers: summary, manipulation warning, fallacies, sources.
//!
//! Whether a card appears at all is decided by the view model; these
//! functions only draw what they are handed. Each returns the next free row
//! so the result screen can stack cards vertically.

use crate::ui::helpers::{position_cursor, truncate_tail, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FallacyInfo, ManipulationInfo, SourceInfo};

const CARD_INDENT: usize = 4;

/// Renders the one-paragraph analysis summary.
pub fn render_summary(row: usize, summary: &str, theme: &Theme, cols: usize) -> usize {
    let width = text_width(cols);
    let mut current_row = row;

    for line in wrap_text(summary, width) {
        position_cursor(current_row, CARD_INDENT + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row + 1
}

/// Renders the visual manipulation warning card.
pub fn render_manipulation(
    row: usize,
    info: &ManipulationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = text_width(cols);

    position_cursor(row, CARD_INDENT + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.warning_fg));
    print!("! Visual manipulation detected");
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for line in wrap_text(&info.description, width.saturating_sub(2)) {
        position_cursor(current_row, CARD_INDENT + 3);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row + 1
}

/// Renders the logical fallacy list in detection order.
pub fn render_fallacies(row: usize, fallacies: &[FallacyInfo], theme: &Theme, cols: usize) -> usize {
    let width = text_width(cols);
    let mut current_row = render_section_title(row, "Logical fallacies", theme);

    for fallacy in fallacies {
        position_cursor(current_row, CARD_INDENT + 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fallacy.kind);
        print!("{}", Theme::reset());
        current_row += 1;

        for line in wrap_text(&format!("\u{201c}{}\u{201d}", fallacy.quoted_text), width.saturating_sub(2)) {
            position_cursor(current_row, CARD_INDENT + 3);
            print!("{}", Theme::dim());
            print!("{line}");
            print!("{}", Theme::reset());
            current_row += 1;
        }

        for line in wrap_text(&fallacy.explanation, width.saturating_sub(2)) {
            position_cursor(current_row, CARD_INDENT + 3);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{line}");
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }

    current_row + 1
}

/// Renders the cross-referenced source list in analysis order.
///
/// Each source carries a support marker: `+` in the supporting color when
/// the source backs the claim, `-` in the contradicting color otherwise.
pub fn render_sources(row: usize, sources: &[SourceInfo], theme: &Theme, cols: usize) -> usize {
    let width = text_width(cols);
    let mut current_row = render_section_title(row, "Cross-referenced sources", theme);

    for source in sources {
        position_cursor(current_row, CARD_INDENT + 1);
        if source.is_supporting {
            print!("{}", Theme::fg(&theme.colors.supporting_fg));
            print!("+ ");
        } else {
            print!("{}", Theme::fg(&theme.colors.contradicting_fg));
            print!("- ");
        }
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", source.name);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(
            "  {}",
            truncate_tail(&source.url, width.saturating_sub(source.name.chars().count() + 4))
        );
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row + 1
}

fn render_section_title(row: usize, title: &str, theme: &Theme) -> usize {
    position_cursor(row, CARD_INDENT + 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    row + 1
}

const fn text_width(cols: usize) -> usize {
    cols.saturating_sub(CARD_INDENT * 2)
}
