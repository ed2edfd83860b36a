//! Input form renderer for the three entry surfaces.
//!
//! Renders the prompt and draft field for the active input mode, the
//! attachment card in image mode, and any inline validation message.

use crate::ui::helpers::{position_cursor, truncate_tail, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AttachmentInfo, InputBody};

const FIELD_INDENT: usize = 4;

/// Maximum wrapped lines shown for the text surface before eliding.
const TEXT_PREVIEW_LINES: usize = 8;

/// Renders the active input surface starting at the specified row.
///
/// # Returns
///
/// The next available row position after the rendered field (and inline
/// error, when present).
pub fn render_input_body(
    row: usize,
    body: &InputBody,
    inline_error: Option<&str>,
    theme: &Theme,
    cols: usize,
) -> usize {
    let field_width = cols.saturating_sub(FIELD_INDENT * 2);
    let mut current_row = row;

    current_row = match body {
        InputBody::Link { url } => render_line_field(
            current_row,
            "Paste an article link to verify:",
            url,
            theme,
            field_width,
        ),
        InputBody::Text { text } => render_text_field(current_row, text, theme, field_width),
        InputBody::Image {
            typed_path,
            attachment,
        } => {
            let next = render_line_field(
                current_row,
                "Path to a screenshot or photo (Enter to attach):",
                typed_path,
                theme,
                field_width,
            );
            attachment.as_ref().map_or(next, |info| {
                render_attachment_card(next + 1, info, theme, field_width)
            })
        }
    };

    if let Some(message) = inline_error {
        current_row += 1;
        position_cursor(current_row, FIELD_INDENT + 1);
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{}", truncate_tail(message, field_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Renders a prompt followed by a single-line field with a trailing cursor
/// block. Long values keep their tail visible.
fn render_line_field(
    row: usize,
    prompt: &str,
    value: &str,
    theme: &Theme,
    field_width: usize,
) -> usize {
    position_cursor(row, FIELD_INDENT + 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{prompt}");
    print!("{}", Theme::reset());

    position_cursor(row + 2, FIELD_INDENT + 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", truncate_tail(value, field_width.saturating_sub(1)));
    print!("{}", Theme::bold());
    print!("_");
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the multi-line text surface, wrapped and elided from the top so
/// the most recently typed lines stay visible.
fn render_text_field(row: usize, text: &str, theme: &Theme, field_width: usize) -> usize {
    position_cursor(row, FIELD_INDENT + 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Paste the article text to verify:");
    print!("{}", Theme::reset());

    let lines = wrap_text(text, field_width.saturating_sub(1));
    let skip = lines.len().saturating_sub(TEXT_PREVIEW_LINES);
    let mut current_row = row + 2;

    if skip > 0 {
        position_cursor(current_row, FIELD_INDENT + 1);
        print!("{}", Theme::dim());
        print!("({skip} earlier lines)");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    let visible = &lines[skip..];
    for (index, line) in visible.iter().enumerate() {
        position_cursor(current_row, FIELD_INDENT + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        if index == visible.len() - 1 {
            print!("{}", Theme::bold());
            print!("_");
        }
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Renders the attachment summary card shown once an image is loaded.
fn render_attachment_card(row: usize, info: &AttachmentInfo, theme: &Theme, field_width: usize) -> usize {
    position_cursor(row, FIELD_INDENT + 1);
    print!("{}", Theme::fg(&theme.colors.supporting_fg));
    print!("* ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    let size_kib = info.size_bytes / 1024;
    print!(
        "{}",
        truncate_tail(
            &format!("{} ({}, {size_kib} KiB)", info.file_name, info.format_label),
            field_width.saturating_sub(2),
        )
    );
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    if let Some(preview) = &info.preview_path {
        position_cursor(current_row, FIELD_INDENT + 3);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate_tail(&format!("preview: {preview}"), field_width.saturating_sub(2)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
