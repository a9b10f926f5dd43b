//! Toast overlay in the top-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use taskhub_engine::{Notification, Toast};

use crate::effects::slide_in_from_right;
use crate::theme::{Glyphs, Palette};

pub const TOAST_MAX_WIDTH: u16 = 48;
/// Borders plus one title row and one message row.
pub const TOAST_MIN_HEIGHT: u16 = 4;
/// Gap between the top of the overlay area and the first toast.
const TOP_OFFSET: u16 = 1;

/// Toast width for `area`: capped, with one column kept free at the right edge.
#[must_use]
pub fn toast_width(area: Rect) -> u16 {
    TOAST_MAX_WIDTH.min(area.width.saturating_sub(2))
}

/// Rows needed to show `lines` in full inside a bordered toast `width` columns wide.
#[must_use]
pub fn toast_height(lines: &[Line], width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1);
    let rows = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: true })
        .line_count(inner);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(TOAST_MIN_HEIGHT)
}

/// Where each visible toast lands before any effect is applied, oldest first.
///
/// `heights` holds one requested height per toast. A toast taller than the
/// space left is clipped to it; toasts with no room left are left out.
#[must_use]
pub fn toast_slots(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let width = toast_width(area);
    if width == 0 {
        return Vec::new();
    }
    let x = area.x + area.width - width - 1;
    let bottom = area.y.saturating_add(area.height);

    let mut slots = Vec::with_capacity(heights.len());
    let mut y = area.y.saturating_add(TOP_OFFSET);
    for &height in heights {
        let height = height.min(bottom.saturating_sub(y));
        if height < 3 {
            break;
        }
        slots.push(Rect {
            x,
            y,
            width,
            height,
        });
        y += height;
    }
    slots
}

pub(crate) fn draw_toasts(
    frame: &mut Frame,
    toasts: &[Toast],
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = toast_width(area);
    let bodies: Vec<Vec<Line>> = toasts
        .iter()
        .map(|toast| toast_lines(toast.notification(), palette, glyphs))
        .collect();
    let heights: Vec<u16> = bodies
        .iter()
        .map(|lines| toast_height(lines, width))
        .collect();

    for ((toast, lines), slot) in toasts.iter().zip(bodies).zip(toast_slots(area, &heights)) {
        let rect = slide_in_from_right(toast.enter_progress(), slot, area);
        if rect.width < 3 {
            continue;
        }
        draw_toast(frame, toast, lines, rect, palette);
    }
}

/// Title row (icon + title) followed by the message.
pub(crate) fn toast_lines<'a>(
    notification: &'a Notification,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'a>> {
    let accent = palette.accent(notification.color);
    vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.icon(notification.icon)),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.title.as_str(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            notification.message.as_str(),
            Style::default().fg(palette.text_muted),
        )),
    ]
}

fn draw_toast(frame: &mut Frame, toast: &Toast, lines: Vec<Line>, area: Rect, palette: &Palette) {
    let accent = palette.accent(toast.notification().color);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.bg_panel));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
