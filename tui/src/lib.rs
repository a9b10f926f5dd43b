//! TUI rendering for Task Hub using ratatui.
//!
//! The whole screen is a pure function of [`App`] state: header bar, welcome
//! panel, three metric cards, the action panel, and a toast overlay.

mod effects;
mod input;
mod theme;
mod toasts;

pub use effects::slide_in_from_right;
pub use input::{InputPump, handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, styles, toggle_icon};
pub use toasts::{TOAST_MAX_WIDTH, TOAST_MIN_HEIGHT, toast_height, toast_slots, toast_width};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use taskhub_engine::{AccentColor, App, Focus, Icon};

use self::toasts::draw_toasts;

pub const APP_TITLE: &str = "Real-time Task Management";
pub const WELCOME_TITLE: &str = "Welcome to Your Task Hub";
pub const CREATE_BUTTON_LABEL: &str = "Create New Task";

pub const HEADER_HEIGHT: u16 = 3;
/// Terminals at least this wide show the metric cards side by side.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 90;

const WELCOME_HEIGHT: u16 = 6;
const CARD_HEIGHT: u16 = 5;
const ACTION_HEIGHT: u16 = 5;

const BADGES: [(&str, AccentColor); 4] = [
    ("Rust", AccentColor::Blue),
    ("ratatui", AccentColor::Cyan),
    ("crossterm", AccentColor::Grape),
    ("tokio", AccentColor::Green),
];

/// One of the three summary cards under the welcome panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub icon: Icon,
    pub accent: AccentColor,
    pub label: &'static str,
    pub value: String,
    pub caption: &'static str,
}

/// Only "Pending Tasks" is live; the other two are static placeholders.
#[must_use]
pub fn metric_cards(app: &App) -> [MetricCard; 3] {
    [
        MetricCard {
            icon: Icon::Clock,
            accent: AccentColor::Blue,
            label: "Pending Tasks",
            value: app.counter().to_string(),
            caption: "Press n to create a task and see a notification",
        },
        MetricCard {
            icon: Icon::Check,
            accent: AccentColor::Teal,
            label: "Completed",
            value: "0".to_string(),
            caption: "Ready for real-time integration",
        },
        MetricCard {
            icon: Icon::Bolt,
            accent: AccentColor::Orange,
            label: "Real-time Events",
            value: "Ready".to_string(),
            caption: "Kafka, RabbitMQ, Redis ready",
        },
    ]
}

#[must_use]
pub fn is_wide_layout(width: u16) -> bool {
    width >= WIDE_LAYOUT_MIN_WIDTH
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(app.display_mode(), options);
    let glyphs = glyphs(options);
    let area = frame.area();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg).fg(palette.text_primary));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);
    let (header, main) = (chunks[0], chunks[1]);
    draw_header(frame, app, header, &palette, &glyphs);

    let content = main.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let cards_height = if is_wide_layout(area.width) {
        CARD_HEIGHT
    } else {
        CARD_HEIGHT * 3
    };
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(WELCOME_HEIGHT), // Welcome panel
            Constraint::Length(1),
            Constraint::Length(cards_height), // Metric cards
            Constraint::Length(1),
            Constraint::Length(ACTION_HEIGHT), // Action panel
            Constraint::Min(0),
        ])
        .split(content);
    let (welcome, cards, action) = (sections[0], sections[2], sections[4]);

    draw_welcome(frame, welcome, &palette);
    draw_metric_cards(frame, app, cards, area.width, &palette, &glyphs);
    draw_action_panel(frame, app, action, &palette, &glyphs);

    draw_toasts(frame, app.toasts().visible(), main, &palette, &glyphs);
}

fn panel_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .style(styles::panel(palette))
        .padding(Padding::horizontal(1))
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = panel_block(palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = glyphs.icon(toggle_icon(app.display_mode()));
    let toggle_label = format!(" {icon} ");
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(toggle_label.width() as u16),
        ])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            glyphs.bolt,
            Style::default()
                .fg(palette.cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(APP_TITLE, styles::title(palette)),
    ]);
    frame.render_widget(Paragraph::new(brand), parts[0]);

    let toggle_style = if app.focus() == Focus::ThemeToggle {
        styles::focused(palette)
    } else {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
    };
    let toggle = Line::from(Span::styled(toggle_label, toggle_style));
    frame.render_widget(Paragraph::new(toggle), parts[1]);
}

fn draw_welcome(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = panel_block(palette);
    let max_width = block.inner(area).width;

    let lines = vec![
        Line::from(Span::styled(WELCOME_TITLE, styles::title(palette))),
        Line::from(Span::styled(
            "Built with Rust, ratatui and crossterm. Ready for real-time updates!",
            styles::dimmed(palette),
        )),
        Line::from(""),
        Line::from(badge_spans(palette, max_width)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Badges that fit in `max_width`, in order; the rest are dropped whole.
fn badge_spans(palette: &Palette, max_width: u16) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut used = 0usize;
    for (name, color) in BADGES {
        let label = format!(" {name} ");
        let needed = label.width() + usize::from(!spans.is_empty());
        if used + needed > usize::from(max_width) {
            break;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        used += needed;
        spans.push(Span::styled(
            label,
            Style::default()
                .fg(palette.accent(color))
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

fn draw_metric_cards(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    terminal_width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let slots = if is_wide_layout(terminal_width) {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CARD_HEIGHT); 3])
            .split(area)
    };

    for (card, slot) in metric_cards(app).iter().zip(slots.iter()) {
        draw_metric_card(frame, card, *slot, palette, glyphs);
    }
}

fn draw_metric_card(
    frame: &mut Frame,
    card: &MetricCard,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let accent = palette.accent(card.accent);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                glyphs.icon(card.icon),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(card.label, styles::title(palette)),
        ]),
        Line::from(Span::styled(
            card.value.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.caption, styles::dimmed(palette))),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel_block(palette)), area);
}

fn draw_action_panel(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let button = if app.focus() == Focus::CreateTask {
        Span::styled(
            format!(" {} {CREATE_BUTTON_LABEL} ", glyphs.selected),
            styles::focused(palette),
        )
    } else {
        Span::styled(
            format!("   {CREATE_BUTTON_LABEL} "),
            Style::default()
                .fg(palette.primary)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
    };

    let key = |k: &'static str| Span::styled(k, styles::key_highlight(palette));
    let hint = |h: &'static str| Span::styled(h, styles::dimmed(palette));
    let hints = Line::from(vec![
        key("n"),
        hint(" create  "),
        key("t"),
        hint(" theme  "),
        key("tab"),
        hint(" focus  "),
        key("esc"),
        hint(" dismiss  "),
        key("q"),
        hint(" quit"),
    ]);

    let lines = vec![
        Line::from(Span::styled("Test Notifications", styles::title(palette))),
        Line::from(button),
        hints,
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel_block(palette)),
        area,
    );
}
