//! Color themes and glyphs for the Task Hub TUI.
//!
//! Dark mode uses the Kanagawa Wave palette, light mode Kanagawa Lotus. The
//! high-contrast option overrides both.

use ratatui::style::{Color, Modifier, Style};

use taskhub_engine::{AccentColor, DisplayMode, Icon, UiOptions};

/// Kanagawa Wave (dark) color constants.
mod wave {
    use super::Color;

    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const TEXT: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const TEAL: Color = Color::Rgb(122, 168, 159); // waveAqua2
    pub const LIME: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const GRAPE: Color = Color::Rgb(210, 126, 153); // sakuraPink
    pub const GREEN: Color = Color::Rgb(118, 148, 106); // autumnGreen
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Kanagawa Lotus (light) color constants.
mod lotus {
    use super::Color;

    pub const BG: Color = Color::Rgb(242, 236, 188); // lotusWhite3
    pub const BG_PANEL: Color = Color::Rgb(231, 219, 160); // lotusWhite4
    pub const BG_HIGHLIGHT: Color = Color::Rgb(228, 215, 148); // lotusWhite5
    pub const BORDER: Color = Color::Rgb(160, 156, 172); // lotusViolet1
    pub const TEXT: Color = Color::Rgb(84, 84, 100); // lotusInk1
    pub const TEXT_MUTED: Color = Color::Rgb(138, 137, 128); // lotusGray3
    pub const PRIMARY: Color = Color::Rgb(98, 76, 131); // lotusViolet4

    pub const BLUE: Color = Color::Rgb(77, 105, 155); // lotusBlue4
    pub const CYAN: Color = Color::Rgb(78, 140, 162); // lotusTeal1
    pub const TEAL: Color = Color::Rgb(89, 123, 117); // lotusAqua
    pub const LIME: Color = Color::Rgb(110, 145, 95); // lotusGreen2
    pub const GRAPE: Color = Color::Rgb(179, 91, 121); // lotusPink
    pub const GREEN: Color = Color::Rgb(111, 137, 78); // lotusGreen
    pub const ORANGE: Color = Color::Rgb(204, 109, 0); // lotusOrange
    pub const RED: Color = Color::Rgb(200, 64, 83); // lotusRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub blue: Color,
    pub cyan: Color,
    pub teal: Color,
    pub lime: Color,
    pub grape: Color,
    pub green: Color,
    pub orange: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: wave::BG,
            bg_panel: wave::BG_PANEL,
            bg_highlight: wave::BG_HIGHLIGHT,
            border: wave::BORDER,
            text_primary: wave::TEXT,
            text_muted: wave::TEXT_MUTED,
            primary: wave::PRIMARY,
            blue: wave::BLUE,
            cyan: wave::CYAN,
            teal: wave::TEAL,
            lime: wave::LIME,
            grape: wave::GRAPE,
            green: wave::GREEN,
            orange: wave::ORANGE,
            red: wave::RED,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: lotus::BG,
            bg_panel: lotus::BG_PANEL,
            bg_highlight: lotus::BG_HIGHLIGHT,
            border: lotus::BORDER,
            text_primary: lotus::TEXT,
            text_muted: lotus::TEXT_MUTED,
            primary: lotus::PRIMARY,
            blue: lotus::BLUE,
            cyan: lotus::CYAN,
            teal: lotus::TEAL,
            lime: lotus::LIME,
            grape: lotus::GRAPE,
            green: lotus::GREEN,
            orange: lotus::ORANGE,
            red: lotus::RED,
        }
    }

    /// Terminal-native colors only; the display mode picks black or white ground.
    #[must_use]
    pub fn high_contrast(mode: DisplayMode) -> Self {
        let (bg, fg) = match mode {
            DisplayMode::Dark => (Color::Black, Color::White),
            DisplayMode::Light => (Color::White, Color::Black),
        };
        Self {
            bg,
            bg_panel: bg,
            bg_highlight: Color::DarkGray,
            border: fg,
            text_primary: fg,
            text_muted: Color::Gray,
            primary: fg,
            blue: Color::Blue,
            cyan: Color::Cyan,
            teal: Color::Cyan,
            lime: Color::Green,
            grape: Color::Magenta,
            green: Color::Green,
            orange: Color::Yellow,
            red: Color::Red,
        }
    }

    #[must_use]
    pub fn accent(&self, color: AccentColor) -> Color {
        match color {
            AccentColor::Blue => self.blue,
            AccentColor::Cyan => self.cyan,
            AccentColor::Teal => self.teal,
            AccentColor::Lime => self.lime,
            AccentColor::Grape => self.grape,
            AccentColor::Green => self.green,
            AccentColor::Orange => self.orange,
            AccentColor::Red => self.red,
        }
    }
}

#[must_use]
pub fn palette(mode: DisplayMode, options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast(mode);
    }
    match mode {
        DisplayMode::Light => Palette::light(),
        DisplayMode::Dark => Palette::dark(),
    }
}

/// ASCII/Unicode glyphs for icons and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bolt: &'static str,
    pub clock: &'static str,
    pub check: &'static str,
    pub sun: &'static str,
    pub moon: &'static str,
    pub selected: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn icon(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::Bolt => self.bolt,
            Icon::Clock => self.clock,
            Icon::Check => self.check,
            Icon::Sun => self.sun,
            Icon::Moon => self.moon,
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bolt: "!",
            clock: "@",
            check: "+",
            sun: "*",
            moon: "C",
            selected: ">",
        }
    } else {
        Glyphs {
            bolt: "↯",
            clock: "◷",
            check: "✓",
            sun: "☀",
            moon: "☾",
            selected: "▸",
        }
    }
}

/// The toggle shows where it will take you: sun while dark, moon while light.
#[must_use]
pub fn toggle_icon(mode: DisplayMode) -> Icon {
    match mode {
        DisplayMode::Dark => Icon::Sun,
        DisplayMode::Light => Icon::Moon,
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn dimmed(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn panel(palette: &Palette) -> Style {
        Style::default()
            .bg(palette.bg_panel)
            .fg(palette.text_primary)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.border)
    }

    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.orange)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use taskhub_engine::{AccentColor, DisplayMode, Icon, UiOptions};

    use super::{Palette, glyphs, palette, toggle_icon};

    #[test]
    fn modes_pick_distinct_palettes() {
        let options = UiOptions::default();
        assert_eq!(palette(DisplayMode::Dark, options), Palette::dark());
        assert_eq!(palette(DisplayMode::Light, options), Palette::light());
        assert_ne!(Palette::dark().bg, Palette::light().bg);
    }

    #[test]
    fn high_contrast_overrides_mode() {
        let options = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        assert_eq!(
            palette(DisplayMode::Dark, options),
            Palette::high_contrast(DisplayMode::Dark)
        );
    }

    #[test]
    fn accent_maps_named_colors() {
        let p = Palette::dark();
        assert_eq!(p.accent(AccentColor::Teal), p.teal);
        assert_eq!(p.accent(AccentColor::Red), p.red);
    }

    #[test]
    fn toggle_icon_follows_mode() {
        assert_eq!(toggle_icon(DisplayMode::Dark), Icon::Sun);
        assert_eq!(toggle_icon(DisplayMode::Light), Icon::Moon);
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for icon in [Icon::Bolt, Icon::Clock, Icon::Check, Icon::Sun, Icon::Moon] {
            assert!(g.icon(icon).is_ascii());
        }
    }
}
