use crate::script::banner::BannerTone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// The PAPATYA v7 skin: a light mIRC-era palette on a white window.
pub struct Theme;

impl Theme {
    pub const BG_WINDOW: Color = Color::Rgb(255, 255, 255);
    pub const BG_ELEVATED: Color = Color::Rgb(236, 233, 216);
    pub const BORDER_DIM: Color = Color::Rgb(172, 168, 153);
    pub const TEXT_PRIMARY: Color = Color::Rgb(0, 0, 0);
    pub const TEXT_SECONDARY: Color = Color::Rgb(80, 80, 80);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

    pub const NAVY: Color = Color::Rgb(0, 0, 122);
    pub const ACCENT_BLUE: Color = Color::Rgb(0, 102, 204);

    // Speaker colors
    pub const NICK_OTHER: Color = Color::Rgb(126, 5, 5);
    pub const NICK_SELF: Color = Color::Rgb(0, 102, 204);

    // Event line colors
    pub const LOGIN: Color = Color::Rgb(0, 128, 128);
    pub const QUIT: Color = Color::Rgb(0, 11, 125);
    pub const NICK_CHANGE: Color = Color::Rgb(24, 146, 19);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_BLUE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_WINDOW)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_WINDOW)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::NAVY).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn nick_self() -> Style {
        Style::default()
            .fg(Self::NICK_SELF)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nick_other() -> Style {
        Style::default()
            .fg(Self::NICK_OTHER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn message_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn login_message() -> Style {
        Style::default().fg(Self::LOGIN)
    }

    pub fn quit_message() -> Style {
        Style::default().fg(Self::QUIT)
    }

    pub fn nick_change_message() -> Style {
        Style::default().fg(Self::NICK_CHANGE)
    }

    /// Color of a roster prefix character, matching the original skin's
    /// operator ladder.
    pub fn op_color(op: Option<char>) -> Color {
        match op {
            Some('~') => Color::Rgb(24, 146, 19),
            Some('&') => Color::Rgb(116, 20, 12),
            Some('@') => Color::Rgb(234, 51, 35),
            Some('%') => Color::Rgb(0, 0, 122),
            Some('+') => Color::Rgb(0, 0, 242),
            _ => Self::TEXT_PRIMARY,
        }
    }

    /// Console text color for a banner tone.
    pub fn tone_color(tone: BannerTone) -> Color {
        match tone {
            BannerTone::Navy => Self::NAVY,
            BannerTone::Green => Color::Rgb(24, 146, 19),
            BannerTone::Red => Color::Rgb(202, 8, 8),
            BannerTone::Gray => Self::TEXT_MUTED,
        }
    }

    pub fn tab_normal() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::NAVY)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    /// The "unseen messages" blink, on-phase.
    pub fn tab_blink() -> Style {
        Style::default()
            .fg(Color::Rgb(202, 8, 8))
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BG_ELEVATED)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BG_ELEVATED)
    }
}
