//! Color palettes.

use clap::ValueEnum;
use ratatui::style::Color;
use tracing::warn;

/// A named color palette. `Midnight` keeps the black cards of the
/// screen this layout reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Midnight,
    Daylight,
    Mono,
}

impl Theme {
    /// Resolve a config-file theme name; unknown names warn and fall
    /// back to the default palette.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "midnight" => Theme::Midnight,
            "daylight" => Theme::Daylight,
            "mono" => Theme::Mono,
            other => {
                warn!("Unknown theme {:?}, using the default", other);
                Theme::default()
            }
        }
    }

    /// Focused borders, the owner marker, the focused drawer row
    pub fn accent(self) -> Color {
        match self {
            Theme::Midnight => Color::Cyan,
            Theme::Daylight => Color::Blue,
            Theme::Mono => Color::White,
        }
    }

    /// Unfocused borders and less important chrome
    pub fn secondary(self) -> Color {
        match self {
            Theme::Midnight => Color::DarkGray,
            Theme::Daylight => Color::Gray,
            Theme::Mono => Color::DarkGray,
        }
    }

    /// The focused card's title
    pub fn highlight(self) -> Color {
        match self {
            Theme::Midnight => Color::Yellow,
            Theme::Daylight => Color::Magenta,
            Theme::Mono => Color::White,
        }
    }

    /// Help text and truncation hints
    pub fn dim(self) -> Color {
        match self {
            Theme::Midnight => Color::Rgb(100, 100, 100),
            Theme::Daylight => Color::DarkGray,
            Theme::Mono => Color::DarkGray,
        }
    }

    /// Card background
    pub fn card_bg(self) -> Color {
        match self {
            Theme::Midnight => Color::Black,
            Theme::Daylight => Color::White,
            Theme::Mono => Color::Black,
        }
    }

    /// Card title (unfocused)
    pub fn card_title(self) -> Color {
        match self {
            Theme::Midnight => Color::White,
            Theme::Daylight => Color::Black,
            Theme::Mono => Color::White,
        }
    }

    /// Card description text
    pub fn card_text(self) -> Color {
        match self {
            Theme::Midnight => Color::Gray,
            Theme::Daylight => Color::DarkGray,
            Theme::Mono => Color::Gray,
        }
    }
}
