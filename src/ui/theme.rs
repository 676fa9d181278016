//! Color palettes. The dark/light choice is the persisted dark-mode flag;
//! everything else reads colors from the active [`Theme`].

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub selection_bg: Color,
    pub gauge: Color,
    pub gauge_bg: Color,
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            selection_bg: Color::Rgb(40, 40, 60),
            gauge: Color::Cyan,
            gauge_bg: Color::Rgb(30, 30, 40),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            dim: Color::Gray,
            border: Color::Gray,
            accent: Color::Blue,
            success: Color::Rgb(0, 120, 0),
            error: Color::Rgb(180, 0, 0),
            warning: Color::Rgb(160, 110, 0),
            selection_bg: Color::Rgb(220, 225, 245),
            gauge: Color::Blue,
            gauge_bg: Color::Rgb(225, 225, 225),
        }
    }
}
