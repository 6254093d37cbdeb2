use ratatui::style::Color;

use crate::state::BalloonTier;

/// Display palette. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub path: Color,
    pub tower: Color,
    pub projectile: Color,
    pub balloon_red: Color,
    pub balloon_blue: Color,
    pub balloon_green: Color,
    pub balloon_yellow: Color,
    pub indicator_valid: Color,
    pub indicator_invalid: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(240, 244, 232),
            text: Color::Black,
            accent: Color::Blue,
            muted: Color::DarkGray,
            path: Color::Rgb(160, 82, 45),
            tower: Color::Blue,
            projectile: Color::Black,
            balloon_red: Color::Red,
            balloon_blue: Color::Blue,
            balloon_green: Color::Green,
            balloon_yellow: Color::Rgb(204, 204, 0),
            indicator_valid: Color::Rgb(0, 200, 0),
            indicator_invalid: Color::Rgb(220, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            text: Color::White,
            accent: Color::Cyan,
            muted: Color::Gray,
            path: Color::Rgb(205, 133, 63),
            tower: Color::LightBlue,
            projectile: Color::White,
            balloon_red: Color::LightRed,
            balloon_blue: Color::LightBlue,
            balloon_green: Color::LightGreen,
            balloon_yellow: Color::LightYellow,
            indicator_valid: Color::LightGreen,
            indicator_invalid: Color::LightRed,
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn balloon_color(&self, tier: BalloonTier) -> Color {
        match tier {
            BalloonTier::Yellow => self.balloon_yellow,
            BalloonTier::Green => self.balloon_green,
            BalloonTier::Blue => self.balloon_blue,
            BalloonTier::Red => self.balloon_red,
        }
    }

    pub fn indicator(&self, valid: bool) -> Color {
        if valid {
            self.indicator_valid
        } else {
            self.indicator_invalid
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
