//! Cell coloring policy.

use crate::model::grid::DayState;
use crate::model::settings::{AccentColor, DotShape};

/// Fill for elapsed days.
pub const PAST_COLOR: AccentColor = AccentColor::rgb(0xFF, 0xFF, 0xFF);
/// Fill for days still ahead.
pub const FUTURE_COLOR: AccentColor = AccentColor::rgb(0x2A, 0x2A, 0x2E);
/// Canvas background.
pub const BACKGROUND_COLOR: AccentColor = AccentColor::rgb(0x00, 0x00, 0x00);

/// Maps day states to fill colors for one accent choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPalette {
    pub past: AccentColor,
    pub today: AccentColor,
    pub future: AccentColor,
    pub background: AccentColor,
}

impl CellPalette {
    pub fn for_accent(accent: AccentColor) -> Self {
        Self {
            past: PAST_COLOR,
            today: accent,
            future: FUTURE_COLOR,
            background: BACKGROUND_COLOR,
        }
    }

    pub fn color_for(&self, state: DayState) -> AccentColor {
        match state {
            DayState::Past => self.past,
            DayState::Today => self.today,
            DayState::Future => self.future,
        }
    }
}

/// Corner radius for a dot of `diameter` pixels.
pub fn corner_radius(shape: DotShape, diameter: f32) -> f32 {
    diameter * shape.corner_ratio()
}

#[cfg(test)]
mod tests {
    use super::{corner_radius, CellPalette, FUTURE_COLOR, PAST_COLOR};
    use crate::model::grid::DayState;
    use crate::model::settings::{AccentColor, DotShape};

    #[test]
    fn today_takes_the_accent() {
        let accent = AccentColor::rgb(0xF4, 0x72, 0xB6);
        let palette = CellPalette::for_accent(accent);
        assert_eq!(palette.color_for(DayState::Today), accent);
        assert_eq!(palette.color_for(DayState::Past), PAST_COLOR);
        assert_eq!(palette.color_for(DayState::Future), FUTURE_COLOR);
    }

    #[test]
    fn corner_radius_follows_shape() {
        assert_eq!(corner_radius(DotShape::Circle, 9.0), 4.5);
        assert_eq!(corner_radius(DotShape::Rounded, 12.0), 3.0);
        assert_eq!(corner_radius(DotShape::Square, 13.0), 0.0);
    }
}
