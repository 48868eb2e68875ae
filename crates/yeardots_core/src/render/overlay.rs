//! Stats text block shown below the grid.
//!
//! The core decides what the block says, how large each line is and where it
//! sits; glyph rasterization is left to the host shell, which owns fonts.

use crate::model::calendar::YearProgress;
use crate::model::settings::{FontChoice, TextOverlayConfig};
use serde::Serialize;

/// Gap between the grid and the first text line, in dp.
pub const OVERLAY_MARGIN_TOP: f32 = 28.0;

const STATS_FONT_SIZE: f32 = 15.0;
const YEAR_FONT_SIZE: f32 = 13.0;
const CUSTOM_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayLineKind {
    Stats,
    Year,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLine {
    pub kind: OverlayLineKind,
    pub text: String,
    /// Pixels, already multiplied by text size and display scale.
    pub font_size: f32,
    /// Pixels above this line.
    pub margin_top: f32,
    pub color: &'static str,
    pub italic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayText {
    pub lines: Vec<OverlayLine>,
    pub font: FontChoice,
    pub opacity: f32,
    /// Horizontal center of the block, pixels.
    pub anchor_x: f32,
    /// Top edge of the block, pixels.
    pub anchor_y: f32,
}

/// Formats the stats line, e.g. `"183 days left  •  50%"`.
pub fn stats_line(progress: &YearProgress) -> String {
    format!(
        "{} days left  \u{2022}  {}%",
        progress.days_remaining, progress.percent
    )
}

impl OverlayText {
    /// Builds the overlay, or `None` when stats are hidden.
    ///
    /// Year and custom text only appear inside the stats block.
    pub fn compose(progress: &YearProgress, config: &TextOverlayConfig, scale: f32) -> Option<Self> {
        if !config.show_stats {
            return None;
        }

        let factor = config.text_size.factor() * scale;
        let mut lines = vec![OverlayLine {
            kind: OverlayLineKind::Stats,
            text: stats_line(progress),
            font_size: STATS_FONT_SIZE * factor,
            margin_top: 0.0,
            color: "#FFFFFF",
            italic: false,
        }];
        if config.show_year {
            lines.push(OverlayLine {
                kind: OverlayLineKind::Year,
                text: progress.year.to_string(),
                font_size: YEAR_FONT_SIZE * factor,
                margin_top: 6.0 * scale,
                color: "#444444",
                italic: false,
            });
        }
        if !config.custom_text.is_empty() {
            lines.push(OverlayLine {
                kind: OverlayLineKind::Custom,
                text: config.custom_text.clone(),
                font_size: CUSTOM_FONT_SIZE * factor,
                margin_top: 10.0 * scale,
                color: "#888888",
                italic: true,
            });
        }

        Some(Self {
            lines,
            font: config.font,
            opacity: config.opacity.value(),
            anchor_x: 0.0,
            anchor_y: 0.0,
        })
    }

    pub fn with_anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor_x = x;
        self.anchor_y = y;
        self
    }
}
