//! Software rasterizer for the dot grid.
//!
//! # Responsibility
//! - Paint a `Grid` onto an RGBA canvas sized to the device wallpaper.
//! - Encode the result as PNG for the wallpaper service.
//!
//! # Invariants
//! - Every dot uses the same shape and size; only the fill varies by state.
//! - The grid is centered on the canvas, then shifted by the user offset.
//! - All dp dimensions are multiplied by `WallpaperSettings::scale`.

use crate::model::calendar::YearProgress;
use crate::model::grid::Grid;
use crate::model::settings::{AccentColor, WallpaperSettings};
use crate::render::overlay::{OverlayText, OVERLAY_MARGIN_TOP};
use crate::render::palette::{corner_radius, CellPalette};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Sub-pixel samples per axis for edge coverage.
const SUPERSAMPLE: u32 = 2;

/// Output dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Largest edge accepted for export; covers current phone and tablet panels.
    pub const MAX_DIM: u32 = 8192;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Whether both edges are within `1..=MAX_DIM`.
    pub fn is_supported(self) -> bool {
        (1..=Self::MAX_DIM).contains(&self.width) && (1..=Self::MAX_DIM).contains(&self.height)
    }

    fn bounded(self) -> Self {
        Self {
            width: self.width.clamp(1, Self::MAX_DIM),
            height: self.height.clamp(1, Self::MAX_DIM),
        }
    }
}

/// Where the grid landed on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    pub origin_x: f32,
    pub origin_y: f32,
    pub dot: f32,
    pub gap: f32,
    pub width: f32,
    pub height: f32,
}

impl GridPlacement {
    /// Centers a grid on `canvas` and applies the offset.
    pub fn compute(grid: &Grid, settings: &WallpaperSettings, canvas: CanvasSize) -> Self {
        let scale = settings.scale;
        let dot = settings.grid.dot_diameter() as f32 * scale;
        let gap = settings.grid.dot_gap() as f32 * scale;
        let columns = grid.column_count.min(grid.cell_count().max(1) as u32) as f32;
        let rows = grid.row_count() as f32;

        let width = columns * dot + (columns - 1.0).max(0.0) * gap;
        let height = rows * (dot + gap);

        Self {
            origin_x: (canvas.width as f32 - width) / 2.0 + settings.offset.x * scale,
            origin_y: (canvas.height as f32 - height) / 2.0 + settings.offset.y * scale,
            dot,
            gap,
            width,
            height,
        }
    }

    /// Top-left corner of the dot at `(row, column)`.
    pub fn cell_origin(&self, row: usize, column: usize) -> (f32, f32) {
        let pitch = self.dot + self.gap;
        (
            self.origin_x + column as f32 * pitch,
            self.origin_y + row as f32 * pitch,
        )
    }
}

/// Rasterized wallpaper plus the text block the host draws on top.
#[derive(Debug, Clone)]
pub struct RenderedWallpaper {
    pub image: RgbaImage,
    pub placement: GridPlacement,
    pub overlay: Option<OverlayText>,
}

impl RenderedWallpaper {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encodes the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Paints `grid` with `settings` onto a fresh canvas.
///
/// Edges beyond `CanvasSize::MAX_DIM` are clamped; callers that must refuse
/// such sizes check `CanvasSize::is_supported` first.
pub fn rasterize(
    grid: &Grid,
    progress: &YearProgress,
    settings: &WallpaperSettings,
    canvas: CanvasSize,
) -> RenderedWallpaper {
    let canvas = canvas.bounded();
    let palette = CellPalette::for_accent(settings.grid.accent);
    let placement = GridPlacement::compute(grid, settings, canvas);
    let radius = corner_radius(settings.grid.shape, placement.dot);
    let background = to_rgba(palette.background);

    let mut image = RgbaImage::from_pixel(canvas.width, canvas.height, background);
    for (row_idx, row) in grid.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let (x, y) = placement.cell_origin(row_idx, col_idx);
            let fill = palette.color_for(cell.state);
            paint_dot(&mut image, x, y, placement.dot, radius, fill);
        }
    }

    let overlay = OverlayText::compose(progress, &settings.text, settings.scale).map(|text| {
        text.with_anchor(
            placement.origin_x + placement.width / 2.0,
            placement.origin_y + placement.height + OVERLAY_MARGIN_TOP * settings.scale,
        )
    });

    RenderedWallpaper {
        image,
        placement,
        overlay,
    }
}

fn paint_dot(image: &mut RgbaImage, x: f32, y: f32, size: f32, radius: f32, fill: AccentColor) {
    if size <= 0.0 {
        return;
    }
    let x_start = x.floor().max(0.0) as u32;
    let y_start = y.floor().max(0.0) as u32;
    let x_end = ((x + size).ceil().max(0.0) as u32).min(image.width());
    let y_end = ((y + size).ceil().max(0.0) as u32).min(image.height());

    let center_x = x + size / 2.0;
    let center_y = y + size / 2.0;
    let half = size / 2.0;
    let samples = (SUPERSAMPLE * SUPERSAMPLE) as f32;
    let step = 1.0 / SUPERSAMPLE as f32;

    for py in y_start..y_end {
        for px in x_start..x_end {
            let mut hits = 0u32;
            for sy in 0..SUPERSAMPLE {
                for sx in 0..SUPERSAMPLE {
                    let sample_x = px as f32 + (sx as f32 + 0.5) * step;
                    let sample_y = py as f32 + (sy as f32 + 0.5) * step;
                    if inside_rounded_square(
                        sample_x - center_x,
                        sample_y - center_y,
                        half,
                        radius,
                    ) {
                        hits += 1;
                    }
                }
            }
            if hits == 0 {
                continue;
            }
            let coverage = hits as f32 / samples;
            let pixel = image.get_pixel_mut(px, py);
            *pixel = blend(*pixel, fill, coverage);
        }
    }
}

fn inside_rounded_square(dx: f32, dy: f32, half: f32, radius: f32) -> bool {
    let ax = dx.abs();
    let ay = dy.abs();
    if ax > half || ay > half {
        return false;
    }
    let radius = radius.clamp(0.0, half);
    let ex = (ax - (half - radius)).max(0.0);
    let ey = (ay - (half - radius)).max(0.0);
    ex * ex + ey * ey <= radius * radius
}

fn blend(base: Rgba<u8>, fill: AccentColor, coverage: f32) -> Rgba<u8> {
    let mix = |from: u8, to: u8| -> u8 {
        (from as f32 + (to as f32 - from as f32) * coverage).round() as u8
    };
    Rgba([mix(base[0], fill.r), mix(base[1], fill.g), mix(base[2], fill.b), 255])
}

fn to_rgba(color: AccentColor) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}
