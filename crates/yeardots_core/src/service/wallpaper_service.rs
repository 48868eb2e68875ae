//! Set-wallpaper use case.
//!
//! # Responsibility
//! - Turn `(settings, progress)` into a bitmap sized to the device canvas.
//! - Hand the bitmap to the injected `WallpaperSink` exactly once.
//! - Refuse canvases the rasterizer cannot allocate before touching the sink.
//!
//! # Invariants
//! - No retries: a sink failure is returned to the caller as-is.
//! - Re-entry while an invocation is outstanding fails with `Busy`.
//! - Rendering is recomputed from scratch on every call.

use crate::model::calendar::YearProgress;
use crate::model::grid::layout_grid;
use crate::model::settings::WallpaperSettings;
use crate::render::raster::{rasterize, CanvasSize, RenderedWallpaper};
use crate::wallpaper::{WallpaperError, WallpaperSink, WallpaperTarget};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Lays out and rasterizes the grid for one progress snapshot.
///
/// Canvases outside `1..=CanvasSize::MAX_DIM` are refused with `Encode`.
pub fn render_wallpaper(
    settings: &WallpaperSettings,
    progress: &YearProgress,
    canvas: CanvasSize,
) -> Result<RenderedWallpaper, WallpaperError> {
    if !canvas.is_supported() {
        return Err(WallpaperError::Encode(format!(
            "canvas {}x{} exceeds {} px per edge",
            canvas.width,
            canvas.height,
            CanvasSize::MAX_DIM
        )));
    }
    let grid = layout_grid(
        progress.total_days,
        progress.day_of_year,
        settings.grid.column_count(),
    );
    Ok(rasterize(&grid, progress, settings, canvas))
}

pub struct WallpaperService<S: WallpaperSink> {
    sink: S,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: WallpaperSink> WallpaperService<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Renders and applies the wallpaper, returning the target it went to.
    pub fn set_wallpaper(
        &self,
        settings: &WallpaperSettings,
        progress: &YearProgress,
        canvas: CanvasSize,
    ) -> Result<WallpaperTarget, WallpaperError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WallpaperError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let started_at = Instant::now();
        let target = WallpaperTarget::from_apply_both(settings.apply_both_targets);
        let result = render_wallpaper(settings, progress, canvas)
            .and_then(|rendered| self.sink.apply(&rendered, target));

        match result {
            Ok(()) => {
                info!(
                    "event=wallpaper_set module=service status=ok target={} layout={} width={} height={} duration_ms={}",
                    target.as_str(),
                    settings.grid.layout.as_str(),
                    canvas.width,
                    canvas.height,
                    started_at.elapsed().as_millis()
                );
                Ok(target)
            }
            Err(err) => {
                error!(
                    "event=wallpaper_set module=service status=error target={} duration_ms={} error={}",
                    target.as_str(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
