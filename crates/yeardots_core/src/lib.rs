//! Core domain logic for Year Dots.
//! This crate is the single source of truth for calendar math, grid layout
//! and the wallpaper export boundary.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod wallpaper;

pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogDestination,
};
pub use model::calendar::{
    day_of_year, days_remaining, is_leap_year, percent_elapsed, total_days_in_year, YearProgress,
};
pub use model::grid::{layout_grid, DayCell, DayState, Grid};
pub use model::onboarding::{OnboardingFlow, OnboardingPage, OnboardingStep, ONBOARDING_PAGES};
pub use model::settings::{
    AccentColor, DotShape, DotSize, FontChoice, GridConfiguration, GridLayout, GridOffset,
    OffsetBounds, SettingsParseError, SettingsUpdate, TextOpacity, TextOverlayConfig, TextSize,
    WallpaperSettings,
};
pub use render::overlay::{OverlayLine, OverlayLineKind, OverlayText};
pub use render::palette::CellPalette;
pub use render::raster::{rasterize, CanvasSize, GridPlacement, RenderedWallpaper};
pub use repo::settings_repo::{RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository};
pub use service::controller::{DotGridSnapshot, WallpaperController};
pub use service::onboarding_service::{LaunchRoute, OnboardingService, ONBOARDING_KEY};
pub use service::wallpaper_service::{render_wallpaper, WallpaperService};
pub use wallpaper::{PngFileSink, WallpaperError, WallpaperSink, WallpaperTarget};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
