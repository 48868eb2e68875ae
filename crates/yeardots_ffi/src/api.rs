//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose launch routing, preview data and wallpaper export to Dart via FRB.
//! - Translate option ids from the UI shell into core settings values.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported in response envelopes, never thrown.
//! - Only one wallpaper export runs at a time per process.

use std::path::PathBuf;
use std::sync::OnceLock;
use yeardots_core::db::open_db;
use yeardots_core::model::settings::clamp_custom_text;
use yeardots_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, layout_grid,
    AccentColor, CanvasSize, DayState, DotShape, DotSize, FontChoice, GridConfiguration,
    GridLayout, GridOffset, LaunchRoute, OffsetBounds, OnboardingService, PngFileSink,
    SettingsParseError, SqliteSettingsRepository, TextOpacity, TextOverlayConfig, TextSize,
    WallpaperService, WallpaperSettings, YearProgress,
};

const DB_FILE_NAME: &str = "yeardots.sqlite3";
const EXPORT_DIR_NAME: &str = "yeardots-export";
const DB_PATH_ENV: &str = "YEARDOTS_DB_PATH";
const EXPORT_DIR_ENV: &str = "YEARDOTS_EXPORT_DIR";

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static EXPORT_SERVICE: OnceLock<WallpaperService<PngFileSink>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Year progress for the current local date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearProgressView {
    pub year: i32,
    pub day_of_year: u32,
    pub total_days: u32,
    pub days_remaining: u32,
    pub percent: u32,
}

/// Row-major dot grid for the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGridView {
    pub column_count: u32,
    pub row_count: u32,
    /// One entry per day: `past|today|future`.
    pub cells: Vec<String>,
    pub progress: YearProgressView,
}

/// Customization values as sent by the UI shell.
///
/// Option fields carry the shell's ids (`STANDARD`, `ROUNDED`, `SF_LIGHT`,
/// `M`, `100`, ...); `color` is `#RRGGBB`.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperRequest {
    pub color: String,
    pub shape: String,
    pub size: String,
    pub show_stats: bool,
    pub show_year: bool,
    pub font: String,
    pub text_size: String,
    pub text_opacity: String,
    pub custom_text: String,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub apply_both_targets: bool,
    pub layout_id: String,
}

/// Result envelope for wallpaper export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperExportResponse {
    pub ok: bool,
    /// PNG path to hand to the OS wallpaper service.
    pub image_path: Option<String>,
    /// JSON sidecar with the text overlay.
    pub overlay_path: Option<String>,
    /// 1 home, 2 lock, 3 both.
    pub target_flag: i32,
    pub message: String,
}

impl WallpaperExportResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            image_path: None,
            overlay_path: None,
            target_flag: 0,
            message: message.into(),
        }
    }
}

/// Returns today's year progress.
///
/// # FFI contract
/// - Sync call; reads the wall clock on every invocation.
#[flutter_rust_bridge::frb(sync)]
pub fn year_progress() -> YearProgressView {
    to_progress_view(YearProgress::today())
}

/// Lays out today's grid for a layout id; unknown ids fall back to `STANDARD`.
///
/// # FFI contract
/// - Sync call, pure computation, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dot_grid(layout_id: String) -> DotGridView {
    let layout = GridLayout::parse(&layout_id).unwrap_or_else(|err| {
        log::warn!("event=dot_grid module=ffi status=fallback error={}", err);
        GridLayout::default()
    });
    let progress = YearProgress::today();
    let grid = layout_grid(progress.total_days, progress.day_of_year, layout.columns());

    DotGridView {
        column_count: grid.column_count,
        row_count: grid.row_count() as u32,
        cells: grid
            .cells()
            .map(|cell| day_state_label(cell.state).to_string())
            .collect(),
        progress: to_progress_view(progress),
    }
}

/// Returns `onboarding` on first launch, otherwise `main`.
///
/// # FFI contract
/// - Sync call, DB-backed.
/// - Any storage failure resolves to `main`.
#[flutter_rust_bridge::frb(sync)]
pub fn launch_route() -> String {
    let route = match open_db(resolve_db_path()) {
        Ok(conn) => OnboardingService::new(SqliteSettingsRepository::new(&conn)).launch_route(),
        Err(err) => {
            log::warn!(
                "event=onboarding_check module=ffi status=error fallback=main error={}",
                err
            );
            LaunchRoute::Main
        }
    };
    route_label(route).to_string()
}

/// Marks onboarding as done (finished or skipped) and returns `main`.
///
/// # FFI contract
/// - Sync call, DB-backed; storage failures are logged, not surfaced.
#[flutter_rust_bridge::frb(sync)]
pub fn complete_onboarding() -> String {
    let route = match open_db(resolve_db_path()) {
        Ok(conn) => OnboardingService::new(SqliteSettingsRepository::new(&conn)).complete(),
        Err(err) => {
            log::warn!(
                "event=onboarding_complete module=ffi status=error error={}",
                err
            );
            LaunchRoute::Main
        }
    };
    route_label(route).to_string()
}

/// Renders the wallpaper at device size and writes it for the host to apply.
///
/// # FFI contract
/// - Sync call; performs rasterization and file IO.
/// - A concurrent call while one is outstanding fails with a busy message.
/// - Never retries; the message is meant to be shown once to the user.
#[flutter_rust_bridge::frb(sync)]
pub fn export_wallpaper(
    request: WallpaperRequest,
    width_px: u32,
    height_px: u32,
) -> WallpaperExportResponse {
    let settings = match to_settings(&request) {
        Ok(settings) => settings,
        Err(err) => {
            return WallpaperExportResponse::failure(format!("export_wallpaper failed: {err}"))
        }
    };

    let service = EXPORT_SERVICE
        .get_or_init(|| WallpaperService::new(PngFileSink::new(resolve_export_dir())));
    let canvas = CanvasSize::new(width_px, height_px);
    match service.set_wallpaper(&settings, &YearProgress::today(), canvas) {
        Ok(target) => WallpaperExportResponse {
            ok: true,
            image_path: Some(service.sink().image_path().display().to_string()),
            overlay_path: Some(service.sink().overlay_path().display().to_string()),
            target_flag: target.flag(),
            message: "Wallpaper ready.".to_string(),
        },
        Err(err) => WallpaperExportResponse::failure(format!("export_wallpaper failed: {err}")),
    }
}

fn to_settings(request: &WallpaperRequest) -> Result<WallpaperSettings, SettingsParseError> {
    let grid = GridConfiguration {
        layout: GridLayout::parse(&request.layout_id)?,
        shape: DotShape::parse(&request.shape)?,
        size: DotSize::parse(&request.size)?,
        accent: AccentColor::parse(&request.color)?,
    };
    let text = TextOverlayConfig {
        show_stats: request.show_stats,
        show_year: request.show_year,
        font: FontChoice::parse(&request.font)?,
        text_size: TextSize::parse(&request.text_size)?,
        opacity: TextOpacity::parse(&request.text_opacity)?,
        custom_text: clamp_custom_text(&request.custom_text),
    };
    let offset = GridOffset {
        x: request.offset_x as f32,
        y: request.offset_y as f32,
    }
    .clamped(OffsetBounds::default());
    let scale = request.scale as f32;

    Ok(WallpaperSettings {
        grid,
        text,
        offset,
        scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 },
        apply_both_targets: request.apply_both_targets,
    })
}

fn to_progress_view(progress: YearProgress) -> YearProgressView {
    YearProgressView {
        year: progress.year,
        day_of_year: progress.day_of_year,
        total_days: progress.total_days,
        days_remaining: progress.days_remaining,
        percent: progress.percent,
    }
}

fn day_state_label(state: DayState) -> &'static str {
    match state {
        DayState::Past => "past",
        DayState::Today => "today",
        DayState::Future => "future",
    }
}

fn route_label(route: LaunchRoute) -> &'static str {
    match route {
        LaunchRoute::Onboarding => "onboarding",
        LaunchRoute::Main => "main",
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            env_path(DB_PATH_ENV).unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
        })
        .clone()
}

fn resolve_export_dir() -> PathBuf {
    env_path(EXPORT_DIR_ENV).unwrap_or_else(|| std::env::temp_dir().join(EXPORT_DIR_NAME))
}

fn env_path(name: &str) -> Option<PathBuf> {
    let raw = std::env::var(name).ok()?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
