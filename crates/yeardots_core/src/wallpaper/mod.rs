//! Boundary to the host wallpaper service.
//!
//! # Responsibility
//! - Describe where a wallpaper goes (`WallpaperTarget`).
//! - Abstract the platform call behind `WallpaperSink` so layout and
//!   rendering stay testable without a device.
//!
//! # Invariants
//! - A sink is invoked at most once per user action; failures are not retried.

use crate::render::raster::RenderedWallpaper;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file_sink;

pub use file_sink::{PngFileSink, OVERLAY_FILE_NAME, WALLPAPER_FILE_NAME};

/// Screen(s) that receive the wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallpaperTarget {
    Home,
    Lock,
    Both,
}

impl WallpaperTarget {
    /// Platform flag: 1 home, 2 lock, 3 both.
    pub fn flag(self) -> i32 {
        match self {
            Self::Home => 1,
            Self::Lock => 2,
            Self::Both => 3,
        }
    }

    /// Maps a platform flag back; unknown values fall back to `Home`.
    pub fn from_flag(flag: i32) -> Self {
        match flag {
            2 => Self::Lock,
            3 => Self::Both,
            _ => Self::Home,
        }
    }

    pub fn from_apply_both(apply_both_targets: bool) -> Self {
        if apply_both_targets {
            Self::Both
        } else {
            Self::Home
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Lock => "lock",
            Self::Both => "both",
        }
    }
}

/// Failure of one set-wallpaper action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallpaperError {
    /// Host service or module is missing.
    Unavailable(String),
    /// Bitmap could not be encoded or decoded.
    Encode(String),
    /// Host service refused or failed while applying.
    Rejected(String),
    /// Another set-wallpaper action is still outstanding.
    Busy,
}

impl Display for WallpaperError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "wallpaper service unavailable: {message}"),
            Self::Encode(message) => write!(f, "wallpaper image encoding failed: {message}"),
            Self::Rejected(message) => write!(f, "wallpaper service rejected image: {message}"),
            Self::Busy => write!(f, "a wallpaper update is already in progress"),
        }
    }
}

impl Error for WallpaperError {}

impl From<image::ImageError> for WallpaperError {
    fn from(value: image::ImageError) -> Self {
        Self::Encode(value.to_string())
    }
}

/// Host capability that installs a rendered wallpaper.
pub trait WallpaperSink {
    fn apply(
        &self,
        wallpaper: &RenderedWallpaper,
        target: WallpaperTarget,
    ) -> Result<(), WallpaperError>;
}
