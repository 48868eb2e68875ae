//! Directory-backed wallpaper sink.
//!
//! Writes the PNG and a JSON sidecar describing target and text overlay. The
//! host shell picks both up and forwards them to the OS wallpaper service.

use super::{WallpaperError, WallpaperSink, WallpaperTarget};
use crate::render::overlay::OverlayText;
use crate::render::raster::RenderedWallpaper;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const WALLPAPER_FILE_NAME: &str = "yeardots-wallpaper.png";
pub const OVERLAY_FILE_NAME: &str = "yeardots-overlay.json";

#[derive(Serialize)]
struct Sidecar<'a> {
    target: &'static str,
    flag: i32,
    width: u32,
    height: u32,
    image: &'a str,
    overlay: Option<&'a OverlayText>,
}

/// Sink that exports into one directory.
#[derive(Debug, Clone)]
pub struct PngFileSink {
    dir: PathBuf,
}

impl PngFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn image_path(&self) -> PathBuf {
        self.dir.join(WALLPAPER_FILE_NAME)
    }

    pub fn overlay_path(&self) -> PathBuf {
        self.dir.join(OVERLAY_FILE_NAME)
    }
}

impl WallpaperSink for PngFileSink {
    fn apply(
        &self,
        wallpaper: &RenderedWallpaper,
        target: WallpaperTarget,
    ) -> Result<(), WallpaperError> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            WallpaperError::Unavailable(format!(
                "cannot create export dir `{}`: {err}",
                self.dir.display()
            ))
        })?;

        let png = wallpaper.encode_png()?;
        let sidecar = Sidecar {
            target: target.as_str(),
            flag: target.flag(),
            width: wallpaper.width(),
            height: wallpaper.height(),
            image: WALLPAPER_FILE_NAME,
            overlay: wallpaper.overlay.as_ref(),
        };
        let json = serde_json::to_vec_pretty(&sidecar)
            .map_err(|err| WallpaperError::Encode(err.to_string()))?;

        write_replacing(&self.image_path(), &png)?;
        write_replacing(&self.overlay_path(), &json)?;

        info!(
            "event=wallpaper_export module=wallpaper status=ok target={} bytes={}",
            target.as_str(),
            png.len()
        );
        Ok(())
    }
}

// Write-then-rename so readers never observe a half-written file.
fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), WallpaperError> {
    let staging = path.with_extension("partial");
    fs::write(&staging, bytes)
        .and_then(|()| fs::rename(&staging, path))
        .map_err(|err| {
            let _ = fs::remove_file(&staging);
            WallpaperError::Rejected(format!("cannot write `{}`: {err}", path.display()))
        })
}
