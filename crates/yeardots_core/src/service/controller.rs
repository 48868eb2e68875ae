//! Owner of the live customization state.
//!
//! # Responsibility
//! - Apply user-driven `SettingsUpdate`s and drag gestures to one settings value.
//! - Produce fresh grid snapshots for the preview on demand.
//!
//! # Invariants
//! - Stored offsets always lie within `OffsetBounds`.
//! - Snapshots are rebuilt from `(date, settings)` on every call.

use crate::model::calendar::YearProgress;
use crate::model::grid::{layout_grid, Grid};
use crate::model::settings::{GridOffset, OffsetBounds, SettingsUpdate, WallpaperSettings};
use chrono::NaiveDate;
use log::debug;

/// Everything a preview frame needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DotGridSnapshot {
    pub progress: YearProgress,
    pub grid: Grid,
    pub settings: WallpaperSettings,
}

#[derive(Debug, Clone, Default)]
pub struct WallpaperController {
    settings: WallpaperSettings,
    bounds: OffsetBounds,
    drag_origin: Option<GridOffset>,
}

impl WallpaperController {
    pub fn new(settings: WallpaperSettings, bounds: OffsetBounds) -> Self {
        let settings = WallpaperSettings {
            offset: settings.offset.clamped(bounds),
            ..settings
        };
        Self {
            settings,
            bounds,
            drag_origin: None,
        }
    }

    pub fn settings(&self) -> &WallpaperSettings {
        &self.settings
    }

    pub fn bounds(&self) -> OffsetBounds {
        self.bounds
    }

    /// Applies one change; offsets are clamped to the bounds.
    pub fn apply(&mut self, update: SettingsUpdate) -> &WallpaperSettings {
        let update = match update {
            SettingsUpdate::Offset(offset) => SettingsUpdate::Offset(offset.clamped(self.bounds)),
            other => other,
        };
        debug!("event=settings_update module=controller update={:?}", update);
        self.settings = self.settings.with_update(update);
        &self.settings
    }

    /// Remembers the offset at gesture start.
    pub fn begin_drag(&mut self) {
        self.drag_origin = Some(self.settings.offset);
    }

    /// Moves the grid by the gesture delta measured from `begin_drag`.
    pub fn drag_by(&mut self, dx: f32, dy: f32) -> GridOffset {
        let origin = *self.drag_origin.get_or_insert(self.settings.offset);
        let next = GridOffset {
            x: origin.x + dx,
            y: origin.y + dy,
        };
        self.apply(SettingsUpdate::Offset(next));
        self.settings.offset
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    pub fn reset_offset(&mut self) {
        self.drag_origin = None;
        self.apply(SettingsUpdate::Offset(GridOffset::ZERO));
    }

    /// Builds a snapshot for `date`.
    pub fn snapshot_for(&self, date: NaiveDate) -> DotGridSnapshot {
        let progress = YearProgress::for_date(date);
        let grid = layout_grid(
            progress.total_days,
            progress.day_of_year,
            self.settings.grid.column_count(),
        );
        DotGridSnapshot {
            progress,
            grid,
            settings: self.settings.clone(),
        }
    }

    /// Builds a snapshot for the current local date.
    pub fn snapshot(&self) -> DotGridSnapshot {
        self.snapshot_for(chrono::Local::now().date_naive())
    }
}
