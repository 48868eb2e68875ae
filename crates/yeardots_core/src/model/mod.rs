//! Domain model for the year dot grid.
//!
//! # Responsibility
//! - Define calendar math, grid layout and the customization model.
//! - Keep everything pure so UI and export paths share one computation.
//!
//! # Invariants
//! - Grids are recomputed from `(date, settings)`, never patched in place.
//! - Settings values are immutable; updates produce new values.

pub mod calendar;
pub mod grid;
pub mod onboarding;
pub mod settings;
