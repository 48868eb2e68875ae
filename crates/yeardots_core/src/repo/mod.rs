//! Repository layer for persisted app state.
//!
//! # Responsibility
//! - Define storage-facing interfaces used by services.
//! - Keep SQL details out of service and FFI layers.

pub mod settings_repo;
