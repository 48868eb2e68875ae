//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, rendering and repository calls into UI-level actions.
//! - Keep UI/FFI layers decoupled from storage and platform details.

pub mod controller;
pub mod onboarding_service;
pub mod wallpaper_service;
