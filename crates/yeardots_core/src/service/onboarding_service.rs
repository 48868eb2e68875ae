//! First-launch routing backed by a persisted completion flag.
//!
//! # Invariants
//! - Flag presence with any value means onboarding is complete.
//! - Read failures fail open to the main screen so users are never blocked.
//! - Write failures are logged and swallowed; the user still proceeds.

use crate::repo::settings_repo::SettingsRepository;
use log::{info, warn};

/// Storage key of the onboarding completion flag.
pub const ONBOARDING_KEY: &str = "@yeardots_onboarding_complete";
const ONBOARDING_DONE_VALUE: &str = "true";

/// Screen to show after the splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRoute {
    Onboarding,
    Main,
}

pub struct OnboardingService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> OnboardingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Decides the launch route from the stored flag.
    pub fn launch_route(&self) -> LaunchRoute {
        match self.repo.get(ONBOARDING_KEY) {
            Ok(None) => LaunchRoute::Onboarding,
            Ok(Some(_)) => LaunchRoute::Main,
            Err(err) => {
                warn!(
                    "event=onboarding_check module=service status=error fallback=main error={}",
                    err
                );
                LaunchRoute::Main
            }
        }
    }

    /// Records completion (finished or skipped) and routes to the main screen.
    pub fn complete(&self) -> LaunchRoute {
        match self.repo.set(ONBOARDING_KEY, ONBOARDING_DONE_VALUE) {
            Ok(()) => info!("event=onboarding_complete module=service status=ok"),
            Err(err) => warn!(
                "event=onboarding_complete module=service status=error error={}",
                err
            ),
        }
        LaunchRoute::Main
    }
}
