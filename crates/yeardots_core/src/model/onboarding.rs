//! First-launch onboarding flow state.

use serde::Serialize;

/// One onboarding page shown before the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Page highlight color, `#RRGGBB`.
    pub color: &'static str,
}

pub const ONBOARDING_PAGES: [OnboardingPage; 3] = [
    OnboardingPage {
        title: "Visualize Your Year",
        subtitle: "Every dot represents a day",
        description: "Watch your year unfold with beautiful dot visualization. Past days light up, showing your journey through time.",
        color: "#4ADE80",
    },
    OnboardingPage {
        title: "Make It Yours",
        subtitle: "Personalize everything",
        description: "Choose colors, layouts, fonts, and styles. Create a wallpaper that matches your vibe perfectly.",
        color: "#60A5FA",
    },
    OnboardingPage {
        title: "Live Wallpaper",
        subtitle: "Updates automatically",
        description: "Set as your wallpaper and watch it update daily. Never lose track of your year again.",
        color: "#F472B6",
    },
];

/// Result of advancing the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Page(usize),
    Finished,
}

/// Page cursor for the onboarding carousel.
#[derive(Debug, Clone, Default)]
pub struct OnboardingFlow {
    current: usize,
    finished: bool,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> &'static OnboardingPage {
        &ONBOARDING_PAGES[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_last_page(&self) -> bool {
        self.current + 1 == ONBOARDING_PAGES.len()
    }

    /// Skip is hidden on the last page.
    pub fn can_skip(&self) -> bool {
        !self.finished && !self.is_last_page()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves to the next page, or finishes from the last one.
    pub fn next(&mut self) -> OnboardingStep {
        if self.finished {
            return OnboardingStep::Finished;
        }
        if self.is_last_page() {
            self.finished = true;
            return OnboardingStep::Finished;
        }
        self.current += 1;
        OnboardingStep::Page(self.current)
    }

    pub fn skip(&mut self) -> OnboardingStep {
        self.finished = true;
        OnboardingStep::Finished
    }
}
