//! First-run tutorial state
//!
//! A fixed six-step tour. It opens automatically on the first visit and
//! marks itself seen in platform storage once closed, so returning users
//! only see it again via the help button.

use dioxus::prelude::*;

use crate::ports::outbound::{storage_keys, PlatformPort};

/// Panel groups a tutorial step can highlight while it is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialTarget {
    /// The two generation cards
    Generators,
    /// Character and location listings
    Collections,
    /// Graph and map panels
    WorldViews,
    /// The map settings card
    MapSettings,
    /// The export card
    Export,
}

/// One step of the guided tour
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub body: &'static str,
    pub highlight: Option<TutorialTarget>,
}

/// The tour, in order
pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    TutorialStep {
        title: "Welcome to LoreCrafter!",
        body: "This quick tour will guide you through the key features. Use the 'Next' and 'Previous' buttons to navigate.",
        highlight: None,
    },
    TutorialStep {
        title: "Generate Content",
        body: "Use these cards to bring your world to life. Describe your setting and click 'Generate Character' or 'Generate Location' to have the AI create detailed entries for you.",
        highlight: Some(TutorialTarget::Generators),
    },
    TutorialStep {
        title: "View Your Creations",
        body: "Generated items appear here. Click the 'Details' button on any card to see more information, assign characters to locations, change colors, or delete items.",
        highlight: Some(TutorialTarget::Collections),
    },
    TutorialStep {
        title: "The World Graph & Map",
        body: "The graph visualizes relationships, while the map is your world's canvas. Place locations by clicking 'Details' then 'Place on Map'.",
        highlight: Some(TutorialTarget::WorldViews),
    },
    TutorialStep {
        title: "Custom World Map",
        body: "Use the 'World Map Settings' card to set your own map. You can paste a URL or upload an image from your computer.",
        highlight: Some(TutorialTarget::MapSettings),
    },
    TutorialStep {
        title: "Export Your World",
        body: "When you're ready, you can download your world as a JSON file for data, or as a beautifully formatted PDF to share.",
        highlight: Some(TutorialTarget::Export),
    },
];

/// Tutorial overlay state
#[derive(Clone)]
pub struct TutorialState {
    pub open: Signal<bool>,
    /// Index into [`TUTORIAL_STEPS`]
    pub step: Signal<usize>,
}

impl TutorialState {
    /// Create a new TutorialState, closed
    pub fn new() -> Self {
        Self {
            open: Signal::new(false),
            step: Signal::new(0),
        }
    }

    /// Open the tour from the beginning
    pub fn open(&mut self) {
        self.step.set(0);
        self.open.set(true);
    }

    /// Open the tour automatically if this user has never closed it
    pub fn open_if_first_visit(&mut self, platform: &dyn PlatformPort) {
        if platform.storage_load(storage_keys::TUTORIAL_SEEN).is_none() {
            self.open();
        }
    }

    /// Close the tour and remember that it was seen
    pub fn close(&mut self, platform: &dyn PlatformPort) {
        platform.storage_save(storage_keys::TUTORIAL_SEEN, "true");
        self.open.set(false);
    }

    /// Advance one step; the last step closes the tour
    pub fn next(&mut self, platform: &dyn PlatformPort) {
        let step = *self.step.read();
        if step + 1 < TUTORIAL_STEPS.len() {
            self.step.set(step + 1);
        } else {
            self.close(platform);
        }
    }

    /// Go back one step; no-op on the first
    pub fn previous(&mut self) {
        let step = *self.step.read();
        if step > 0 {
            self.step.set(step - 1);
        }
    }

    /// The step currently shown
    pub fn current_step(&self) -> TutorialStep {
        let index = *self.step.read();
        *TUTORIAL_STEPS.get(index).unwrap_or(&TUTORIAL_STEPS[0])
    }

    pub fn is_first_step(&self) -> bool {
        *self.step.read() == 0
    }

    pub fn is_last_step(&self) -> bool {
        *self.step.read() + 1 >= TUTORIAL_STEPS.len()
    }

    /// Progress indicator, e.g. `3 / 6`
    pub fn step_label(&self) -> String {
        format!("{} / {}", *self.step.read() + 1, TUTORIAL_STEPS.len())
    }

    /// True when the open tour is highlighting `target`
    pub fn highlights(&self, target: TutorialTarget) -> bool {
        *self.open.read() && self.current_step().highlight == Some(target)
    }
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_has_six_steps() {
        assert_eq!(TUTORIAL_STEPS.len(), 6);
    }

    #[test]
    fn welcome_step_highlights_nothing() {
        assert_eq!(TUTORIAL_STEPS[0].title, "Welcome to LoreCrafter!");
        assert!(TUTORIAL_STEPS[0].highlight.is_none());
    }

    #[test]
    fn every_later_step_points_at_a_panel() {
        for step in &TUTORIAL_STEPS[1..] {
            assert!(step.highlight.is_some(), "step '{}' highlights nothing", step.title);
        }
    }

    #[test]
    fn tour_ends_on_the_export_step() {
        let last = TUTORIAL_STEPS[TUTORIAL_STEPS.len() - 1];
        assert_eq!(last.highlight, Some(TutorialTarget::Export));
    }
}
