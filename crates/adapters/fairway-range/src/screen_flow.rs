use serde::{Deserialize, Serialize};

use fairway_core::state::SessionState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScreenState {
    /// Hole card before the first swing.
    Intro,
    Playing,
}

/// Camera the renderer should use. Overhead is the only view today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewMode {
    Overhead,
}

/// Which screen is up and whether the cinematic (silhouette) view is on.
#[derive(Debug, Clone)]
pub struct ScreenFlow {
    screen: ScreenState,
    cinematic: bool,
    last_state: SessionState,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self {
            screen: ScreenState::Intro,
            cinematic: false,
            last_state: SessionState::Idle,
        }
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn cinematic_enabled(&self) -> bool {
        self.cinematic
    }

    /// Intro -> Playing, starting in the cinematic view.
    pub fn advance_from_intro(&mut self) -> bool {
        if self.screen != ScreenState::Intro {
            return false;
        }
        self.screen = ScreenState::Playing;
        self.cinematic = true;
        true
    }

    pub fn toggle_cinematic(&mut self) {
        self.cinematic = !self.cinematic;
    }

    /// A swing always cuts to overhead.
    pub fn on_shot(&mut self) {
        self.cinematic = false;
    }

    pub fn on_state_change(&mut self, state: SessionState) {
        if state == self.last_state {
            return;
        }
        if matches!(state, SessionState::InFlight | SessionState::Result) {
            self.cinematic = false;
        }
        self.last_state = state;
    }

    pub fn on_next_hole(&mut self) {
        *self = Self::new();
    }

    /// Always overhead for now; the cinematic flag only drives HUD chrome.
    pub fn select_view(&self) -> ViewMode {
        ViewMode::Overhead
    }
}
