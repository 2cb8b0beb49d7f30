use fairway_core::ball::ShotResult;
use fairway_core::config::PhysicsConfig;
use fairway_core::error::SimError;
use fairway_core::state::SessionState;
use fairway_flight::session::GolfSession;

use crate::clubs::{Club, ShotParameterService, ShotParameters};
use crate::coords::{RenderPoint, render_trajectory};
use crate::course::{CourseRepository, HoleInfo};
use crate::screen_flow::{ScreenFlow, ScreenState};

/// Hole-by-hole play: one shot per hole, intro card between holes.
pub struct Round {
    session: GolfSession,
    shots: ShotParameterService,
    screen: ScreenFlow,
    course: Box<dyn CourseRepository>,
    params: ShotParameters,
    hole_number: u32,
}

impl Round {
    /// Start on hole 1 with the session armed and the intro card showing.
    pub fn new(
        config: PhysicsConfig,
        shots: ShotParameterService,
        course: Box<dyn CourseRepository>,
    ) -> Result<Self, SimError> {
        let mut round = Self {
            session: GolfSession::new(config)?,
            shots,
            screen: ScreenFlow::new(),
            course,
            params: ShotParameters::default(),
            hole_number: 1,
        };
        round.session.arm_shot();
        round.sync_screen();
        Ok(round)
    }

    pub fn session(&self) -> &GolfSession {
        &self.session
    }

    pub fn screen(&self) -> &ScreenFlow {
        &self.screen
    }

    pub fn params(&self) -> &ShotParameters {
        &self.params
    }

    /// For the input layer to dial in club, power, and aim.
    pub fn params_mut(&mut self) -> &mut ShotParameters {
        &mut self.params
    }

    pub fn selected_club(&self) -> &Club {
        self.shots.club(self.params.club_index)
    }

    pub fn club_count(&self) -> usize {
        self.shots.clubs().len()
    }

    pub fn hole_number(&self) -> u32 {
        self.hole_number
    }

    pub fn current_hole(&self) -> HoleInfo {
        self.course.load_hole(self.hole_number)
    }

    /// Dismiss the intro card.
    pub fn start_hole(&mut self) -> bool {
        self.screen.advance_from_intro()
    }

    /// Swing with the current parameters. Refused on the intro card or
    /// when the session is not armed.
    pub fn take_shot(&mut self) -> bool {
        if self.screen.screen() == ScreenState::Intro {
            return false;
        }
        if !self.session.attempt_shot_with(&self.shots, &self.params) {
            return false;
        }

        tracing::info!(
            hole = self.hole_number,
            club = %self.selected_club().name,
            power = self.params.power,
            aim_deg = self.params.aim_angle_deg,
            "Swing"
        );
        self.screen.on_shot();
        self.sync_screen();
        true
    }

    /// Per-frame update. Returns the result on the frame the ball lands.
    pub fn update(&mut self, dt: f64) -> Option<ShotResult> {
        let result = self.session.advance_physics(dt);
        self.sync_screen();
        result
    }

    /// From the result screen: re-arm, move to the next hole, show its intro.
    pub fn next_hole(&mut self) -> bool {
        if self.session.state() != SessionState::Result {
            return false;
        }
        self.session.acknowledge_result();
        self.hole_number += 1;
        self.params.reset_swing();
        self.screen.on_next_hole();
        self.sync_screen();
        tracing::debug!(hole = self.hole_number, "Advanced to next hole");
        true
    }

    /// The current flight in render coordinates.
    pub fn render_path(&self) -> Vec<RenderPoint> {
        render_trajectory(self.session.trajectory())
    }

    fn sync_screen(&mut self) {
        self.screen.on_state_change(self.session.state());
    }
}
