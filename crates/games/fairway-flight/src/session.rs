use fairway_core::ball::{BallState, LaunchCondition, ShotResult, Touchdown};
use fairway_core::config::PhysicsConfig;
use fairway_core::error::SimError;
use fairway_core::state::SessionState;
use fairway_core::translator::ShotTranslator;

use crate::physics::FlightIntegrator;
use crate::state_machine::SessionStateMachine;
use crate::trajectory::Trajectory;

/// One play session: a state machine and the integrator it gates.
///
/// This is the surface the render/input layer talks to. It issues the
/// commands below once per frame and reads the query methods to draw.
#[derive(Debug, Clone)]
pub struct GolfSession {
    machine: SessionStateMachine,
    physics: FlightIntegrator,
}

impl GolfSession {
    pub fn new(config: PhysicsConfig) -> Result<Self, SimError> {
        Ok(Self {
            machine: SessionStateMachine::new(),
            physics: FlightIntegrator::new(config)?,
        })
    }

    pub fn state(&self) -> SessionState {
        self.machine.state()
    }

    pub fn config(&self) -> &PhysicsConfig {
        self.physics.config()
    }

    pub fn ball(&self) -> &BallState {
        self.physics.ball()
    }

    pub fn trajectory(&self) -> &Trajectory {
        self.physics.trajectory()
    }

    /// Result of the current (or just finished) shot; zero before any shot.
    pub fn result(&self) -> ShotResult {
        self.physics.calculate_result()
    }

    pub fn touchdown(&self) -> Option<Touchdown> {
        self.physics.touchdown()
    }

    pub fn can_start_shot(&self) -> bool {
        self.machine.can_start_shot()
    }

    pub fn arm_shot(&mut self) {
        self.machine.arm();
    }

    /// Start a shot with a ready-made launch. False if not armed or the
    /// launch was rejected.
    pub fn attempt_start_shot(&mut self, launch: &LaunchCondition) -> bool {
        if !self.machine.can_start_shot() {
            tracing::debug!(state = %self.machine.state(), "Shot attempt ignored");
            return false;
        }
        self.machine.start_flight(&mut self.physics, launch)
    }

    /// Start a shot from player-facing parameters.
    ///
    /// The translator is only consulted once the session is armed.
    pub fn attempt_shot_with<T: ShotTranslator>(&mut self, translator: &T, params: &T::Params) -> bool {
        if !self.machine.can_start_shot() {
            tracing::debug!(state = %self.machine.state(), "Shot attempt ignored");
            return false;
        }
        let launch = translator.launch_condition(params);
        self.machine.start_flight(&mut self.physics, &launch)
    }

    /// Feed one frame of wall time to the physics while in flight.
    ///
    /// Returns the shot result on the frame the ball comes down.
    pub fn advance_physics(&mut self, dt: f64) -> Option<ShotResult> {
        if self.machine.state() != SessionState::InFlight {
            return None;
        }

        self.physics.step(dt);
        if !self.physics.has_landed() {
            return None;
        }

        self.machine.finish_flight();
        let result = self.physics.calculate_result();
        tracing::info!(
            carry_m = result.carry_m,
            lateral_m = result.lateral_m,
            flight_time_s = result.flight_time_s,
            "Shot complete"
        );
        Some(result)
    }

    /// Leave the result screen: clear the flight and re-arm.
    pub fn acknowledge_result(&mut self) {
        if self.machine.state() != SessionState::Result {
            return;
        }
        self.physics.reset();
        self.machine.arm();
    }

    pub fn reset_session(&mut self) {
        self.physics.reset();
        self.machine.reset();
    }
}
