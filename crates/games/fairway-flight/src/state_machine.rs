use fairway_core::ball::LaunchCondition;
use fairway_core::state::SessionState;

use crate::physics::FlightIntegrator;

/// Gatekeeper for when a shot may start and when physics runs.
///
/// Every operation is defined in every state: it either performs its one
/// documented transition or leaves the state alone.
#[derive(Debug, Clone, Default)]
pub struct SessionStateMachine {
    state: SessionState,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn can_start_shot(&self) -> bool {
        self.state == SessionState::Armed
    }

    /// Idle or Result -> Armed.
    pub fn arm(&mut self) {
        if matches!(self.state, SessionState::Idle | SessionState::Result) {
            self.commit(SessionState::Armed);
        }
    }

    /// Armed -> InFlight, launching `launch` on `physics`.
    ///
    /// The state only changes if the integrator accepted the launch.
    /// Returns whether the shot started.
    pub fn start_flight(&mut self, physics: &mut FlightIntegrator, launch: &LaunchCondition) -> bool {
        if !self.can_start_shot() {
            return false;
        }
        if let Err(e) = physics.start_shot(launch) {
            tracing::warn!(error = %e, "Shot launch rejected");
            return false;
        }
        self.commit(SessionState::InFlight);
        true
    }

    /// InFlight -> Result.
    pub fn finish_flight(&mut self) {
        if self.state == SessionState::InFlight {
            self.commit(SessionState::Result);
        }
    }

    /// Any -> Idle.
    pub fn reset(&mut self) {
        self.commit(SessionState::Idle);
    }

    fn commit(&mut self, to: SessionState) {
        tracing::debug!(from = %self.state, to = %to, "Session transition");
        self.state = to;
    }
}
