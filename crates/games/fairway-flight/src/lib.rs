pub mod physics;
pub mod session;
pub mod state_machine;
pub mod trajectory;

pub use physics::FlightIntegrator;
pub use session::GolfSession;
pub use state_machine::SessionStateMachine;
pub use trajectory::Trajectory;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use fairway_core::ball::ShotResult;

    use crate::physics::FlightIntegrator;
    use crate::session::GolfSession;

    /// Step `physics` with fixed frames until it lands. Returns frames used.
    pub fn fly_until_landed(physics: &mut FlightIntegrator, frame_dt: f64, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if physics.has_landed() {
                return frame;
            }
            physics.step(frame_dt);
        }
        max_frames
    }

    /// Advance an in-flight session until it reports a result.
    pub fn advance_until_result(
        session: &mut GolfSession,
        frame_dt: f64,
        max_frames: usize,
    ) -> Option<ShotResult> {
        (0..max_frames).find_map(|_| session.advance_physics(frame_dt))
    }
}
