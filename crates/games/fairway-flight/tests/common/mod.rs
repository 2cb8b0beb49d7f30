use fairway_core::{LaunchCondition, PhysicsConfig, ShotResult, Vector3};
use fairway_flight::GolfSession;

pub const FRAME_60HZ: f64 = 1.0 / 60.0;

/// The reference scenario: standard gravity, no drag, still air, 240 Hz.
pub fn reference_config() -> PhysicsConfig {
    PhysicsConfig {
        gravity: 9.80665,
        drag_coefficient: 0.0,
        wind_velocity: Vector3::ZERO,
        dt_fixed_sec: 1.0 / 240.0,
        ..PhysicsConfig::default()
    }
}

pub fn armed(config: PhysicsConfig) -> GolfSession {
    let mut session = GolfSession::new(config).expect("test config must be valid");
    session.arm_shot();
    session
}

/// Launch from an armed session and run frames until the result arrives.
pub fn play(session: &mut GolfSession, launch: &LaunchCondition, frame_dt: f64) -> ShotResult {
    assert!(session.attempt_start_shot(launch), "session should be armed");
    for _ in 0..100_000 {
        if let Some(result) = session.advance_physics(frame_dt) {
            return result;
        }
    }
    panic!("shot never landed");
}
