pub mod ball;
pub mod config;
pub mod error;
pub mod state;
pub mod translator;
pub mod vector;

pub use ball::{BallState, LaunchCondition, ShotResult, Touchdown};
pub use config::PhysicsConfig;
pub use error::SimError;
pub use state::SessionState;
pub use translator::ShotTranslator;
pub use vector::Vector3;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::ball::LaunchCondition;
    use crate::config::{PhysicsConfig, STANDARD_GRAVITY};
    use crate::vector::Vector3;

    /// Frame time of a 60 Hz render loop.
    pub const FRAME_60HZ: f64 = 1.0 / 60.0;

    /// Standard gravity, drag disabled, still air, 240 Hz steps.
    pub fn vacuum_config() -> PhysicsConfig {
        PhysicsConfig {
            gravity: STANDARD_GRAVITY,
            drag_coefficient: 0.0,
            wind_velocity: Vector3::ZERO,
            ..PhysicsConfig::default()
        }
    }

    /// Vacuum config with the given drag coefficient.
    pub fn drag_config(drag_coefficient: f64) -> PhysicsConfig {
        PhysicsConfig {
            drag_coefficient,
            ..vacuum_config()
        }
    }

    /// Drag plus a constant wind.
    pub fn windy_config(drag_coefficient: f64, wind: Vector3) -> PhysicsConfig {
        PhysicsConfig {
            drag_coefficient,
            wind_velocity: wind,
            ..vacuum_config()
        }
    }

    /// An updraft strong enough that drag outweighs gravity: the ball never
    /// comes down on its own.
    pub fn updraft_config(max_flight_time_sec: f64) -> PhysicsConfig {
        PhysicsConfig {
            drag_coefficient: 0.02,
            wind_velocity: Vector3::new(0.0, 0.0, 50.0),
            max_flight_time_sec,
            ..vacuum_config()
        }
    }

    /// 10 m/s at 45 degrees.
    pub fn chip_launch() -> LaunchCondition {
        LaunchCondition::new(10.0, 45.0)
    }

    /// Driver-like launch: 68 m/s at 12 degrees.
    pub fn drive_launch() -> LaunchCondition {
        LaunchCondition::new(68.0, 12.0)
    }
}
