use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::vector::Vector3;

/// Kinematic state of the ball at one instant of a shot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BallState {
    /// Seconds since launch.
    pub t_sec: f64,
    pub position: Vector3,
    pub velocity: Vector3,
    /// Carried along for display; no force depends on it.
    pub spin: Vector3,
    pub in_flight: bool,
}

impl BallState {
    pub fn new(t_sec: f64, position: Vector3, velocity: Vector3) -> Self {
        Self {
            t_sec,
            position,
            velocity,
            spin: Vector3::ZERO,
            in_flight: true,
        }
    }
}

/// Initial conditions for one shot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LaunchCondition {
    pub launch_speed_mps: f64,
    /// Elevation above the ground plane, conventionally 0..=90.
    pub launch_angle_deg: f64,
    pub initial_spin: Vector3,
    /// Launch velocity as resolved by whoever built the condition.
    pub initial_velocity: Vector3,
}

impl LaunchCondition {
    /// A launch straight down the aim line: velocity lies in the y-z plane.
    pub fn new(launch_speed_mps: f64, launch_angle_deg: f64) -> Self {
        Self {
            launch_speed_mps,
            launch_angle_deg,
            initial_spin: Vector3::ZERO,
            initial_velocity: planar_velocity(launch_speed_mps, launch_angle_deg),
        }
    }

    pub fn with_spin(mut self, spin: Vector3) -> Self {
        self.initial_spin = spin;
        self
    }

    /// Check that speed and angle describe a physical launch.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.launch_speed_mps.is_finite() || !self.launch_angle_deg.is_finite() {
            return Err(SimError::InvalidLaunch(
                "speed and angle must be finite".to_string(),
            ));
        }
        if self.launch_speed_mps < 0.0 {
            return Err(SimError::InvalidLaunch(format!(
                "speed must be >= 0, got {}",
                self.launch_speed_mps
            )));
        }
        Ok(())
    }
}

/// Decompose speed and elevation into a velocity with zero lateral component.
pub fn planar_velocity(speed_mps: f64, angle_deg: f64) -> Vector3 {
    let angle = angle_deg.to_radians();
    Vector3::new(0.0, speed_mps * angle.cos(), speed_mps * angle.sin())
}

/// Summary of a completed shot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ShotResult {
    /// Ground-plane distance from launch point to landing point.
    pub carry_m: f64,
    /// Same as carry; there is no roll model.
    pub total_m: f64,
    /// Positive = right of the aim line.
    pub lateral_m: f64,
    pub flight_time_s: f64,
    pub landing_position: Vector3,
}

/// How a shot came back to the ground.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Touchdown {
    /// Height reached zero after launch.
    Ground,
    /// The flight time limit expired first and the ball was put down.
    FlightTimeLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_velocity_decomposes_in_yz_plane() {
        let launch = LaunchCondition::new(10.0, 30.0);
        let v = launch.initial_velocity;
        assert_eq!(v.x, 0.0);
        assert!((v.y - 10.0 * 30f64.to_radians().cos()).abs() < 1e-12);
        assert!((v.z - 5.0).abs() < 1e-12);
        assert!((v.length() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn flat_launch_has_no_height_component() {
        let v = planar_velocity(20.0, 0.0);
        assert_eq!(v, Vector3::new(0.0, 20.0, 0.0));
    }

    #[test]
    fn negative_speed_is_invalid() {
        let launch = LaunchCondition::new(-1.0, 45.0);
        assert!(matches!(launch.validate(), Err(SimError::InvalidLaunch(_))));
    }

    #[test]
    fn nan_angle_is_invalid() {
        let launch = LaunchCondition::new(10.0, f64::NAN);
        assert!(launch.validate().is_err());
    }

    #[test]
    fn zero_speed_is_valid() {
        assert!(LaunchCondition::new(0.0, 45.0).validate().is_ok());
    }

    #[test]
    fn default_result_is_zero() {
        let result = ShotResult::default();
        assert_eq!(result.carry_m, 0.0);
        assert_eq!(result.total_m, 0.0);
        assert_eq!(result.lateral_m, 0.0);
        assert_eq!(result.flight_time_s, 0.0);
        assert_eq!(result.landing_position, Vector3::ZERO);
    }
}
