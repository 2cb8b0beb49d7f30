//! Physics frame -> render frame mapping.
//!
//! Physics puts the tee at the origin. The renderer centers the green on
//! screen, which puts the tee `TEE_RENDER_OFFSET_Y` meters "behind" center.
//! Lateral and height axes are shared.

use serde::{Deserialize, Serialize};

use fairway_core::vector::Vector3;
use fairway_flight::trajectory::Trajectory;

/// Downfield position of the tee in render space (meters).
pub const TEE_RENDER_OFFSET_Y: f32 = -17.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RenderPoint {
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

pub fn to_render(position: Vector3) -> RenderPoint {
    RenderPoint {
        x: position.x as f32,
        y: position.y as f32 + TEE_RENDER_OFFSET_Y,
        height: position.z as f32,
    }
}

pub fn render_trajectory(trajectory: &Trajectory) -> Vec<RenderPoint> {
    trajectory
        .points()
        .iter()
        .map(|p| to_render(p.position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::ball::BallState;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn tee_maps_to_offset() {
        let p = to_render(Vector3::ZERO);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, TEE_RENDER_OFFSET_Y);
        assert_eq!(p.height, 0.0);
    }

    #[test]
    fn downfield_and_lateral_points() {
        let p = to_render(Vector3::new(0.0, 100.0, 10.0));
        assert!(close(p.y, 82.5));
        assert!(close(p.height, 10.0));

        let left = to_render(Vector3::new(-5.0, 50.0, 2.0));
        let right = to_render(Vector3::new(5.0, 50.0, 2.0));
        assert!(close(left.x, -5.0) && close(right.x, 5.0));
        assert!(close(left.y, 32.5) && close(right.y, 32.5));
    }

    #[test]
    fn trajectory_maps_every_sample_in_order() {
        let mut traj = Trajectory::new();
        traj.push(BallState::new(0.0, Vector3::ZERO, Vector3::ZERO));
        traj.push(BallState::new(1.0, Vector3::new(1.0, 10.0, 5.0), Vector3::ZERO));
        traj.push(BallState::new(2.0, Vector3::new(2.0, 20.0, 8.0), Vector3::ZERO));

        let points = render_trajectory(&traj);
        assert_eq!(points.len(), 3);
        assert!(close(points[0].y, -17.5));
        assert!(close(points[1].x, 1.0) && close(points[1].y, -7.5) && close(points[1].height, 5.0));
        assert!(close(points[2].x, 2.0) && close(points[2].y, 2.5) && close(points[2].height, 8.0));
    }

    #[test]
    fn simulated_flight_starts_at_tee_and_ends_on_ground() {
        use fairway_core::test_helpers::{FRAME_60HZ, chip_launch, vacuum_config};
        use fairway_flight::physics::FlightIntegrator;
        use fairway_flight::test_helpers::fly_until_landed;

        let mut physics = FlightIntegrator::new(vacuum_config()).unwrap();
        physics.start_shot(&chip_launch()).unwrap();
        fly_until_landed(&mut physics, FRAME_60HZ, 1_000);

        let points = render_trajectory(physics.trajectory());
        assert_eq!(points.len(), physics.trajectory().len());
        assert_eq!(points[0].y, TEE_RENDER_OFFSET_Y);
        let last = points.last().unwrap();
        assert_eq!(last.height, 0.0);
        assert!(last.y > TEE_RENDER_OFFSET_Y + 9.0);
    }

    #[test]
    fn empty_trajectory_maps_to_nothing() {
        assert!(render_trajectory(&Trajectory::new()).is_empty());
    }
}
