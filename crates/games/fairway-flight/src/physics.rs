use fairway_core::ball::{BallState, LaunchCondition, ShotResult, Touchdown, planar_velocity};
use fairway_core::config::PhysicsConfig;
use fairway_core::error::SimError;
use fairway_core::vector::Vector3;

use crate::trajectory::Trajectory;

/// Every shot is launched from the tee at the origin.
pub const LAUNCH_ORIGIN: Vector3 = Vector3::ZERO;
/// Landing is only checked once flight time exceeds this fraction of a step.
const LANDING_EPSILON_STEPS: f64 = 0.1;

/// Fixed-timestep point-mass integrator for a single ball.
///
/// Real frame time is fed through an accumulator and consumed in
/// `dt_fixed_sec` sub-steps, so identical configs and launches produce
/// identical flights no matter how the caller slices its frames.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    config: PhysicsConfig,
    ball: BallState,
    trajectory: Trajectory,
    accumulator: f64,
    touchdown: Option<Touchdown>,
}

impl FlightIntegrator {
    /// Bind an integrator to a validated config.
    pub fn new(config: PhysicsConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            ball: BallState::default(),
            trajectory: Trajectory::new(),
            accumulator: 0.0,
            touchdown: None,
        })
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// How the last shot ended, once it has.
    pub fn touchdown(&self) -> Option<Touchdown> {
        self.touchdown
    }

    pub fn is_in_flight(&self) -> bool {
        self.ball.in_flight
    }

    pub fn has_landed(&self) -> bool {
        !self.ball.in_flight
    }

    /// Launch a new shot from the origin, discarding any previous flight.
    ///
    /// Speed and elevation are resolved in the y-z plane; the lateral
    /// launch component is always zero. A rejected launch leaves the
    /// integrator untouched.
    pub fn start_shot(&mut self, launch: &LaunchCondition) -> Result<(), SimError> {
        launch.validate()?;

        self.ball = BallState {
            t_sec: 0.0,
            position: LAUNCH_ORIGIN,
            velocity: planar_velocity(launch.launch_speed_mps, launch.launch_angle_deg),
            spin: launch.initial_spin,
            in_flight: true,
        };
        self.trajectory.clear();
        self.trajectory.push(self.ball);
        self.accumulator = 0.0;
        self.touchdown = None;

        tracing::debug!(
            speed_mps = launch.launch_speed_mps,
            angle_deg = launch.launch_angle_deg,
            "Shot started"
        );
        Ok(())
    }

    /// Advance by `dt_real` seconds of wall time.
    ///
    /// Runs as many fixed sub-steps as the accumulator allows, stopping at
    /// the first one that lands. Leftover time carries to the next call.
    pub fn step(&mut self, dt_real: f64) {
        if !self.ball.in_flight {
            return;
        }
        if !dt_real.is_finite() || dt_real <= 0.0 {
            return;
        }

        let dt = self.config.dt_fixed_sec;
        self.accumulator += dt_real;
        while self.accumulator >= dt {
            self.accumulator -= dt;
            self.integrate(dt);

            if let Some(kind) = self.touchdown_check() {
                self.land(kind);
                break;
            }
        }
    }

    /// Summarize the recorded flight. Zero-valued before any shot.
    pub fn calculate_result(&self) -> ShotResult {
        let (Some(first), Some(last)) = (self.trajectory.first(), self.trajectory.last()) else {
            return ShotResult::default();
        };

        let carry = (last.position - first.position).planar_length();
        ShotResult {
            carry_m: carry,
            total_m: carry,
            lateral_m: last.position.x,
            flight_time_s: last.t_sec,
            landing_position: last.position,
        }
    }

    /// Drop all ball state and return to the pre-shot condition.
    pub fn reset(&mut self) {
        self.ball = BallState::default();
        self.trajectory.clear();
        self.accumulator = 0.0;
        self.touchdown = None;
    }

    fn integrate(&mut self, dt: f64) {
        let accel = self.acceleration(&self.ball.velocity);
        self.ball.velocity += accel * dt;
        self.ball.position += self.ball.velocity * dt;
        self.ball.t_sec += dt;
        self.trajectory.push(self.ball);
    }

    /// Gravity along -z plus quadratic drag against the air-relative velocity.
    fn acceleration(&self, velocity: &Vector3) -> Vector3 {
        let gravity = Vector3::new(0.0, 0.0, -self.config.gravity);
        let v_rel = *velocity - self.config.wind_velocity;
        let drag = v_rel * (-self.config.drag_coefficient * v_rel.length());
        gravity + drag
    }

    fn touchdown_check(&self) -> Option<Touchdown> {
        let epsilon = self.config.dt_fixed_sec * LANDING_EPSILON_STEPS;
        if self.ball.position.z <= 0.0 && self.ball.t_sec > epsilon {
            return Some(Touchdown::Ground);
        }
        if self.ball.t_sec >= self.config.max_flight_time_sec {
            return Some(Touchdown::FlightTimeLimit);
        }
        None
    }

    fn land(&mut self, kind: Touchdown) {
        self.ball.position.z = 0.0;
        self.ball.velocity = Vector3::ZERO;
        self.ball.in_flight = false;
        self.trajectory.push(self.ball);
        self.touchdown = Some(kind);

        match kind {
            Touchdown::Ground => tracing::debug!(
                t_sec = self.ball.t_sec,
                y = self.ball.position.y,
                "Ball landed"
            ),
            Touchdown::FlightTimeLimit => tracing::warn!(
                t_sec = self.ball.t_sec,
                limit_sec = self.config.max_flight_time_sec,
                "Flight time limit reached, forcing landing"
            ),
        }
    }
}
