use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::vector::Vector3;

/// Standard gravity (m/s^2).
pub const STANDARD_GRAVITY: f64 = 9.80665;
/// Default drag coefficient (unit mass, quadratic model).
pub const DEFAULT_DRAG: f64 = 0.02;
/// Default fixed integration step: 240 Hz.
pub const DEFAULT_DT_FIXED_SEC: f64 = 1.0 / 240.0;
/// Default cap on simulated flight time before a forced landing.
pub const DEFAULT_MAX_FLIGHT_TIME_SEC: f64 = 60.0;
/// Upper bound on fixed sub-steps in one flight (`max_flight_time_sec / dt_fixed_sec`).
/// Keeps a shot that never comes down from running or allocating without limit.
pub const MAX_FLIGHT_STEPS: f64 = 1_000_000.0;

/// Env var naming a TOML file to load the physics config from.
pub const CONFIG_ENV_VAR: &str = "FAIRWAY_PHYSICS_CONFIG";
/// Fallback config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/physics.toml";

/// Physics parameters for one integrator, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity magnitude (m/s^2), applied along -z.
    pub gravity: f64,
    /// Drag coefficient `k` in `a = -k * |v_rel| * v_rel`. Zero disables drag.
    pub drag_coefficient: f64,
    /// Constant wind velocity (m/s).
    pub wind_velocity: Vector3,
    /// Fixed integration sub-step (seconds).
    pub dt_fixed_sec: f64,
    /// Simulated flight time after which the ball is forced down.
    pub max_flight_time_sec: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            drag_coefficient: DEFAULT_DRAG,
            wind_velocity: Vector3::ZERO,
            dt_fixed_sec: DEFAULT_DT_FIXED_SEC,
            max_flight_time_sec: DEFAULT_MAX_FLIGHT_TIME_SEC,
        }
    }
}

impl PhysicsConfig {
    /// Reject configurations that would make the integrator misbehave.
    pub fn validate(&self) -> Result<(), SimError> {
        let scalars = [
            ("gravity", self.gravity),
            ("drag_coefficient", self.drag_coefficient),
            ("dt_fixed_sec", self.dt_fixed_sec),
            ("max_flight_time_sec", self.max_flight_time_sec),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(SimError::NonFinite(field));
            }
        }
        if !self.wind_velocity.is_finite() {
            return Err(SimError::NonFinite("wind_velocity"));
        }
        if self.dt_fixed_sec <= 0.0 {
            return Err(SimError::NonPositiveTimestep(self.dt_fixed_sec));
        }
        if self.drag_coefficient < 0.0 {
            return Err(SimError::NegativeDrag(self.drag_coefficient));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::NonPositiveGravity(self.gravity));
        }
        if self.max_flight_time_sec <= 0.0 {
            return Err(SimError::NonPositiveFlightLimit(self.max_flight_time_sec));
        }
        let steps = self.max_flight_time_sec / self.dt_fixed_sec;
        if steps > MAX_FLIGHT_STEPS {
            return Err(SimError::FlightStepBudget(steps));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, SimError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| SimError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SimError::ConfigRead(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Load from `FAIRWAY_PHYSICS_CONFIG`, then `config/physics.toml`,
    /// falling back to defaults when neither file exists.
    ///
    /// A file that exists but is malformed or invalid is an error.
    pub fn load() -> Result<Self, SimError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            tracing::debug!(%path, "Loading physics config from env");
            return Self::load_from(path);
        }
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            tracing::debug!(path = DEFAULT_CONFIG_PATH, "Loading physics config");
            return Self::load_from(DEFAULT_CONFIG_PATH);
        }
        tracing::debug!("No physics config file found, using defaults");
        Ok(Self::default())
    }
}
