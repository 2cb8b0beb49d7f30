#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    NonPositiveTimestep(f64),
    NegativeDrag(f64),
    NonPositiveGravity(f64),
    NonPositiveFlightLimit(f64),
    /// Flight limit over fixed step exceeds the sub-step budget.
    FlightStepBudget(f64),
    /// A named config field holds NaN or an infinity.
    NonFinite(&'static str),
    InvalidLaunch(String),
    ConfigRead(String),
    ConfigParse(String),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveTimestep(dt) => {
                write!(f, "fixed timestep must be > 0 seconds, got {dt}")
            },
            Self::NegativeDrag(k) => write!(f, "drag coefficient must be >= 0, got {k}"),
            Self::NonPositiveGravity(g) => write!(f, "gravity must be > 0 m/s^2, got {g}"),
            Self::NonPositiveFlightLimit(t) => {
                write!(f, "max flight time must be > 0 seconds, got {t}")
            },
            Self::FlightStepBudget(steps) => write!(
                f,
                "max flight time allows {steps} fixed steps, budget is {}",
                crate::config::MAX_FLIGHT_STEPS
            ),
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
            Self::InvalidLaunch(m) => write!(f, "invalid launch condition: {m}"),
            Self::ConfigRead(m) => write!(f, "config read error: {m}"),
            Self::ConfigParse(m) => write!(f, "config parse error: {m}"),
        }
    }
}

impl std::error::Error for SimError {}
