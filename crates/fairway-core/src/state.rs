use serde::{Deserialize, Serialize};

/// Phase of a play session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No active shot or hole setup.
    #[default]
    Idle,
    /// Parameters chosen, ready to shoot.
    Armed,
    /// Physics is advancing.
    InFlight,
    /// Shot complete, waiting for acknowledgment.
    Result,
}

impl SessionState {
    pub const ALL: [Self; 4] = [Self::Idle, Self::Armed, Self::InFlight, Self::Result];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Armed => "Armed",
            Self::InFlight => "InFlight",
            Self::Result => "Result",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
