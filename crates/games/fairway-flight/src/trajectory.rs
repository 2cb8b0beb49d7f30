use serde::{Deserialize, Serialize};

use fairway_core::ball::BallState;

/// Chronological samples recorded during one shot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    points: Vec<BallState>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: BallState) {
        self.points.push(state);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[BallState] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&BallState> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&BallState> {
        self.points.last()
    }

    /// Highest sample of the flight (first one wins on ties).
    pub fn apex(&self) -> Option<&BallState> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if b.position.z >= p.position.z => Some(b),
            _ => Some(p),
        })
    }
}
