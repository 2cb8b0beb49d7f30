use std::path::Path;

use serde::{Deserialize, Serialize};

use fairway_core::ball::LaunchCondition;
use fairway_core::translator::ShotTranslator;
use fairway_core::vector::Vector3;

use crate::error::CatalogError;

/// Lowest power a player can dial in.
pub const MIN_POWER: f64 = 0.1;
/// Full swing.
pub const MAX_POWER: f64 = 1.0;
/// Power a fresh swing starts at.
pub const DEFAULT_POWER: f64 = 0.7;
/// Aim is limited to this many degrees either side of the target line.
pub const MAX_AIM_DEG: f64 = 30.0;

/// Launch characteristics of one club at full power.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Club {
    pub name: String,
    pub base_speed_mps: f64,
    pub base_angle_deg: f64,
    /// Typical carry, for display.
    pub distance_avg_m: f64,
}

impl Club {
    pub fn new(name: &str, base_speed_mps: f64, base_angle_deg: f64, distance_avg_m: f64) -> Self {
        Self {
            name: name.to_string(),
            base_speed_mps,
            base_angle_deg,
            distance_avg_m,
        }
    }
}

/// Immutable, non-empty bag of clubs indexed by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubTable {
    clubs: Vec<Club>,
}

#[derive(Deserialize)]
struct ClubFile {
    clubs: Vec<Club>,
}

impl Default for ClubTable {
    fn default() -> Self {
        Self {
            clubs: vec![
                Club::new("Driver", 68.0, 12.0, 250.0),
                Club::new("3-Wood", 55.0, 15.0, 210.0),
                Club::new("5-Iron", 48.0, 18.0, 180.0),
                Club::new("7-Iron", 42.0, 21.0, 155.0),
                Club::new("9-Iron", 38.0, 24.0, 130.0),
                Club::new("Putter", 2.0, 0.0, 3.0),
            ],
        }
    }
}

impl ClubTable {
    pub fn new(clubs: Vec<Club>) -> Result<Self, CatalogError> {
        if clubs.is_empty() {
            return Err(CatalogError::EmptyClubTable);
        }
        Ok(Self { clubs })
    }

    /// Parse a `[[clubs]]` TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: ClubFile =
            toml::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.clubs)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Read(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Club at `index`, or the first club when out of range.
    pub fn get(&self, index: usize) -> &Club {
        self.clubs.get(index).unwrap_or(&self.clubs[0])
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}

/// What the player has dialled in for the next swing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShotParameters {
    pub club_index: usize,
    /// Fraction of full power, `MIN_POWER..=MAX_POWER`.
    pub power: f64,
    /// Degrees off the target line, positive = right.
    pub aim_angle_deg: f64,
}

impl Default for ShotParameters {
    fn default() -> Self {
        Self {
            club_index: 0,
            power: DEFAULT_POWER,
            aim_angle_deg: 0.0,
        }
    }
}

impl ShotParameters {
    pub fn next_club(&mut self, club_count: usize) {
        if club_count > 0 {
            self.club_index = (self.club_index % club_count + 1) % club_count;
        }
    }

    pub fn prev_club(&mut self, club_count: usize) {
        if club_count > 0 {
            self.club_index = (self.club_index % club_count + club_count - 1) % club_count;
        }
    }

    pub fn adjust_power(&mut self, delta: f64) {
        self.power = (self.power + delta).clamp(MIN_POWER, MAX_POWER);
    }

    pub fn adjust_aim(&mut self, delta_deg: f64) {
        self.aim_angle_deg = (self.aim_angle_deg + delta_deg).clamp(-MAX_AIM_DEG, MAX_AIM_DEG);
    }

    /// Back to default power and a straight aim; the club stays selected.
    pub fn reset_swing(&mut self) {
        self.power = DEFAULT_POWER;
        self.aim_angle_deg = 0.0;
    }
}

/// Resolves club, power, and aim into a launch.
#[derive(Debug, Clone, Default)]
pub struct ShotParameterService {
    clubs: ClubTable,
}

impl ShotParameterService {
    pub fn new(clubs: ClubTable) -> Self {
        Self { clubs }
    }

    pub fn clubs(&self) -> &ClubTable {
        &self.clubs
    }

    pub fn club(&self, index: usize) -> &Club {
        self.clubs.get(index)
    }
}

impl ShotTranslator for ShotParameterService {
    type Params = ShotParameters;

    fn launch_condition(&self, params: &ShotParameters) -> LaunchCondition {
        let club = self.clubs.get(params.club_index);
        let speed = club.base_speed_mps * params.power.clamp(0.0, MAX_POWER);
        let elevation = club.base_angle_deg.to_radians();
        let aim = params.aim_angle_deg.to_radians();

        let mut launch = LaunchCondition::new(speed, club.base_angle_deg);
        launch.initial_velocity = Vector3::new(
            speed * aim.sin() * elevation.cos(),
            speed * aim.cos() * elevation.cos(),
            speed * elevation.sin(),
        );
        launch
    }
}
