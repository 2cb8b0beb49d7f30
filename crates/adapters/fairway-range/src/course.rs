use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Par used when a hole has no data.
pub const DEFAULT_PAR: u8 = 4;
/// Tee-to-pin distance used when a hole has no data (meters).
pub const DEFAULT_PIN_DISTANCE_M: f64 = 17.5;

/// What the intro screen shows for a hole.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HoleInfo {
    pub hole_number: u32,
    pub par: u8,
    pub pin_distance_m: f64,
}

impl HoleInfo {
    pub fn fallback(hole_number: u32) -> Self {
        Self {
            hole_number,
            par: DEFAULT_PAR,
            pin_distance_m: DEFAULT_PIN_DISTANCE_M,
        }
    }
}

/// Source of per-hole data. Lookups never fail; unknown holes get defaults.
pub trait CourseRepository {
    fn load_hole(&self, hole_number: u32) -> HoleInfo;
}

#[derive(Debug, Clone, Deserialize)]
struct HoleEntry {
    hole: u32,
    #[serde(default)]
    par: u8,
    #[serde(default)]
    pin_distance_m: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CourseFile {
    #[serde(default)]
    holes: Vec<HoleEntry>,
}

/// Hole table read from a `[[holes]]` TOML file.
#[derive(Debug, Clone, Default)]
pub struct TomlCourseRepository {
    holes: Vec<HoleEntry>,
}

impl TomlCourseRepository {
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CourseFile =
            toml::from_str(contents).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { holes: file.holes })
    }

    /// Open a course file. A missing file yields an empty course (all
    /// holes at defaults); a malformed one is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Course file not found, using defaults");
                Ok(Self::default())
            },
            Err(e) => Err(CatalogError::Read(format!("{}: {e}", path.display()))),
        }
    }

    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }
}

impl CourseRepository for TomlCourseRepository {
    fn load_hole(&self, hole_number: u32) -> HoleInfo {
        let mut info = HoleInfo::fallback(hole_number);
        if let Some(entry) = self.holes.iter().find(|h| h.hole == hole_number) {
            if entry.par > 0 {
                info.par = entry.par;
            }
            if entry.pin_distance_m > 0.0 {
                info.pin_distance_m = entry.pin_distance_m;
            }
        }
        info
    }
}

/// Every hole at the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCourse;

impl CourseRepository for DefaultCourse {
    fn load_hole(&self, hole_number: u32) -> HoleInfo {
        HoleInfo::fallback(hole_number)
    }
}
