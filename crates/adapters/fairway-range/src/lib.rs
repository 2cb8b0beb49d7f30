pub mod clubs;
pub mod coords;
pub mod course;
pub mod error;
pub mod round;
pub mod screen_flow;

pub use clubs::{Club, ClubTable, ShotParameterService, ShotParameters};
pub use course::{CourseRepository, DefaultCourse, HoleInfo, TomlCourseRepository};
pub use error::CatalogError;
pub use round::Round;
pub use screen_flow::{ScreenFlow, ScreenState, ViewMode};
