use crate::ball::LaunchCondition;

/// Turns player-facing shot choices into a launch the physics can consume.
///
/// Implementations own whatever club or aim semantics they need; the
/// simulation only ever sees the resulting [`LaunchCondition`].
pub trait ShotTranslator {
    /// Player-facing shot parameters (club, power, aim, ...).
    type Params;

    fn launch_condition(&self, params: &Self::Params) -> LaunchCondition;
}

/// Passes a ready-made launch through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLaunch;

impl ShotTranslator for DirectLaunch {
    type Params = LaunchCondition;

    fn launch_condition(&self, params: &LaunchCondition) -> LaunchCondition {
        *params
    }
}
