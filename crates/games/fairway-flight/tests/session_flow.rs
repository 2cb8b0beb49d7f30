mod common;

use fairway_core::{LaunchCondition, PhysicsConfig, SessionState, Touchdown, Vector3};
use fairway_flight::GolfSession;

use common::{FRAME_60HZ, armed, play, reference_config};

#[test]
fn reference_chip_lands_about_ten_meters_out() {
    let mut session = armed(reference_config());
    let result = play(&mut session, &LaunchCondition::new(10.0, 45.0), FRAME_60HZ);

    assert!(
        (result.carry_m - 10.2).abs() / 10.2 < 0.05,
        "carry = {}",
        result.carry_m
    );
    assert!(result.lateral_m.abs() < 1e-9);
    assert_eq!(result.landing_position.z, 0.0);
    assert_eq!(session.state(), SessionState::Result);
}

#[test]
fn translated_launch_drives_the_session() {
    use fairway_core::translator::DirectLaunch;

    let mut session = armed(reference_config());
    assert!(session.attempt_shot_with(&DirectLaunch, &LaunchCondition::new(10.0, 45.0)));
    let landed = (0..1_000).find_map(|_| session.advance_physics(FRAME_60HZ));
    assert!(landed.is_some());
    assert_eq!(session.state(), SessionState::Result);
}

#[test]
fn start_from_idle_is_refused() {
    let mut session = GolfSession::new(reference_config()).unwrap();
    assert!(!session.attempt_start_shot(&LaunchCondition::new(10.0, 45.0)));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn render_rate_does_not_change_the_shot() {
    let launch = LaunchCondition::new(55.0, 15.0);
    let config = PhysicsConfig::default();

    let mut slow = armed(config.clone());
    let mut fast = armed(config);
    let a = play(&mut slow, &launch, 1.0 / 30.0);
    let b = play(&mut fast, &launch, 1.0 / 144.0);

    assert!((a.carry_m - b.carry_m).abs() < 1e-6);
    assert!((a.flight_time_s - b.flight_time_s).abs() < 1e-6);
    assert_eq!(slow.trajectory().len(), fast.trajectory().len());
}

#[test]
fn consecutive_shots_do_not_share_state() {
    let mut session = armed(reference_config());
    let first = play(&mut session, &LaunchCondition::new(10.0, 45.0), FRAME_60HZ);
    session.acknowledge_result();
    assert_eq!(session.state(), SessionState::Armed);
    assert!(session.trajectory().is_empty());

    let second = play(&mut session, &LaunchCondition::new(10.0, 45.0), FRAME_60HZ);
    assert_eq!(first, second);

    let first_sample = session.trajectory().first().unwrap();
    assert_eq!(first_sample.t_sec, 0.0);
    assert_eq!(first_sample.position, Vector3::ZERO);
}

#[test]
fn runaway_shot_reaches_result_screen() {
    let config = PhysicsConfig {
        drag_coefficient: 0.02,
        wind_velocity: Vector3::new(0.0, 0.0, 50.0),
        max_flight_time_sec: 3.0,
        ..reference_config()
    };
    let mut session = armed(config);
    let result = play(&mut session, &LaunchCondition::new(20.0, 60.0), FRAME_60HZ);

    assert_eq!(session.state(), SessionState::Result);
    assert_eq!(session.touchdown(), Some(Touchdown::FlightTimeLimit));
    assert_eq!(result.landing_position.z, 0.0);
    assert!(result.flight_time_s >= 3.0);
}

#[test]
fn reset_from_result_then_rearm() {
    let mut session = armed(reference_config());
    play(&mut session, &LaunchCondition::new(10.0, 45.0), FRAME_60HZ);

    session.reset_session();
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.result().carry_m, 0.0);

    session.arm_shot();
    assert!(session.can_start_shot());
}
