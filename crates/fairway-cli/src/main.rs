use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fairway_core::{PhysicsConfig, ShotResult, Touchdown};
use fairway_range::{
    ClubTable, CourseRepository, DefaultCourse, HoleInfo, Round, ShotParameterService,
    TomlCourseRepository,
};

const DEFAULT_FPS: f64 = 60.0;

#[derive(Debug)]
struct Args {
    club: usize,
    power: f64,
    aim_deg: f64,
    fps: f64,
    config: Option<String>,
    clubs: Option<String>,
    course: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            club: 0,
            power: fairway_range::clubs::DEFAULT_POWER,
            aim_deg: 0.0,
            fps: DEFAULT_FPS,
            config: None,
            clubs: None,
            course: None,
        }
    }
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Args {
    let mut args = Args::default();
    for arg in argv {
        let Some((key, value)) = arg.split_once('=') else {
            tracing::warn!(%arg, "Ignoring argument without a value");
            continue;
        };
        match key {
            "--club" => args.club = value.parse().unwrap_or(args.club),
            "--power" => args.power = value.parse().unwrap_or(args.power),
            "--aim" => args.aim_deg = value.parse().unwrap_or(args.aim_deg),
            "--fps" => {
                args.fps = value
                    .parse()
                    .ok()
                    .filter(|f: &f64| f.is_finite() && *f > 0.0)
                    .unwrap_or(DEFAULT_FPS)
            },
            "--config" => args.config = Some(value.to_string()),
            "--clubs" => args.clubs = Some(value.to_string()),
            "--course" => args.course = Some(value.to_string()),
            _ => tracing::warn!(%key, "Unknown argument"),
        }
    }
    args
}

#[derive(Serialize)]
struct ShotSummary<'a> {
    hole: HoleInfo,
    club: &'a str,
    power: f64,
    aim_deg: f64,
    result: ShotResult,
    touchdown: Option<Touchdown>,
    samples: usize,
    apex_m: f64,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => PhysicsConfig::load_from(path)?,
        None => PhysicsConfig::load()?,
    };
    let clubs = match &args.clubs {
        Some(path) => ClubTable::load_from(path)?,
        None => ClubTable::default(),
    };
    let course: Box<dyn CourseRepository> = match &args.course {
        Some(path) => Box::new(TomlCourseRepository::open(path)?),
        None => Box::new(DefaultCourse),
    };

    // The flight time limit guarantees a landing within this many frames.
    let max_frames = ((config.max_flight_time_sec + 1.0) * args.fps).ceil() as usize;
    let frame_dt = 1.0 / args.fps;

    let mut round = Round::new(config, ShotParameterService::new(clubs), course)?;
    round.start_hole();
    {
        let params = round.params_mut();
        params.club_index = args.club;
        params.power = args.power;
        params.aim_angle_deg = args.aim_deg;
        // clamp into the playable range
        params.adjust_power(0.0);
        params.adjust_aim(0.0);
    }

    if !round.take_shot() {
        return Err("shot could not be started".into());
    }
    let result = (0..max_frames)
        .find_map(|_| round.update(frame_dt))
        .ok_or("shot did not land")?;

    let session = round.session();
    let summary = ShotSummary {
        hole: round.current_hole(),
        club: &round.selected_club().name,
        power: round.params().power,
        aim_deg: round.params().aim_angle_deg,
        result,
        touchdown: session.touchdown(),
        samples: session.trajectory().len(),
        apex_m: session
            .trajectory()
            .apex()
            .map(|s| s.position.z)
            .unwrap_or(0.0),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1));
    tracing::debug!(?args, "Fairway starting");

    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "Simulation failed");
        std::process::exit(1);
    }
}
