use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, info};

use orbital_sim::clock::FramePacer;
use orbital_sim::config::SimConfig;
use orbital_sim::consts::{
    ASTEROIDS_MEAN_RADIUS, ASTEROID_COUNT, DEFAULT_DAYS_PER_SECOND, DEFAULT_FPS, MIN_SEPARATION,
    NEWTON_G,
};
use orbital_sim::display::iso_date;
use orbital_sim::ephemerides::Catalog;
use orbital_sim::logger::Logger;
use orbital_sim::math::random;
use orbital_sim::sim::OrbitalSim;

/// Runs an orbital simulation without a window, printing a report every so
/// often.
#[derive(Debug, Parser)]
#[command(name = "orbital-sim")]
struct Args {
    /// Star system to start from: solar-system or alpha-centauri
    #[arg(long, default_value_t = Catalog::SolarSystem)]
    catalog: Catalog,

    /// Number of asteroids to scatter around the heaviest body
    #[arg(long, default_value_t = ASTEROID_COUNT)]
    asteroids: usize,

    /// Steps per real second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Simulated days per real second; sets the time step together with --fps
    #[arg(long, default_value_t = DEFAULT_DAYS_PER_SECOND)]
    days_per_second: f64,

    /// Seconds per step, overriding --days-per-second
    #[arg(long)]
    time_step: Option<f64>,

    #[arg(long, default_value_t = NEWTON_G)]
    gravitational_constant: f64,

    /// Mean radius of the asteroid belt, in meters
    #[arg(long, default_value_t = ASTEROIDS_MEAN_RADIUS)]
    belt_radius: f64,

    #[arg(long, default_value_t = MIN_SEPARATION)]
    min_separation: f64,

    /// Number of steps to run
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print a report every this many steps (0 for only the last)
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Seed for the asteroid generator
    #[arg(long)]
    seed: Option<u64>,

    /// Run at --fps instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> SimConfig {
        let mut config = SimConfig::from_rate(self.fps, self.days_per_second);
        if let Some(time_step) = self.time_step {
            config.time_step = time_step;
        }
        SimConfig {
            catalog: self.catalog,
            asteroid_count: self.asteroids,
            gravitational_constant: self.gravitational_constant,
            asteroid_belt_radius: self.belt_radius,
            min_separation: self.min_separation,
            ..config
        }
    }
}

fn print_report(sim: &OrbitalSim, fps: Option<f64>) {
    let orrery = sim.orrery();
    let date = iso_date(sim.elapsed_time()).unwrap_or_else(|| "----------".to_owned());
    let momentum = orrery.total_momentum();

    print!(
        "{} step {:>6}  bodies {}  |p| {:.6e} kg m/s  E {:.6e} J",
        date,
        sim.steps_taken(),
        orrery.len(),
        momentum.norm(),
        orrery.total_energy(sim.newton_g()),
    );
    match fps {
        Some(fps) => println!("  {:.1} fps", fps),
        None => println!(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = Logger::init(Logger::level_for_verbosity(args.verbose)) {
        eprintln!("Could not install logger: {}", e);
    }
    random::init_global(args.seed);

    let config = args.to_config();
    let mut sim = match OrbitalSim::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Could not set up the simulation: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Simulating {} for {} steps", config.catalog, args.frames);

    let mut pacer = args.realtime.then(|| FramePacer::new(config.fps));

    print_report(&sim, None);
    for frame in 1..=args.frames {
        if let Err(e) = sim.step() {
            error!("Simulation stopped: {}", e);
            print_report(&sim, None);
            return ExitCode::FAILURE;
        }

        if let Some(pacer) = pacer.as_mut() {
            pacer.wait();
        }

        let due = args.report_every > 0 && frame % args.report_every == 0;
        if due || frame == args.frames {
            print_report(&sim, pacer.as_ref().map(FramePacer::measured_fps));
        }
    }

    ExitCode::SUCCESS
}
