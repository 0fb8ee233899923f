use orbital_sim::consts::{get_circular_velocity, get_period, NEWTON_G, SECONDS_PER_DAY};
use orbital_sim::display::scaled_radius;
use orbital_sim::ephemerides::{dominant_body, Catalog};

use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    name: String,

    #[arg(long, default_value_t = Catalog::SolarSystem)]
    catalog: Catalog,
}

fn main() {
    let args = Args::parse();

    let bodies = args.catalog.bodies();
    let dominant = match dominant_body(bodies) {
        Some(dominant) => dominant,
        None => return,
    };

    let mut found = false;
    for body in bodies {
        if body.name.to_lowercase() != args.name.to_lowercase() {
            continue;
        }
        found = true;

        println!("Characteristics of {} ({})", body.name, args.catalog);
        println!("- Mass: {:e} kg", body.mass);
        println!("- Radius: {:e} m (drawn as {:.4})", body.radius, scaled_radius(body.radius));
        println!("- Color: {:?}", body.color);

        if body.name == dominant.name {
            println!("- Dominant body of the system");
            println!();
            continue;
        }

        // Relative to the dominant body, treating it as fixed
        let distance = (body.position() - dominant.position()).norm();
        let speed = (body.velocity() - dominant.velocity()).norm();
        let mu = NEWTON_G * (dominant.mass + body.mass);
        let circular = get_circular_velocity(distance, mu);

        println!("- Distance from {}: {:e} m", dominant.name, distance);
        println!("- Speed relative to {}: {:.1} m/s", dominant.name, speed);
        println!("- Circular speed at that distance: {:.1} m/s", circular);
        println!("- Speed / circular speed: {:.3}", speed / circular);
        println!(
            "- Circular period at that distance: {:.1} days",
            get_period(distance, mu) / SECONDS_PER_DAY
        );
        println!();
    }

    if !found {
        eprintln!("No body named {:?} in {}", args.name, args.catalog);
        std::process::exit(1);
    }
}
