use clap::{Parser, Subcommand};
use physbox_core::{LaunchState, SimParams, Simulation, VehicleParams, VehicleSim};

#[derive(Parser)]
#[command(name = "physbox")]
#[command(about = "physbox - educational 2-D particle and kinematics demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the balls-in-a-box simulation headless
    Balls {
        /// Number of balls
        #[arg(long, default_value_t = 6)]
        count: usize,
        /// Bound on the initial random velocity per axis, m/s
        #[arg(long, default_value_t = 5.0)]
        speed: f32,
        /// Downward acceleration, m/s^2
        #[arg(long, default_value_t = 9.81)]
        gravity: f32,
        /// Per-second velocity retention factor
        #[arg(long, default_value_t = 0.99)]
        atmosphere: f32,
        /// Wall-bounce velocity retention
        #[arg(long, default_value_t = 0.8)]
        energy_loss: f32,
        /// Boundary side length, m
        #[arg(long, default_value_t = 10.0)]
        area: f32,
        /// Simulated duration, s
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,
        /// Tick size, s
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the vehicle velocity-tracking model
    Vehicle {
        /// Target speed, m/s
        #[arg(long, default_value_t = 5.0)]
        target: f32,
        /// Simulated duration, s
        #[arg(long, default_value_t = 3.0)]
        seconds: f32,
        /// Tick size, s
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Cap on the per-tick delta, s
        #[arg(long)]
        max_dt: Option<f32>,
    },
    /// Run the vertical launch model until the ball lands
    Launch {
        /// Upward speed at launch, m/s
        #[arg(long, default_value_t = 5.0)]
        speed: f32,
        /// Give up if still airborne after this long, s
        #[arg(long, default_value_t = 30.0)]
        seconds: f32,
        /// Tick size, s
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Balls {
            count,
            speed,
            gravity,
            atmosphere,
            energy_loss,
            area,
            seconds,
            dt,
            seed,
        } => {
            let params = SimParams {
                gravity,
                atmosphere,
                energy_loss,
                area,
                ball_count: count,
                ball_speed: speed,
                ..SimParams::default()
            };
            run_balls(params, seconds, dt, seed)
        }
        Commands::Vehicle {
            target,
            seconds,
            dt,
            max_dt,
        } => {
            let params = VehicleParams {
                target_speed: target,
                max_dt,
            };
            run_vehicle(params, seconds, dt)
        }
        Commands::Launch { speed, seconds, dt } => run_launch(speed, seconds, dt),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Shared sanity checks for the loop controls
fn check_loop_args(seconds: f32, dt: f32) -> Result<(), Box<dyn std::error::Error>> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(format!("dt must be positive, got {}", dt).into());
    }
    if !(seconds.is_finite() && seconds >= 0.0) {
        return Err(format!("seconds must be non-negative, got {}", seconds).into());
    }
    Ok(())
}

fn run_balls(
    params: SimParams,
    seconds: f32,
    dt: f32,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    check_loop_args(seconds, dt)?;

    let mut sim = match seed {
        Some(seed) => Simulation::with_seed(params, seed)?,
        None => Simulation::new(params)?,
    };

    let steps = (seconds / dt).ceil() as u64;
    let report_every = ((1.0 / dt).ceil() as u64).max(1);

    println!("time_s  kinetic_energy_j");
    for tick in 1..=steps {
        sim.step(dt);
        if tick % report_every == 0 {
            let world = sim.world();
            println!("{:>6.2}  {:>16.4}", world.clock.elapsed, world.kinetic_energy());
        }
    }

    let world = sim.world();
    println!("final state after {:.2} s:", world.clock.elapsed);
    for ball in &world.balls {
        println!(
            "  ball {:>2} {}  pos ({:+.3}, {:+.3})  vel ({:+.3}, {:+.3})",
            ball.id, ball.color, ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y
        );
    }

    Ok(())
}

fn run_vehicle(
    params: VehicleParams,
    seconds: f32,
    dt: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    check_loop_args(seconds, dt)?;

    let mut sim = VehicleSim::new(params)?;

    let steps = (seconds / dt).ceil() as u64;
    let report_every = ((0.5 / dt).ceil() as u64).max(1);

    println!("time_s  distance_m  velocity_mps  accel_mps2");
    for tick in 1..=steps {
        sim.step(dt);
        if tick % report_every == 0 {
            let t = sim.report();
            println!(
                "{:>6.2}  {:>10.3}  {:>12.3}  {:>10.3}",
                t.time, t.distance, t.velocity, t.acceleration
            );
        }
    }

    let t = sim.report();
    println!(
        "final: {:.1} m in {:.2} s at {:.2} m/s ({} samples)",
        t.distance,
        t.time,
        t.velocity,
        sim.samples().len()
    );

    Ok(())
}

fn run_launch(speed: f32, seconds: f32, dt: f32) -> Result<(), Box<dyn std::error::Error>> {
    check_loop_args(seconds, dt)?;
    if !(speed.is_finite() && speed >= 0.0) {
        return Err(format!("launch speed must be non-negative, got {}", speed).into());
    }

    let mut state = LaunchState::at_rest();
    state.launch(speed);

    let steps = (seconds / dt).ceil() as u64;

    println!("time_s  height_m  velocity_mps");
    for _ in 0..steps {
        state.tick(dt);
        if !state.airborne {
            println!("landed, back at rest");
            return Ok(());
        }
        println!(
            "{:>6.2}  {:>8.3}  {:>12.3}",
            state.time,
            state.height,
            state.velocity()
        );
    }

    println!("still airborne after {:.2} s", state.time);
    Ok(())
}
