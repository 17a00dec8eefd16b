use crate::boundary::reflect;
use crate::collision::resolve_collisions;
use crate::engine::{Ball, World};
use crate::integrator::integrate;
use crate::params::{ParamsError, SimParams};
use glam::Vec2;

/// Display palette cycled by ball index at reset
pub const BALL_COLORS: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
];

/// Fixed seed points cycled by ball index at reset
pub const SPAWN_POINTS: [Vec2; 6] = [
    Vec2::new(-2.0, 0.0),
    Vec2::new(2.0, 0.0),
    Vec2::new(0.0, 2.0),
    Vec2::new(0.0, -2.0),
    Vec2::new(-2.0, 2.0),
    Vec2::new(2.0, -2.0),
];

/// Build a fresh world from validated parameters.
///
/// Positions start on the fixed seed points, jittered by up to 1 m per axis
/// and clamped into the boundary; velocity components are uniform within
/// half the speed bound either way. Ids are dense from zero and stay stable
/// until the next reset.
pub fn reset_world(params: &SimParams, rng: &mut fastrand::Rng) -> World {
    let mut world = World::new();
    let bound = (params.half_extent() - params.ball_radius).max(0.0);

    for i in 0..params.ball_count {
        let seed_point = SPAWN_POINTS[i % SPAWN_POINTS.len()];
        let jitter = Vec2::new((rng.f32() - 0.5) * 2.0, (rng.f32() - 0.5) * 2.0);
        let pos = (seed_point + jitter).clamp(Vec2::splat(-bound), Vec2::splat(bound));
        let vel = Vec2::new(
            (rng.f32() - 0.5) * params.ball_speed,
            (rng.f32() - 0.5) * params.ball_speed,
        );
        world.balls.push(Ball {
            id: i,
            pos,
            vel,
            radius: params.ball_radius,
            mass: params.ball_mass,
            color: BALL_COLORS[i % BALL_COLORS.len()].to_string(),
        });
    }

    world
}

/// Advance the world by one tick: clock first, then per-ball integration and
/// wall reflection, then pairwise collision resolution.
///
/// An empty world still advances the clock. dt must be non-negative; zero is
/// a legal no-op for the physics.
pub fn step_world(world: &mut World, params: &SimParams, dt: f32) {
    debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
    world.clock.advance(dt);

    let half_extent = params.half_extent();
    for ball in &mut world.balls {
        integrate(ball, params.gravity, params.atmosphere, dt);
        reflect(ball, half_extent, params.energy_loss);
    }

    resolve_collisions(&mut world.balls);
}

/// Owning context for a box run: parameters, world, and the spawn RNG
#[derive(Debug)]
pub struct Simulation {
    params: SimParams,
    world: World,
    rng: fastrand::Rng,
}

impl Simulation {
    /// Validate parameters and build the initial world from an entropy seed
    pub fn new(params: SimParams) -> Result<Self, ParamsError> {
        Self::with_rng(params, fastrand::Rng::new())
    }

    /// Deterministic variant: equal seeds and equal call sequences produce
    /// bit-identical worlds
    pub fn with_seed(params: SimParams, seed: u64) -> Result<Self, ParamsError> {
        Self::with_rng(params, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(params: SimParams, mut rng: fastrand::Rng) -> Result<Self, ParamsError> {
        params.validate()?;
        let world = reset_world(&params, &mut rng);
        Ok(Self { params, world, rng })
    }

    /// Rebuild every ball from the current parameters
    pub fn reset(&mut self) {
        self.world = reset_world(&self.params, &mut self.rng);
    }

    /// Advance one tick
    pub fn step(&mut self, dt: f32) {
        step_world(&mut self.world, &self.params, dt);
    }

    /// Apply a parameter change between ticks. A changed ball count rebuilds
    /// the world; any other change is a live patch keeping ball state.
    pub fn set_params(&mut self, params: SimParams) -> Result<(), ParamsError> {
        params.validate()?;
        let rebuild = params.ball_count != self.params.ball_count;
        self.params = params;
        if rebuild {
            self.reset();
        }
        Ok(())
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }
}
