pub mod boundary;
pub mod clock;
pub mod collision;
pub mod engine;
pub mod integrator;
pub mod params;
pub mod projectile;
pub mod recorder;
pub mod runtime;
pub mod vehicle;

pub use boundary::reflect;
pub use clock::SimClock;
pub use collision::resolve_collisions;
pub use engine::{Ball, World};
pub use integrator::integrate;
pub use params::{ParamsError, SimParams};
pub use projectile::LaunchState;
pub use recorder::{Sample, SampleRecorder};
pub use runtime::{reset_world, step_world, Simulation};
pub use vehicle::{
    report_vehicle, step_vehicle, VehicleParams, VehicleSim, VehicleState, VehicleTelemetry,
};
