//! Damped velocity tracking for the 1-D vehicle demo
//!
//! A separate, simpler model than the box simulation: scalar velocity chases
//! a target speed under a first-order law, and position integrates the
//! result. No boundaries, no collisions.

use crate::clock::SimClock;
use crate::params::ParamsError;
use crate::recorder::{Sample, SampleRecorder};

/// First-order gain pulling velocity toward the target; the time constant
/// of the exponential approach is 1 / TRACKING_GAIN seconds
pub const TRACKING_GAIN: f32 = 2.0;

/// Configuration for the vehicle model
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleParams {
    /// Speed the vehicle converges to, in m/s. Slider range 0 to 20.
    pub target_speed: f32,
    /// Optional cap on the per-tick delta. `None` trusts the caller's
    /// wall-clock delta as-is, so a long host pause produces one large jump.
    pub max_dt: Option<f32>,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            target_speed: 5.0,
            max_dt: None,
        }
    }
}

impl VehicleParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.target_speed.is_finite() && self.target_speed >= 0.0) {
            return Err(ParamsError::TargetSpeed(self.target_speed));
        }
        if let Some(max_dt) = self.max_dt {
            if !(max_dt.is_finite() && max_dt > 0.0) {
                return Err(ParamsError::MaxDt(max_dt));
            }
        }
        Ok(())
    }
}

/// Scalar state of the vehicle; position doubles as cumulative distance
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleState {
    pub position: f32,
    pub velocity: f32,
    /// Last computed acceleration, kept only for reporting; it is fully
    /// determined by target and current velocity, never carried across ticks
    pub acceleration: f32,
    pub clock: SimClock,
}

/// Telemetry row handed to the display host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleTelemetry {
    pub distance: f32,
    pub time: f32,
    pub velocity: f32,
    pub acceleration: f32,
}

/// Advance the vehicle by one tick.
///
/// Velocity converges toward the target exponentially:
/// v(t) = target * (1 - e^(-TRACKING_GAIN * t)) from rest. Position
/// integrates the updated velocity (semi-implicit, as in the box model).
pub fn step_vehicle(state: &mut VehicleState, params: &VehicleParams, dt: f32) {
    let dt = match params.max_dt {
        Some(cap) => dt.min(cap),
        None => dt,
    };
    state.clock.advance(dt);
    state.acceleration = (params.target_speed - state.velocity) * TRACKING_GAIN;
    state.velocity += state.acceleration * dt;
    state.position += state.velocity * dt;
}

/// Current telemetry for display; values are unrounded
pub fn report_vehicle(state: &VehicleState) -> VehicleTelemetry {
    VehicleTelemetry {
        distance: state.position,
        time: state.clock.elapsed,
        velocity: state.velocity,
        acceleration: state.acceleration,
    }
}

/// Owning context for a vehicle run: parameters, state, and the sample log
#[derive(Debug)]
pub struct VehicleSim {
    params: VehicleParams,
    state: VehicleState,
    recorder: SampleRecorder,
}

impl VehicleSim {
    pub fn new(params: VehicleParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params,
            state: VehicleState::default(),
            recorder: SampleRecorder::new(),
        })
    }

    /// Zero the state and drop every recorded sample
    pub fn reset(&mut self) {
        self.state = VehicleState::default();
        self.recorder.clear();
    }

    /// Advance one tick and append a telemetry sample
    pub fn step(&mut self, dt: f32) {
        step_vehicle(&mut self.state, &self.params, dt);
        self.recorder.record(
            self.state.clock.elapsed,
            self.state.position,
            self.state.velocity,
            self.state.acceleration,
        );
    }

    /// Live parameter patch; takes effect on the next tick, state is kept
    pub fn set_params(&mut self, params: VehicleParams) -> Result<(), ParamsError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn report(&self) -> VehicleTelemetry {
        report_vehicle(&self.state)
    }

    pub fn samples(&self) -> &[Sample] {
        self.recorder.samples()
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }
}
