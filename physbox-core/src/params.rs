use thiserror::Error;

/// A rejected configuration value, raised before any stepping happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("gravity must be finite and non-negative, got {0}")]
    Gravity(f32),
    #[error("atmosphere must be in (0, 1], got {0}")]
    Atmosphere(f32),
    #[error("energy loss must be in [0, 1], got {0}")]
    EnergyLoss(f32),
    #[error("simulation area must be finite and positive, got {0}")]
    Area(f32),
    #[error("ball speed must be finite and non-negative, got {0}")]
    BallSpeed(f32),
    #[error("ball radius must be finite and positive, got {0}")]
    BallRadius(f32),
    #[error("ball mass must be finite and positive, got {0}")]
    BallMass(f32),
    #[error("target speed must be finite and non-negative, got {0}")]
    TargetSpeed(f32),
    #[error("max dt must be finite and positive, got {0}")]
    MaxDt(f32),
}

/// Tunable parameters for the box simulation.
///
/// The documented ranges are the host control-panel slider ranges; the
/// simulation itself accepts any value passing [`SimParams::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    /// Downward acceleration in m/s^2. Slider range 0 to 20.
    pub gravity: f32,
    /// Per-second velocity retention factor in (0, 1]. Slider range 0.9 to 1.0.
    pub atmosphere: f32,
    /// Wall-bounce velocity retention (restitution) in [0, 1]. Slider range 0.5 to 1.0.
    pub energy_loss: f32,
    /// Side length of the square boundary in meters. Slider range 5 to 20.
    pub area: f32,
    /// Number of balls spawned at reset. Slider range 1 to 20. Changing it
    /// invalidates the world; every other field is a live patch.
    pub ball_count: usize,
    /// Bound on the initial random velocity per axis in m/s. Slider range 0.1 to 100.
    pub ball_speed: f32,
    /// Radius shared by every ball, in meters.
    pub ball_radius: f32,
    /// Mass shared by every ball, in kilograms.
    pub ball_mass: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            atmosphere: 0.99,
            energy_loss: 0.8,
            area: 10.0,
            ball_count: 6,
            ball_speed: 5.0,
            ball_radius: 0.3,
            ball_mass: 1.0,
        }
    }
}

impl SimParams {
    /// Half the boundary side length; positions live in [-half, half] per axis
    pub fn half_extent(&self) -> f32 {
        self.area / 2.0
    }

    /// Reject any physically invalid quantity before it reaches the
    /// integrator. NaN fails every check.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ParamsError::Gravity(self.gravity));
        }
        if !(self.atmosphere > 0.0 && self.atmosphere <= 1.0) {
            return Err(ParamsError::Atmosphere(self.atmosphere));
        }
        if !(self.energy_loss >= 0.0 && self.energy_loss <= 1.0) {
            return Err(ParamsError::EnergyLoss(self.energy_loss));
        }
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(ParamsError::Area(self.area));
        }
        if !(self.ball_speed.is_finite() && self.ball_speed >= 0.0) {
            return Err(ParamsError::BallSpeed(self.ball_speed));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(ParamsError::BallRadius(self.ball_radius));
        }
        if !(self.ball_mass.is_finite() && self.ball_mass > 0.0) {
            return Err(ParamsError::BallMass(self.ball_mass));
        }
        Ok(())
    }
}
