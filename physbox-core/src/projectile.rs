//! Closed-form vertical launch model
//!
//! In contrast with the incremental box integrator, the launch demo follows
//! the analytic law h(t) = v0*t - 0.5*g*t^2 directly, which keeps the
//! trajectory exact regardless of tick size.

/// Gravity used by the launch model, m/s^2
pub const LAUNCH_GRAVITY: f32 = 9.8;

/// Height at which a flight ends, one ball radius below the launch point
pub const GROUND_HEIGHT: f32 = -0.5;

/// State of a single straight-up throw
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaunchState {
    /// Height above the launch point in meters
    pub height: f32,
    /// Seconds since launch
    pub time: f32,
    /// Upward speed at launch, m/s. Slider range 1 to 10.
    pub launch_speed: f32,
    pub airborne: bool,
}

impl LaunchState {
    pub fn at_rest() -> Self {
        Self::default()
    }

    /// Begin a flight with the given upward speed
    pub fn launch(&mut self, initial_speed: f32) {
        self.height = 0.0;
        self.time = 0.0;
        self.launch_speed = initial_speed;
        self.airborne = true;
    }

    /// Advance the flight. Past the ground plane the state snaps back to
    /// rest; ticking a grounded state is a no-op.
    pub fn tick(&mut self, dt: f32) {
        if !self.airborne {
            return;
        }
        let time = self.time + dt;
        let height = self.launch_speed * time - 0.5 * LAUNCH_GRAVITY * time * time;
        if height < GROUND_HEIGHT {
            *self = Self::at_rest();
        } else {
            self.time = time;
            self.height = height;
        }
    }

    /// Instantaneous vertical velocity, zero once grounded
    pub fn velocity(&self) -> f32 {
        if self.airborne {
            self.launch_speed - LAUNCH_GRAVITY * self.time
        } else {
            0.0
        }
    }
}
