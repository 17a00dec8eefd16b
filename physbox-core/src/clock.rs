/// Elapsed simulation time plus the most recent tick delta
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    pub elapsed: f32,
    pub last_dt: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one tick. The clock advances before the physics of the
    /// tick, and advances even when there is nothing to integrate.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.last_dt = dt;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_dt = 0.0;
    }
}
