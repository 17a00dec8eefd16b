use crate::clock::SimClock;
use glam::Vec2;

/// A circular particle in the box simulation
#[derive(Debug, Clone)]
pub struct Ball {
    /// Stable identity assigned at reset; render hosts key mesh handles by it
    pub id: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Display color, opaque to the simulation
    pub color: String,
}

impl Ball {
    /// Kinetic energy 0.5 * m * |v|^2
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// The simulation state: every ball plus the running clock
#[derive(Debug)]
pub struct World {
    /// Insertion order is the pairwise iteration order for collisions
    pub balls: Vec<Ball>,
    pub clock: SimClock,
}

impl World {
    pub fn new() -> Self {
        Self {
            balls: Vec::new(),
            clock: SimClock::new(),
        }
    }

    /// Total kinetic energy over all balls
    pub fn kinetic_energy(&self) -> f32 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
