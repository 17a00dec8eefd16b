use crate::engine::Ball;

/// Advance one ball by dt using semi-implicit Euler integration
pub fn integrate(ball: &mut Ball, gravity: f32, atmosphere: f32, dt: f32) {
    // Gravity, then drag, then position from the updated velocity
    // (semi-implicit Euler: v += a*dt, then x += v*dt)
    ball.vel.y -= gravity * dt;
    // Exponential decay: the retention over a fixed interval does not depend
    // on how finely the interval is split into ticks
    ball.vel *= atmosphere.powf(dt);
    ball.pos += ball.vel * dt;
}
