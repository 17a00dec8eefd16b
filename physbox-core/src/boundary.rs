use crate::engine::Ball;

/// Reflect a ball off the walls of the square boundary.
///
/// Each axis is handled independently, so a corner hit corrects both in the
/// same call. On a crossing the coordinate is clamped to the wall (keeping
/// its sign) and the velocity component is negated and scaled by the
/// restitution: 1 bounces losslessly, 0 stops the ball dead on that axis.
pub fn reflect(ball: &mut Ball, half_extent: f32, restitution: f32) {
    let bound = half_extent - ball.radius;

    if ball.pos.x.abs() > bound {
        ball.pos.x = bound * ball.pos.x.signum();
        ball.vel.x *= -restitution;
    }
    if ball.pos.y.abs() > bound {
        ball.pos.y = bound * ball.pos.y.signum();
        ball.vel.y *= -restitution;
    }
}
