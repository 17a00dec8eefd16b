use crate::engine::Ball;

/// Detect and resolve every pairwise overlap with an elastic impulse.
///
/// Exhaustive O(n^2) detection: each unordered pair is visited once per tick
/// in ascending index order, with no broad-phase and no fixed-point
/// iteration. Resolution changes velocities only. There is no positional
/// correction, so overlapping balls are not pushed apart and a pair that
/// fails to separate keeps exchanging impulses on consecutive ticks. Wall
/// restitution does not apply here; ball-ball contact is perfectly elastic.
pub fn resolve_collisions(balls: &mut [Ball]) {
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let delta = balls[i].pos - balls[j].pos;
            let dist = delta.length();
            if dist < balls[i].radius + balls[j].radius {
                // Unit normal from ball j toward ball i; coincident centers
                // degrade to a zero normal and therefore a zero impulse
                let normal = delta.normalize_or_zero();
                let rel_vel = balls[i].vel - balls[j].vel;
                let impulse = 2.0 * rel_vel.dot(normal) / (balls[i].mass + balls[j].mass);

                let (mass_i, mass_j) = (balls[i].mass, balls[j].mass);
                balls[i].vel -= normal * impulse * mass_j;
                balls[j].vel += normal * impulse * mass_i;
            }
        }
    }
}
