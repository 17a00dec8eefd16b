//! Unit tests for pairwise elastic collision resolution

use glam::Vec2;
use physbox_core::collision::resolve_collisions;
use physbox_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2, make_ball};

#[test]
fn test_equal_mass_head_on_swaps_velocities() {
    // Overlapping pair closing head-on along x. relative velocity (4, 0),
    // normal (-1, 0), impulse = 2 * -4 / 2 = -4: velocities swap exactly
    let mut balls = vec![
        make_ball(0, Vec2::new(-0.25, 0.0), Vec2::new(2.0, 0.0)),
        make_ball(1, Vec2::new(0.25, 0.0), Vec2::new(-2.0, 0.0)),
    ];
    resolve_collisions(&mut balls);

    assert!(approx_eq_vec2(balls[0].vel, Vec2::new(-2.0, 0.0), 1e-5));
    assert!(approx_eq_vec2(balls[1].vel, Vec2::new(2.0, 0.0), 1e-5));
}

#[test]
fn test_separated_pair_is_untouched() {
    // Centers 2 m apart, radii sum 0.6: no contact
    let mut balls = vec![
        make_ball(0, Vec2::new(-1.0, 0.0), Vec2::new(2.0, 0.0)),
        make_ball(1, Vec2::new(1.0, 0.0), Vec2::new(-2.0, 0.0)),
    ];
    resolve_collisions(&mut balls);

    assert_eq!(balls[0].vel, Vec2::new(2.0, 0.0));
    assert_eq!(balls[1].vel, Vec2::new(-2.0, 0.0));
}

#[test]
fn test_momentum_conserved_with_unequal_masses() {
    let mut heavy = make_ball(1, Vec2::new(0.2, 0.0), Vec2::new(-1.0, 0.0));
    heavy.mass = 3.0;
    let mut balls = vec![
        make_ball(0, Vec2::new(-0.2, 0.0), Vec2::new(3.0, 0.0)),
        heavy,
    ];
    let momentum_before = balls[0].vel * balls[0].mass + balls[1].vel * balls[1].mass;
    resolve_collisions(&mut balls);
    let momentum_after = balls[0].vel * balls[0].mass + balls[1].vel * balls[1].mass;

    // impulse = 2 * -4 / (1 + 3) = -2, so v0 = (-3, 0) and v1 = (1, 0)
    assert!(approx_eq_vec2(momentum_after, momentum_before, 1e-4));
    assert!(approx_eq_vec2(balls[0].vel, Vec2::new(-3.0, 0.0), 1e-5));
    assert!(approx_eq_vec2(balls[1].vel, Vec2::new(1.0, 0.0), 1e-5));
}

#[test]
fn test_kinetic_energy_conserved() {
    // Ball-ball contact is perfectly elastic, unlike wall bounces
    let mut heavy = make_ball(1, Vec2::new(0.2, 0.1), Vec2::new(-1.0, 2.0));
    heavy.mass = 3.0;
    let mut balls = vec![
        make_ball(0, Vec2::new(-0.2, 0.0), Vec2::new(3.0, -1.0)),
        heavy,
    ];
    let ke_before: f32 = balls.iter().map(|b| b.kinetic_energy()).sum();
    resolve_collisions(&mut balls);
    let ke_after: f32 = balls.iter().map(|b| b.kinetic_energy()).sum();

    assert!(approx_eq_f32(ke_after, ke_before, 1e-3));
}

#[test]
fn test_impulse_acts_along_the_normal_only() {
    // Contact normal is along x, so the y components pass through
    let mut balls = vec![
        make_ball(0, Vec2::new(-0.2, 0.0), Vec2::new(1.0, 5.0)),
        make_ball(1, Vec2::new(0.2, 0.0), Vec2::new(-1.0, -7.0)),
    ];
    resolve_collisions(&mut balls);

    assert!(approx_eq_f32(balls[0].vel.y, 5.0, 1e-5));
    assert!(approx_eq_f32(balls[1].vel.y, -7.0, 1e-5));
    // x components swap as in the equal-mass head-on case
    assert!(approx_eq_f32(balls[0].vel.x, -1.0, 1e-5));
    assert!(approx_eq_f32(balls[1].vel.x, 1.0, 1e-5));
}

#[test]
fn test_overlapping_pair_keeps_exchanging() {
    // No positional correction: a slow overlapped pair is not pushed apart,
    // the impulse fires again on the next pass and swaps the velocities back
    let mut balls = vec![
        make_ball(0, Vec2::new(-0.1, 0.0), Vec2::new(0.05, 0.0)),
        make_ball(1, Vec2::new(0.1, 0.0), Vec2::new(-0.05, 0.0)),
    ];
    resolve_collisions(&mut balls);

    assert!(approx_eq_f32(balls[0].vel.x, -0.05, 1e-6));
    assert!(approx_eq_f32(balls[0].pos.x, -0.1, 1e-6));

    resolve_collisions(&mut balls);

    assert!(approx_eq_f32(balls[0].vel.x, 0.05, 1e-6));
    assert!(approx_eq_f32(balls[1].vel.x, -0.05, 1e-6));
}

#[test]
fn test_coincident_centers_stay_finite() {
    // Exactly stacked centers degrade to a zero normal and a zero impulse
    let mut balls = vec![
        make_ball(0, Vec2::ZERO, Vec2::new(1.0, 0.0)),
        make_ball(1, Vec2::ZERO, Vec2::new(-1.0, 0.0)),
    ];
    resolve_collisions(&mut balls);

    assert!(balls[0].vel.is_finite());
    assert!(balls[1].vel.is_finite());
    assert_eq!(balls[0].vel, Vec2::new(1.0, 0.0));
}

#[test]
fn test_pairs_resolve_in_ascending_index_order() {
    // Newton's cradle in one pass: the (0,1) exchange happens first and
    // feeds the (1,2) check, carrying the momentum down the chain
    let mut balls = vec![
        make_ball(0, Vec2::new(-0.4, 0.0), Vec2::new(1.0, 0.0)),
        make_ball(1, Vec2::new(0.0, 0.0), Vec2::ZERO),
        make_ball(2, Vec2::new(0.4, 0.0), Vec2::ZERO),
    ];
    resolve_collisions(&mut balls);

    assert!(approx_eq_f32(balls[0].vel.x, 0.0, 1e-5));
    assert!(approx_eq_f32(balls[1].vel.x, 0.0, 1e-5));
    assert!(approx_eq_f32(balls[2].vel.x, 1.0, 1e-5));
}
