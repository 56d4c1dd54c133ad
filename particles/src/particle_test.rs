#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

const EPSILON: f64 = 1e-12;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle { x, y, r: 1.0, vx, vy, opacity: 0.75 }
}

// --- spawn ---

#[test]
fn spawn_stays_within_ranges() {
    let cfg = FieldConfig::default();
    let size = SurfaceSize::new(320, 180);
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..50 {
            let p = Particle::spawn(&mut rng, size, &cfg);
            assert!((0.0..320.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..180.0).contains(&p.y), "y out of range: {}", p.y);
            assert!((0.5..2.5).contains(&p.r), "r out of range: {}", p.r);
            assert!((-0.25..0.25).contains(&p.vx), "vx out of range: {}", p.vx);
            assert!((-0.25..0.25).contains(&p.vy), "vy out of range: {}", p.vy);
            assert!((0.5..1.0).contains(&p.opacity), "opacity out of range: {}", p.opacity);
        }
    }
}

#[test]
fn spawn_is_deterministic_for_a_seed() {
    let cfg = FieldConfig::default();
    let size = SurfaceSize::new(100, 100);
    let a = Particle::spawn(&mut SmallRng::seed_from_u64(7), size, &cfg);
    let b = Particle::spawn(&mut SmallRng::seed_from_u64(7), size, &cfg);
    assert_eq!(a, b);
}

#[test]
fn spawn_on_zero_width_pins_x() {
    let cfg = FieldConfig::default();
    let mut rng = SmallRng::seed_from_u64(1);
    let p = Particle::spawn(&mut rng, SurfaceSize::new(0, 50), &cfg);
    assert_eq!(p.x, 0.0);
    assert!((0.0..50.0).contains(&p.y));
}

// --- advance ---

#[test]
fn advance_moves_by_velocity() {
    let mut p = particle(10.0, 20.0, 0.2, -0.1);
    p.advance(100.0, 100.0);
    assert!(approx_eq(p.x, 10.2));
    assert!(approx_eq(p.y, 19.9));
    assert_eq!(p.vx, 0.2);
    assert_eq!(p.vy, -0.1);
}

#[test]
fn advance_left_edge_overshoots_then_bounces() {
    let mut p = particle(0.0, 50.0, -0.1, 0.0);
    p.advance(100.0, 100.0);
    assert!(approx_eq(p.x, -0.1));
    assert_eq!(p.vx, 0.1);
}

#[test]
fn advance_returns_inside_on_following_step() {
    let mut p = particle(0.0, 50.0, -0.1, 0.0);
    p.advance(100.0, 100.0);
    p.advance(100.0, 100.0);
    assert!(approx_eq(p.x, 0.0));
    assert_eq!(p.vx, 0.1);
}

#[test]
fn advance_right_edge_bounces() {
    let mut p = particle(99.95, 50.0, 0.1, 0.0);
    p.advance(100.0, 100.0);
    assert!(p.x > 100.0);
    assert_eq!(p.vx, -0.1);
}

#[test]
fn advance_edge_itself_is_inside() {
    let mut p = particle(99.5, 100.0, 0.5, 0.0);
    p.advance(100.0, 100.0);
    assert_eq!(p.x, 100.0);
    assert_eq!(p.vx, 0.5, "landing exactly on the bound does not bounce");
    assert_eq!(p.vy, 0.0);
}

#[test]
fn advance_axes_bounce_independently() {
    let mut p = particle(50.0, 0.05, 0.1, -0.1);
    p.advance(100.0, 100.0);
    assert_eq!(p.vx, 0.1);
    assert_eq!(p.vy, 0.1);
}

#[test]
fn advance_corner_bounces_both_axes() {
    let mut p = particle(100.0, 100.0, 0.2, 0.2);
    p.advance(100.0, 100.0);
    assert_eq!(p.vx, -0.2);
    assert_eq!(p.vy, -0.2);
}

#[test]
fn advance_never_flips_a_component_twice() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..2000 {
        let x = rng.random_range(-1.0..101.0);
        let y = rng.random_range(-1.0..101.0);
        let vx = rng.random_range(-0.25..0.25);
        let vy = rng.random_range(-0.25..0.25);
        let mut p = particle(x, y, vx, vy);
        p.advance(100.0, 100.0);
        assert_eq!(p.vx.abs(), vx.abs());
        assert_eq!(p.vy.abs(), vy.abs());
        assert!(p.vx == vx || p.vx == -vx);
        assert!(p.vy == vy || p.vy == -vy);
    }
}

#[test]
fn advance_keeps_radius_and_opacity() {
    let mut p = particle(0.0, 0.0, -0.2, -0.2);
    p.advance(10.0, 10.0);
    assert_eq!(p.r, 1.0);
    assert_eq!(p.opacity, 0.75);
}
