//! Boundary policy shared by asteroids and bullets
//!
//! Two mutually exclusive behaviors, selected by `ArenaContext::bounce_active`:
//! - **wrap**: the classic screen-wrap, teleporting an entity that leaves one
//!   edge to the opposite edge
//! - **bounce**: hard world edges, clamping position and reflecting velocity
//!
//! Edge convention: wrap triggers and off-area checks compare strictly
//! (`<` / `>`); bounce clamps into the inclusive band `[radius, dim - radius]`.
//!
//! `fold_into_span` is the closed-form replay of repeated elastic bounces
//! used by the synchronized asteroid model: a triangle wave with period twice
//! the span, O(1) for any travel distance. An iterative
//! reflect-until-in-bounds loop could spin unbounded for large elapsed times.

use glam::Vec2;

use super::context::{PlayArea, WorldBounds};

/// Screen-wrap an entity center across the play area.
///
/// An axis wraps once its center crosses strictly outside
/// `[-radius, dim + radius]`, reappearing at the opposite edge with the same
/// radius offset so the silhouette re-enters smoothly.
pub fn wrap(pos: &mut Vec2, radius: f32, area: PlayArea) {
    if pos.x < -radius {
        pos.x = area.width + radius;
    } else if pos.x > area.width + radius {
        pos.x = -radius;
    }
    if pos.y < -radius {
        pos.y = area.height + radius;
    } else if pos.y > area.height + radius {
        pos.y = -radius;
    }
}

/// Bounce an entity off hard world edges.
///
/// Each axis is clamped into `[radius, dim - radius]`; a clamp flips the sign
/// of that axis's velocity component (elastic reflection, no energy loss).
pub fn bounce(pos: &mut Vec2, vel: &mut Vec2, radius: f32, bounds: &WorldBounds) {
    let max_x = bounds.width - radius;
    if pos.x < radius {
        pos.x = radius;
        vel.x = -vel.x;
    } else if pos.x > max_x {
        pos.x = max_x;
        vel.x = -vel.x;
    }

    let max_y = bounds.height - radius;
    if pos.y < radius {
        pos.y = radius;
        vel.y = -vel.y;
    } else if pos.y > max_y {
        pos.y = max_y;
        vel.y = -vel.y;
    }
}

/// Fold a raw straight-line coordinate back into `[lo, hi]` as if it had
/// elastically bounced off both ends the whole way.
///
/// Triangle wave with period `2 * (hi - lo)`: travel distance into the
/// period, reflected on the back half. Degenerate spans (`hi <= lo`, a world
/// narrower than the entity) collapse to the midpoint so the function stays
/// total.
pub fn fold_into_span(raw: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo + hi) * 0.5;
    }
    let period = 2.0 * span;
    let u = (raw - lo).rem_euclid(period);
    if u <= span { lo + u } else { lo + period - u }
}

/// Direction of travel (`+1.0` or `-1.0`) the folded coordinate is moving in
/// at `raw` - the derivative sign of `fold_into_span`. Lets the synchronized
/// model report a heading consistent with its bounces.
pub fn fold_direction(raw: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return 1.0;
    }
    let u = (raw - lo).rem_euclid(2.0 * span);
    if u <= span { 1.0 } else { -1.0 }
}

/// Strictly outside the play area rectangle (bullet containment check)
pub fn outside(pos: Vec2, area: PlayArea) -> bool {
    pos.x < 0.0 || pos.x > area.width || pos.y < 0.0 || pos.y > area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const AREA: PlayArea = PlayArea {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_wrap_all_four_edges() {
        let r = 40.0;

        let mut pos = Vec2::new(-40.5, 300.0);
        wrap(&mut pos, r, AREA);
        assert_eq!(pos.x, AREA.width + r);

        let mut pos = Vec2::new(841.0, 300.0);
        wrap(&mut pos, r, AREA);
        assert_eq!(pos.x, -r);

        let mut pos = Vec2::new(400.0, -40.5);
        wrap(&mut pos, r, AREA);
        assert_eq!(pos.y, AREA.height + r);

        let mut pos = Vec2::new(400.0, 641.0);
        wrap(&mut pos, r, AREA);
        assert_eq!(pos.y, -r);
    }

    #[test]
    fn test_wrap_is_strict_at_the_edge() {
        // Exactly -radius is still in the legal band
        let mut pos = Vec2::new(-40.0, 300.0);
        wrap(&mut pos, 40.0, AREA);
        assert_eq!(pos.x, -40.0);
    }

    #[test]
    fn test_bounce_clamps_and_flips_velocity() {
        let bounds = WorldBounds::new(200.0, 200.0);
        let r = 40.0;

        let mut pos = Vec2::new(170.0, 100.0);
        let mut vel = Vec2::new(2.0, 1.0);
        bounce(&mut pos, &mut vel, r, &bounds);
        assert_eq!(pos.x, 160.0);
        assert_eq!(vel.x, -2.0);
        // Untouched axis keeps its velocity
        assert_eq!(vel.y, 1.0);

        let mut pos = Vec2::new(100.0, 10.0);
        let mut vel = Vec2::new(0.5, -1.5);
        bounce(&mut pos, &mut vel, r, &bounds);
        assert_eq!(pos.y, 40.0);
        assert_eq!(vel.y, 1.5);
        assert_eq!(vel.x, 0.5);
    }

    #[test]
    fn test_fold_single_reflection() {
        // Large asteroid in a 200x200 world: legal span [40, 160].
        // Raw 250 is one reflection past the right edge: 160 - (250 - 160) = 70.
        let folded = fold_into_span(250.0, 40.0, 160.0);
        assert!((folded - 70.0).abs() < 1e-4);
        // And it is now traveling back toward the left edge
        assert_eq!(fold_direction(250.0, 40.0, 160.0), -1.0);
    }

    #[test]
    fn test_fold_many_reflections_terminates_exactly() {
        // 1000 span-lengths of travel - the iterative version would loop
        // a thousand times; the closed form lands directly.
        let lo = 40.0;
        let hi = 160.0;
        let raw = lo + 120.0 * 1000.0 + 30.0;
        let folded = fold_into_span(raw, lo, hi);
        assert!((folded - (lo + 30.0)).abs() < 1e-2);
    }

    #[test]
    fn test_fold_negative_raw() {
        // Undershooting the left edge reflects off lo
        let folded = fold_into_span(10.0, 40.0, 160.0);
        assert!((folded - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_fold_degenerate_span() {
        // World narrower than the entity: collapse to midpoint, never loop
        let folded = fold_into_span(1e9, 100.0, 100.0);
        assert_eq!(folded, 100.0);
        let folded = fold_into_span(-5.0, 120.0, 80.0);
        assert_eq!(folded, 100.0);
    }

    #[test]
    fn test_outside_is_strict() {
        assert!(!outside(Vec2::new(0.0, 0.0), AREA));
        assert!(!outside(Vec2::new(800.0, 600.0), AREA));
        assert!(outside(Vec2::new(-0.1, 300.0), AREA));
        assert!(outside(Vec2::new(400.0, 600.1), AREA));
    }

    proptest! {
        #[test]
        fn prop_fold_stays_in_span(raw in -1e6f32..1e6, lo in 0.0f32..100.0, len in 1.0f32..500.0) {
            let hi = lo + len;
            let folded = fold_into_span(raw, lo, hi);
            prop_assert!(folded >= lo - 1e-3);
            prop_assert!(folded <= hi + 1e-3);
        }

        #[test]
        fn prop_wrap_lands_in_legal_band(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0, r in 1.0f32..50.0) {
            let mut pos = Vec2::new(x, y);
            wrap(&mut pos, r, AREA);
            prop_assert!(pos.x >= -r && pos.x <= AREA.width + r);
            prop_assert!(pos.y >= -r && pos.y <= AREA.height + r);
        }

        #[test]
        fn prop_bounce_lands_inside(x in -500.0f32..700.0, y in -500.0f32..700.0) {
            let bounds = WorldBounds::new(200.0, 200.0);
            let r = 15.0;
            let mut pos = Vec2::new(x, y);
            let mut vel = Vec2::new(1.0, 1.0);
            bounce(&mut pos, &mut vel, r, &bounds);
            prop_assert!(pos.x >= r && pos.x <= bounds.width - r);
            prop_assert!(pos.y >= r && pos.y <= bounds.height - r);
        }
    }
}
