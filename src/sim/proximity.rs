//! Boundary clamping and the task predicates
//!
//! The proximity test compares squared center distance with
//! `2 * (target_half + astronaut_half)^2`. That is an area-like scalar rather
//! than a circle of radius `target_half + astronaut_half`; it is kept as the
//! qualifying predicate exactly.

use glam::Vec2;

use super::state::{Astronaut, Bounds, Target};

/// Clamp a center so a box of `half_size` stays inside `bounds`.
///
/// When the bounds are narrower than the box the lower limit wins, so the
/// result is `half_size` on that axis.
#[inline]
pub fn clamp_to_bounds(pos: Vec2, half_size: f32, bounds: Bounds) -> Vec2 {
    Vec2::new(
        clamp_axis(pos.x, half_size, bounds.width),
        clamp_axis(pos.y, half_size, bounds.height),
    )
}

#[inline]
fn clamp_axis(value: f32, half_size: f32, extent: f32) -> f32 {
    // f32::clamp panics when min > max
    value.min(extent - half_size).max(half_size)
}

/// Squared distance below which the astronaut counts as "at" the target
#[inline]
pub fn proximity_threshold_sq(astronaut: &Astronaut, target: &Target) -> f32 {
    let reach = target.half_size() + astronaut.half_size();
    reach * reach * 2.0
}

/// Whether the astronaut is close enough to the target
#[inline]
pub fn is_near(astronaut: &Astronaut, target: &Target) -> bool {
    astronaut.pos.distance_squared(target.pos) < proximity_threshold_sq(astronaut, target)
}

/// Whether both velocity axes are strictly below `threshold`
#[inline]
pub fn is_stable(vel: Vec2, threshold: f32) -> bool {
    vel.x.abs() < threshold && vel.y.abs() < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn pair(astronaut_pos: Vec2, target_pos: Vec2) -> (Astronaut, Target) {
        let tuning = Tuning::default();
        (
            Astronaut::new(astronaut_pos, &tuning),
            Target::new(target_pos, &tuning),
        )
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let bounds = Bounds::new(800.0, 600.0);
        let pos = Vec2::new(400.0, 300.0);
        assert_eq!(clamp_to_bounds(pos, 125.0, bounds), pos);
    }

    #[test]
    fn test_clamp_pulls_back_from_edges() {
        let bounds = Bounds::new(800.0, 600.0);
        assert_eq!(
            clamp_to_bounds(Vec2::new(900.0, -50.0), 125.0, bounds),
            Vec2::new(675.0, 125.0)
        );
    }

    #[test]
    fn test_clamp_bounds_smaller_than_box() {
        // 200 wide canvas, 250 wide astronaut: the lower limit wins
        let bounds = Bounds::new(200.0, 200.0);
        assert_eq!(
            clamp_to_bounds(Vec2::new(150.0, 10.0), 125.0, bounds),
            Vec2::new(125.0, 125.0)
        );
    }

    #[test]
    fn test_threshold_value() {
        let (astronaut, target) = pair(Vec2::ZERO, Vec2::ZERO);
        // (10 + 125)^2 * 2
        assert!((proximity_threshold_sq(&astronaut, &target) - 36450.0).abs() < 1e-2);
    }

    #[test]
    fn test_near_uses_area_like_threshold() {
        // sqrt(36450) ~ 190.9, farther than the 135 px sum of half sizes
        let (astronaut, target) = pair(Vec2::new(190.0, 0.0), Vec2::ZERO);
        assert!(is_near(&astronaut, &target));

        let (astronaut, target) = pair(Vec2::new(191.0, 0.0), Vec2::ZERO);
        assert!(!is_near(&astronaut, &target));
    }

    #[test]
    fn test_stability_is_strict() {
        assert!(is_stable(Vec2::new(0.049, -0.049), 0.05));
        assert!(!is_stable(Vec2::new(0.05, 0.0), 0.05));
        assert!(!is_stable(Vec2::new(0.0, -0.1), 0.05));
    }
}
