//! Damped minimum-bend correction for one interior joint.

use glam::Vec2;

use crate::geometry::{rotate_around, signed_angle};

#[derive(Debug, Clone, Copy)]
pub struct AngleCorrector {
    min_bend_angle: f32,
    max_deviation: f32,
    stiffness: f32,
}

impl AngleCorrector {
    pub fn new(min_bend_angle: f32, stiffness: f32) -> Self {
        Self { min_bend_angle, max_deviation: 180.0 - min_bend_angle, stiffness }
    }

    pub fn min_bend_angle(&self) -> f32 { self.min_bend_angle }
    pub fn stiffness(&self) -> f32 { self.stiffness }

    /// Largest allowed turn away from straight at a joint, in degrees.
    pub fn max_deviation(&self) -> f32 { self.max_deviation }

    /// Signed turn at `pivot` between the segment arriving from `target` and
    /// the segment leaving towards `cur`. Zero for a straight chain.
    pub fn deviation(cur: Vec2, pivot: Vec2, target: Vec2) -> f32 {
        signed_angle(target - pivot, pivot - cur)
    }

    /// Portion of the deviation beyond the allowed limit, signed like the
    /// deviation, or zero when within limits.
    pub fn violation(&self, cur: Vec2, pivot: Vec2, target: Vec2) -> f32 {
        let a = Self::deviation(cur, pivot, target);
        if a.abs() <= self.max_deviation {
            0.0
        } else if a > 0.0 {
            a - self.max_deviation
        } else {
            a + self.max_deviation
        }
    }

    /// Rotate `cur` about `pivot` to remove `stiffness` of any violation.
    pub fn correct(&self, cur: Vec2, pivot: Vec2, target: Vec2) -> Vec2 {
        let turn = -self.violation(cur, pivot, target) * self.stiffness;
        if turn == 0.0 {
            return cur;
        }
        rotate_around(cur, pivot, turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // target at the origin, pivot one unit up; cur bent by `turn` degrees.
    fn bent(turn: f32) -> (Vec2, Vec2, Vec2) {
        let target = Vec2::ZERO;
        let pivot = Vec2::Y;
        let straight = Vec2::new(0.0, 2.0);
        (rotate_around(straight, pivot, turn), pivot, target)
    }

    #[test]
    fn deviation_measures_turn_from_straight() {
        let (cur, pivot, target) = bent(0.0);
        assert!(AngleCorrector::deviation(cur, pivot, target).abs() < 1e-3);
        let (cur, pivot, target) = bent(40.0);
        assert!((AngleCorrector::deviation(cur, pivot, target) - 40.0).abs() < 1e-2);
        let (cur, pivot, target) = bent(-65.0);
        assert!((AngleCorrector::deviation(cur, pivot, target) + 65.0).abs() < 1e-2);
    }

    #[test]
    fn within_limit_is_untouched() {
        let c = AngleCorrector::new(120.0, 0.5);
        for turn in [-59.0, -10.0, 0.0, 30.0, 59.0] {
            let (cur, pivot, target) = bent(turn);
            assert_eq!(c.correct(cur, pivot, target), cur);
        }
    }

    #[test]
    fn violation_shrinks_by_stiffness() {
        let c = AngleCorrector::new(120.0, 0.5);
        for turn in [100.0f32, -100.0] {
            let (cur, pivot, target) = bent(turn);
            let before = c.violation(cur, pivot, target);
            let out = c.correct(cur, pivot, target);
            let after = c.violation(out, pivot, target);
            assert!((before.abs() - 40.0).abs() < 1e-2);
            assert!((after.abs() - 20.0).abs() < 1e-2);
            assert_eq!(before.signum(), after.signum());
            assert!((out.distance(pivot) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn full_stiffness_removes_violation_in_one_call() {
        let c = AngleCorrector::new(150.0, 1.0);
        let (cur, pivot, target) = bent(-120.0);
        let out = c.correct(cur, pivot, target);
        let dev = AngleCorrector::deviation(out, pivot, target);
        assert!((dev + 30.0).abs() < 1e-2);
    }

    #[test]
    fn zero_stiffness_is_identity() {
        let c = AngleCorrector::new(160.0, 0.0);
        let (cur, pivot, target) = bent(170.0);
        let out = c.correct(cur, pivot, target);
        assert_eq!(out, cur);
    }

    #[test]
    fn folded_back_joint_is_unfolded_counter_clockwise() {
        // A joint sitting on top of its grandparent reports +180.
        let c = AngleCorrector::new(150.0, 0.5);
        let out = c.correct(Vec2::ZERO, Vec2::Y, Vec2::ZERO);
        assert!((AngleCorrector::deviation(out, Vec2::Y, Vec2::ZERO) - 105.0).abs() < 1e-2);
    }

    #[test]
    fn repeated_correction_at_limit_is_noop() {
        let c = AngleCorrector::new(135.0, 0.7);
        let pivot = Vec2::Y;
        let target = Vec2::ZERO;
        let at_limit = rotate_around(Vec2::new(0.0, 2.0), pivot, 45.0);
        let dev = AngleCorrector::deviation(at_limit, pivot, target);
        assert!((dev - c.max_deviation()).abs() < 1e-3);
        let mut p = at_limit;
        for _ in 0..5 {
            p = c.correct(p, pivot, target);
        }
        assert!(p.distance(at_limit) < 1e-4);
    }
}
