//! Fixed-separation constraint between a joint and its already-updated
//! neighbour.

use glam::Vec2;

/// Which branch of [`DistanceSolver::solve_traced`] produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveBranch {
    /// Neighbour moved farther than one segment; exact projection.
    ClosedForm,
    /// Joint already sat exactly one segment away.
    Satisfied,
    /// Joint was too far and was probed towards the neighbour's old position.
    Pulled,
    /// Joint was too close and was probed away from the neighbour's old position.
    Pushed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSolve {
    pub position: Vec2,
    pub branch: SolveBranch,
    /// Probe increments taken; never exceeds `search_steps`.
    pub probes: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct DistanceSolver {
    segment_length: f32,
    segment_length_sqr: f32,
    probe_step: f32,
    search_steps: u32,
}

impl DistanceSolver {
    pub fn new(segment_length: f32, search_steps: u32) -> Self {
        let search_steps = search_steps.max(1);
        Self {
            segment_length,
            segment_length_sqr: segment_length * segment_length,
            probe_step: segment_length / search_steps as f32,
            search_steps,
        }
    }

    pub fn segment_length(&self) -> f32 { self.segment_length }
    pub fn probe_step(&self) -> f32 { self.probe_step }
    pub fn search_steps(&self) -> u32 { self.search_steps }

    /// New position for `joint` given its neighbour's position before
    /// (`prev_old`) and after (`prev_new`) this step's update.
    pub fn solve(&self, joint: Vec2, prev_old: Vec2, prev_new: Vec2) -> Vec2 {
        self.solve_traced(joint, prev_old, prev_new).position
    }

    pub fn solve_traced(&self, joint: Vec2, prev_old: Vec2, prev_new: Vec2) -> DistanceSolve {
        let gap = prev_old - prev_new;
        if gap.length_squared() > self.segment_length_sqr {
            return DistanceSolve {
                position: gap.normalize_or_zero() * self.segment_length + prev_new,
                branch: SolveBranch::ClosedForm,
                probes: 0,
            };
        }

        let dist_sqr = (prev_new - joint).length_squared();
        // Exact comparison; a tolerance here would change which joints get probed.
        if dist_sqr == self.segment_length_sqr {
            return DistanceSolve { position: joint, branch: SolveBranch::Satisfied, probes: 0 };
        }

        let (dir, branch) = if dist_sqr > self.segment_length_sqr {
            ((prev_old - joint).normalize_or_zero(), SolveBranch::Pulled)
        } else {
            ((joint - prev_old).normalize_or_zero(), SolveBranch::Pushed)
        };
        if dir == Vec2::ZERO {
            log::warn!("distance probe has no direction at {joint}; joint left in place");
            return DistanceSolve { position: joint, branch, probes: 0 };
        }

        let step = dir * self.probe_step;
        let mut pos = joint;
        let mut probes = 0;
        while probes < self.search_steps {
            pos += step;
            probes += 1;
            let d = (pos - prev_new).length_squared();
            let crossed = match branch {
                SolveBranch::Pulled => d <= self.segment_length_sqr,
                _ => d >= self.segment_length_sqr,
            };
            if crossed {
                break;
            }
        }
        DistanceSolve { position: pos, branch, probes }
    }
}
