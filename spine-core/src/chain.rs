//! The spine chain: joint state plus the per-step anchor, distance and angle
//! passes.
//!
//! The distance pass runs to completion from the head to the tip before the
//! angle pass starts; the angle pass therefore always sees a fully
//! length-constrained chain from the current step.

use glam::Vec2;

use crate::anchor::AnchorPose;
use crate::config::{AnchorMode, ChainConfig};
use crate::error::ConfigError;
use crate::solver::{AngleCorrector, DistanceSolver, SolveBranch};

/// Counters from the most recent [`SpineChain::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub closed_form: u32,
    pub searched: u32,
    pub satisfied: u32,
    /// Probe increments summed over every searched joint.
    pub probes: u32,
    pub angle_corrections: u32,
}

#[derive(Debug, Clone)]
pub struct SpineChain {
    config: ChainConfig,
    distance: DistanceSolver,
    angle: AngleCorrector,
    joints: Option<Vec<Vec2>>,
    report: StepReport,
}

impl SpineChain {
    pub fn new(config: ChainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let distance = DistanceSolver::new(config.segment_length(), config.search_steps);
        let angle = AngleCorrector::new(config.min_bend_angle, config.stiffness);
        log::debug!(
            "spine chain: {} joints, segment {:.3}, min bend {:.1}deg, stiffness {:.2}, {:?}",
            config.joint_count,
            distance.segment_length(),
            config.min_bend_angle,
            config.stiffness,
            config.anchor
        );
        Ok(Self { config, distance, angle, joints: None, report: StepReport::default() })
    }

    pub fn config(&self) -> &ChainConfig { &self.config }
    pub fn segment_length(&self) -> f32 { self.distance.segment_length() }
    pub fn is_initialized(&self) -> bool { self.joints.is_some() }
    pub fn last_report(&self) -> StepReport { self.report }

    /// Current joints, head first. Empty until [`initialize`](Self::initialize).
    pub fn joints(&self) -> &[Vec2] {
        self.joints.as_deref().unwrap_or(&[])
    }

    /// Seed the joints along `forward` from `position`. Does nothing if the
    /// chain already holds joints.
    pub fn initialize(&mut self, position: Vec2, forward: Vec2) {
        if self.joints.is_some() {
            return;
        }
        let seg = self.segment_length();
        let joints = (0..self.config.joint_count)
            .map(|i| position + forward * seg * i as f32)
            .collect();
        log::debug!("seeded {} joints at {position} heading {forward}", self.config.joint_count);
        self.joints = Some(joints);
    }

    /// Drop the joints; the next [`initialize`](Self::initialize) reseeds.
    pub fn reset(&mut self) {
        self.joints = None;
        self.report = StepReport::default();
    }

    /// Advance one tick towards the given anchor pose. No-op before
    /// [`initialize`](Self::initialize).
    pub fn step(&mut self, position: Vec2, forward: Vec2) {
        let Some(joints) = self.joints.as_mut() else {
            return;
        };
        let mut report = StepReport::default();

        let start = self.config.anchor.pass_start();
        // Pre-overwrite position of joints[i - 1], carried down the pass.
        let mut prev_pos = joints[start - 1];
        match self.config.anchor {
            AnchorMode::Dual => {
                joints[0] = position + forward * self.distance.segment_length();
                joints[1] = position;
            }
            AnchorMode::Single { .. } => {
                joints[0] = position + forward * self.config.anchor_offset();
            }
        }

        for i in start..joints.len() {
            let solved = self.distance.solve_traced(joints[i], prev_pos, joints[i - 1]);
            match solved.branch {
                SolveBranch::ClosedForm => report.closed_form += 1,
                SolveBranch::Satisfied => report.satisfied += 1,
                SolveBranch::Pulled | SolveBranch::Pushed => report.searched += 1,
            }
            report.probes += solved.probes;
            prev_pos = joints[i];
            joints[i] = solved.position;
        }

        for i in 2..joints.len() {
            let corrected = self.angle.correct(joints[i], joints[i - 1], joints[i - 2]);
            if corrected != joints[i] {
                report.angle_corrections += 1;
            }
            joints[i] = corrected;
        }

        log::trace!("step: {report:?}");
        self.report = report;
    }

    /// [`initialize`](Self::initialize) then [`step`](Self::step) with a pose.
    pub fn follow(&mut self, anchor: AnchorPose) {
        self.initialize(anchor.position, anchor.forward);
        self.step(anchor.position, anchor.forward);
    }

    /// Distance between each adjacent joint pair, head first.
    pub fn segment_lengths(&self) -> Vec<f32> {
        self.joints().windows(2).map(|w| w[0].distance(w[1])).collect()
    }

    /// Interior angle in degrees at joints `1..n-1`; 180 means straight.
    pub fn bend_angles(&self) -> Vec<f32> {
        self.joints()
            .windows(3)
            .map(|w| 180.0 - AngleCorrector::deviation(w[2], w[1], w[0]).abs())
            .collect()
    }

    /// Preview of the chain at rest: `joint_count` points trailing the anchor
    /// at segment spacing. Independent of the simulated joints.
    pub fn rest_pose(&self, anchor: AnchorPose) -> Vec<Vec2> {
        let seg = self.segment_length();
        (0..self.config.joint_count)
            .map(|i| anchor.position - anchor.forward * seg * i as f32)
            .collect()
    }
}
