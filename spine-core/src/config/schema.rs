use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the head of the chain is pinned to the anchor each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnchorMode {
    /// Joint 1 sits on the anchor and joint 0 one segment ahead of it.
    Dual,
    /// Joint 0 sits `offset` ahead of the anchor; defaults to one segment.
    Single {
        #[serde(default)]
        offset: Option<f32>,
    },
}

impl Default for AnchorMode {
    fn default() -> Self { AnchorMode::Dual }
}

impl AnchorMode {
    /// First joint index solved by the distance pass.
    pub fn pass_start(&self) -> usize {
        match self {
            AnchorMode::Dual => 2,
            AnchorMode::Single { .. } => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    pub joint_count: usize,
    pub total_length: f32,
    /// Smallest interior angle, in degrees, before correction engages.
    pub min_bend_angle: f32,
    /// Fraction of a bend violation removed per step.
    pub stiffness: f32,
    /// Probe budget for the distance search.
    pub search_steps: u32,
    pub anchor: AnchorMode,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            joint_count: 7,
            total_length: 7.0,
            min_bend_angle: 140.0,
            stiffness: 0.3,
            search_steps: 50,
            anchor: AnchorMode::Dual,
        }
    }
}

impl ChainConfig {
    pub const JOINT_COUNT_RANGE: std::ops::RangeInclusive<usize> = 3..=20;

    pub fn segment_length(&self) -> f32 {
        self.total_length / self.joint_count as f32
    }

    /// Distance from the anchor to joint 0.
    pub fn anchor_offset(&self) -> f32 {
        match self.anchor {
            AnchorMode::Single { offset: Some(o) } => o,
            _ => self.segment_length(),
        }
    }

    /// Length of one distance-search probe increment.
    pub fn probe_step(&self) -> f32 {
        self.segment_length() / self.search_steps.max(1) as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Self::JOINT_COUNT_RANGE.contains(&self.joint_count) {
            return Err(ConfigError::JointCount(self.joint_count));
        }
        if !(self.total_length.is_finite() && self.total_length > 0.0) {
            return Err(ConfigError::TotalLength(self.total_length));
        }
        if !(self.min_bend_angle > 0.0 && self.min_bend_angle < 180.0) {
            return Err(ConfigError::MinBendAngle(self.min_bend_angle));
        }
        if !(0.0..=1.0).contains(&self.stiffness) {
            return Err(ConfigError::Stiffness(self.stiffness));
        }
        if self.search_steps == 0 {
            return Err(ConfigError::SearchSteps);
        }
        if let AnchorMode::Single { offset: Some(o) } = self.anchor {
            if !(o.is_finite() && o > 0.0) {
                return Err(ConfigError::AnchorOffset(o));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ChainConfig::default().validate(), Ok(()));
    }

    #[test]
    fn probe_step_divides_segment() {
        let cfg = ChainConfig { total_length: 10.0, joint_count: 5, search_steps: 40, ..Default::default() };
        assert!((cfg.probe_step() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn validate_reports_first_offending_field() {
        let base = ChainConfig::default();
        let cases = [
            (ChainConfig { joint_count: 21, ..base.clone() }, ConfigError::JointCount(21)),
            (ChainConfig { total_length: 0.0, ..base.clone() }, ConfigError::TotalLength(0.0)),
            (ChainConfig { min_bend_angle: 180.0, ..base.clone() }, ConfigError::MinBendAngle(180.0)),
            (ChainConfig { search_steps: 0, ..base.clone() }, ConfigError::SearchSteps),
            (
                ChainConfig { anchor: AnchorMode::Single { offset: Some(-1.0) }, ..base.clone() },
                ConfigError::AnchorOffset(-1.0),
            ),
        ];
        for (cfg, expected) in cases {
            assert_eq!(cfg.validate(), Err(expected));
        }
    }

    #[test]
    fn zero_stiffness_is_structurally_valid() {
        let cfg = ChainConfig { stiffness: 0.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn pass_start_depends_on_mode() {
        assert_eq!(AnchorMode::Dual.pass_start(), 2);
        assert_eq!(AnchorMode::Single { offset: None }.pass_start(), 1);
    }
}
