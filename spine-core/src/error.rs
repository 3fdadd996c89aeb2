use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("joint_count must be in [3, 20], got {0}")]
    JointCount(usize),
    #[error("total_length must be finite and positive, got {0}")]
    TotalLength(f32),
    #[error("min_bend_angle must be in (0, 180) degrees, got {0}")]
    MinBendAngle(f32),
    #[error("stiffness must be in [0, 1], got {0}")]
    Stiffness(f32),
    #[error("search_steps must be at least 1")]
    SearchSteps,
    #[error("single-anchor offset must be finite and positive, got {0}")]
    AnchorOffset(f32),
}
