pub mod anchor;
pub mod chain;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod solver;

pub use anchor::{AnchorDriver, AnchorPose};
pub use chain::{SpineChain, StepReport};
pub use config::{AnchorMode, ChainConfig};
pub use error::ConfigError;
pub use glam;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
