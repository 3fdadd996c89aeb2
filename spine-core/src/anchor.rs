//! Anchor poses and simple drivers that produce one pose per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space pose the chain head follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPose {
    pub position: Vec2,
    /// Heading; expected to be unit length.
    pub forward: Vec2,
}

impl AnchorPose {
    pub fn new(position: Vec2, forward: Vec2) -> Self {
        Self { position, forward }
    }

    /// Pose with `forward` renormalised, falling back to +Y for a zero heading.
    pub fn normalized(position: Vec2, forward: Vec2) -> Self {
        let forward = forward.try_normalize().unwrap_or(Vec2::Y);
        Self { position, forward }
    }
}

impl Default for AnchorPose {
    fn default() -> Self { Self { position: Vec2::ZERO, forward: Vec2::Y } }
}

/// Source of anchor poses, queried once per simulation tick.
pub trait AnchorDriver {
    fn pose(&mut self, tick: u64) -> AnchorPose;
}

/// Holds one pose forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stationary(pub AnchorPose);

impl AnchorDriver for Stationary {
    fn pose(&mut self, _tick: u64) -> AnchorPose { self.0 }
}

/// Circles `center` counter-clockwise, facing along the tangent.
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    pub center: Vec2,
    pub radius: f32,
    /// Degrees travelled per tick.
    pub degrees_per_tick: f32,
}

impl AnchorDriver for Orbit {
    fn pose(&mut self, tick: u64) -> AnchorPose {
        let theta = (self.degrees_per_tick * tick as f32).to_radians();
        let (sin, cos) = theta.sin_cos();
        let position = self.center + Vec2::new(cos, sin) * self.radius;
        let tangent = Vec2::new(-sin, cos);
        let forward = if self.degrees_per_tick < 0.0 { -tangent } else { tangent };
        AnchorPose::new(position, forward)
    }
}

/// Constant-velocity straight line.
#[derive(Debug, Clone, Copy)]
pub struct Linear {
    pub start: Vec2,
    pub velocity: Vec2,
}

impl AnchorDriver for Linear {
    fn pose(&mut self, tick: u64) -> AnchorPose {
        AnchorPose::normalized(self.start + self.velocity * tick as f32, self.velocity)
    }
}

/// Forward motion with a sinusoidal heading, like a swimming eel.
#[derive(Debug, Clone, Copy)]
pub struct Slither {
    pub position: Vec2,
    pub heading_deg: f32,
    pub speed: f32,
    /// Peak heading swing either side of `heading_deg`.
    pub amplitude_deg: f32,
    pub period_ticks: f32,
}

impl AnchorDriver for Slither {
    fn pose(&mut self, tick: u64) -> AnchorPose {
        let phase = std::f32::consts::TAU * tick as f32 / self.period_ticks.max(1.0);
        let heading = (self.heading_deg + self.amplitude_deg * phase.sin()).to_radians();
        let forward = Vec2::new(-heading.sin(), heading.cos());
        if tick > 0 {
            self.position += forward * self.speed;
        }
        AnchorPose::new(self.position, forward)
    }
}
