//! Per-step joint snapshots for external renderers, serialised as JSON.

use anyhow::Result;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::chain::SpineChain;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub step: u64,
    pub anchor: Vec2,
    pub joints: Vec<Vec2>,
    pub bend_angles_deg: Vec<f32>,
}

impl FrameRecord {
    pub fn capture(step: u64, anchor: Vec2, chain: &SpineChain) -> Self {
        Self {
            step,
            anchor,
            joints: chain.joints().to_vec(),
            bend_angles_deg: chain.bend_angles(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub joint_count: usize,
    pub segment_length: f32,
    pub min_bend_angle: f32,
    pub frames: Vec<FrameRecord>,
}

impl Trace {
    pub fn for_chain(chain: &SpineChain) -> Self {
        let cfg = chain.config();
        Self {
            joint_count: cfg.joint_count,
            segment_length: chain.segment_length(),
            min_bend_angle: cfg.min_bend_angle,
            frames: Vec::new(),
        }
    }

    pub fn record(&mut self, step: u64, anchor: Vec2, chain: &SpineChain) {
        self.frames.push(FrameRecord::capture(step, anchor, chain));
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: std::io::Write>(&self, w: W) -> Result<()> {
        serde_json::to_writer_pretty(w, self)?;
        Ok(())
    }
}
