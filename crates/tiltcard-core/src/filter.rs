//! Two-stage smoothing of the tilt vector: discrete decay toward rest on a
//! fixed tick, then a continuous presentation spring per axis.

use crate::config::TiltConfig;
use crate::constants::{DECAY_SNAP_EPSILON, HOVER_SCALE};
use crate::spring::Spring;
use crate::vector::TiltVector;
use glam::Vec2;

#[inline]
fn decay_component(v: f32, factor: f32) -> f32 {
    if v.abs() > DECAY_SNAP_EPSILON {
        v * factor
    } else {
        0.0
    }
}

/// One idle-decay step. Each component shrinks geometrically and snaps to 0
/// once inside the epsilon band, so the magnitude strictly decreases until
/// rest and the sign never flips.
pub fn decay_step(v: TiltVector, factor: f32) -> TiltVector {
    TiltVector::new(decay_component(v.x(), factor), decay_component(v.y(), factor))
}

#[derive(Clone, Debug)]
pub struct TiltFilter {
    raw: TiltVector,
    decay_factor: f32,
    x: Spring,
    y: Spring,
    scale: Spring,
}

impl TiltFilter {
    pub fn new(config: &TiltConfig) -> Self {
        Self {
            raw: TiltVector::REST,
            decay_factor: config.decay_factor,
            x: Spring::new(config.tilt_spring, 0.0),
            y: Spring::new(config.tilt_spring, 0.0),
            scale: Spring::new(config.scale_spring, 1.0),
        }
    }

    /// The authoritative (unsmoothed) vector.
    pub fn raw(&self) -> TiltVector {
        self.raw
    }

    /// Last write wins; no sample is queued.
    pub fn set_raw(&mut self, v: TiltVector) {
        self.raw = v;
    }

    pub fn reset(&mut self) {
        self.raw = TiltVector::REST;
    }

    /// Apply one decay tick; returns true when the raw vector moved.
    pub fn decay_tick(&mut self) -> bool {
        if self.raw.is_rest() {
            return false;
        }
        self.raw = decay_step(self.raw, self.decay_factor);
        true
    }

    /// Step the presentation springs toward the current raw vector.
    pub fn advance(&mut self, dt_sec: f32) {
        self.x.set_target(self.raw.x());
        self.y.set_target(self.raw.y());
        self.scale
            .set_target(if self.raw.is_rest() { 1.0 } else { HOVER_SCALE });
        self.x.step(dt_sec);
        self.y.step(dt_sec);
        self.scale.step(dt_sec);
    }

    /// Smoothed tilt as consumed by the transform mapping.
    pub fn output(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn scale_target(&self) -> f32 {
        self.scale.target()
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.scale.is_settled()
    }
}
