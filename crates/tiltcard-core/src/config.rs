//! Per-card tuning.
//!
//! The empirical constants (shake threshold, hold duration, spring
//! coefficients) are carried here instead of being hard-coded so callers and
//! tests can override them. `TiltConfig::default()` reproduces the stock feel.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("float speed must be finite and positive, got {0}")]
    FloatSpeed(f32),
    #[error("float offset must be finite, got {0}")]
    FloatOffset(f32),
    #[error("card thickness must be finite and non-negative, got {0}")]
    Thickness(f32),
    #[error("{0} must not be zero")]
    ZeroDuration(&'static str),
    #[error("shake threshold must be finite and positive, got {0}")]
    ShakeThreshold(f32),
    #[error("decay factor must be in (0, 1), got {0}")]
    DecayFactor(f32),
    #[error("drag span factor must be finite and positive, got {0}")]
    DragSpan(f32),
    #[error(
        "spring `{name}` needs positive stiffness and non-negative damping \
         (k={stiffness}, c={damping})"
    )]
    Spring {
        name: &'static str,
        stiffness: f32,
        damping: f32,
    },
}

/// Stiffness/damping pair for a unit-mass spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringParams {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    pub const fn tilt() -> Self {
        Self::new(TILT_SPRING_STIFFNESS, TILT_SPRING_DAMPING)
    }

    pub const fn flip() -> Self {
        Self::new(FLIP_SPRING_STIFFNESS, FLIP_SPRING_DAMPING)
    }

    /// Damping ratio ζ; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let ok = self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.damping.is_finite()
            && self.damping >= 0.0;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::Spring {
                name,
                stiffness: self.stiffness,
                damping: self.damping,
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltConfig {
    /// Phase delay seed, usually the card's index among its siblings.
    pub float_offset: f32,
    /// Multiplier on the ambient float rate.
    pub float_speed: f32,
    /// Depth of the card box in CSS pixels; faces are pushed out by half.
    pub thickness: f32,
    pub hold_duration: Duration,
    pub shake_threshold: f32,
    pub kick_duration: Duration,
    pub decay_interval: Duration,
    pub decay_factor: f32,
    pub drag_span_factor: f32,
    pub tilt_spring: SpringParams,
    pub scale_spring: SpringParams,
    pub flip_spring: SpringParams,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            float_offset: 0.0,
            float_speed: 1.0,
            thickness: DEFAULT_THICKNESS_PX,
            hold_duration: Duration::from_millis(HOLD_MS),
            shake_threshold: SHAKE_THRESHOLD,
            kick_duration: Duration::from_millis(SHAKE_KICK_MS),
            decay_interval: Duration::from_millis(DECAY_TICK_MS),
            decay_factor: DECAY_FACTOR,
            drag_span_factor: DRAG_SPAN_FACTOR,
            tilt_spring: SpringParams::tilt(),
            scale_spring: SpringParams::tilt(),
            flip_spring: SpringParams::flip(),
        }
    }
}

impl TiltConfig {
    /// Config for the card at `index` in a row of siblings.
    pub fn for_index(index: usize) -> Self {
        Self {
            float_offset: index as f32,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.float_speed.is_finite() && self.float_speed > 0.0) {
            return Err(ConfigError::FloatSpeed(self.float_speed));
        }
        if !self.float_offset.is_finite() {
            return Err(ConfigError::FloatOffset(self.float_offset));
        }
        if !(self.thickness.is_finite() && self.thickness >= 0.0) {
            return Err(ConfigError::Thickness(self.thickness));
        }
        if self.hold_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("hold_duration"));
        }
        if self.kick_duration.is_zero() {
            return Err(ConfigError::ZeroDuration("kick_duration"));
        }
        if self.decay_interval.is_zero() {
            return Err(ConfigError::ZeroDuration("decay_interval"));
        }
        if !(self.shake_threshold.is_finite() && self.shake_threshold > 0.0) {
            return Err(ConfigError::ShakeThreshold(self.shake_threshold));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(ConfigError::DecayFactor(self.decay_factor));
        }
        if !(self.drag_span_factor.is_finite() && self.drag_span_factor > 0.0) {
            return Err(ConfigError::DragSpan(self.drag_span_factor));
        }
        self.tilt_spring.validate("tilt")?;
        self.scale_spring.validate("scale")?;
        self.flip_spring.validate("flip")?;
        Ok(())
    }
}
