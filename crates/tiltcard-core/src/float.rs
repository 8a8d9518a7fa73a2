//! Ambient idle motion, independent of input.

use crate::constants::*;
use glam::Vec2;
use std::time::Duration;

const X_KEYFRAMES: &[f32] = &[0.0, 1.0, 0.0];
const Y_KEYFRAMES: &[f32] = &[0.0, -1.0, 0.0, 1.0, 0.0];

/// Cubic ease-in-out over \[0, 1\].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A keyframe track looping forever after an initial delay.
#[derive(Clone, Debug)]
pub struct KeyframeLoop {
    keyframes: &'static [f32],
    period_sec: f32,
    delay_sec: f32,
}

impl KeyframeLoop {
    pub fn new(keyframes: &'static [f32], period_sec: f32, delay_sec: f32) -> Self {
        Self {
            keyframes,
            period_sec,
            delay_sec: delay_sec.max(0.0),
        }
    }

    pub fn period_sec(&self) -> f32 {
        self.period_sec
    }

    pub fn delay_sec(&self) -> f32 {
        self.delay_sec
    }

    pub fn sample(&self, t_sec: f32) -> f32 {
        let first = self.keyframes.first().copied().unwrap_or(0.0);
        let segments = self.keyframes.len().saturating_sub(1);
        if segments == 0 || t_sec < self.delay_sec || !(self.period_sec > 0.0) {
            return first;
        }
        let phase = ((t_sec - self.delay_sec) / self.period_sec).fract();
        let pos = phase * segments as f32;
        let i = (pos.floor() as usize).min(segments - 1);
        let local = ease_in_out(pos - i as f32);
        let (a, b) = (self.keyframes[i], self.keyframes[i + 1]);
        a + (b - a) * local
    }
}

/// Two desynchronised drivers; x cycles 0→1→0, y cycles 0→−1→0→1→0.
#[derive(Clone, Debug)]
pub struct FloatOscillator {
    enabled: bool,
    x: KeyframeLoop,
    y: KeyframeLoop,
}

impl FloatOscillator {
    pub fn new(float_offset: f32, float_speed: f32, enabled: bool) -> Self {
        let speed = if float_speed > 0.0 { float_speed } else { 1.0 };
        Self {
            enabled,
            x: KeyframeLoop::new(
                X_KEYFRAMES,
                FLOAT_X_PERIOD_SEC / speed,
                float_offset * FLOAT_X_DELAY_PER_OFFSET,
            ),
            y: KeyframeLoop::new(
                Y_KEYFRAMES,
                FLOAT_Y_PERIOD_SEC / speed,
                float_offset * FLOAT_Y_DELAY_PER_OFFSET,
            ),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn x_track(&self) -> &KeyframeLoop {
        &self.x
    }

    pub fn y_track(&self) -> &KeyframeLoop {
        &self.y
    }

    /// Driver values at `elapsed` since the card mounted; zero when disabled.
    pub fn sample(&self, elapsed: Duration) -> Vec2 {
        if !self.enabled {
            return Vec2::ZERO;
        }
        let t = elapsed.as_secs_f32();
        Vec2::new(self.x.sample(t), self.y.sample(t))
    }
}
