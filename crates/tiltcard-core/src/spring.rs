use crate::config::SpringParams;
use crate::constants::{
    SPRING_MAX_FRAME_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_SUBSTEP_SEC,
};

/// Unit-mass damped spring chasing a target value.
///
/// Integrated with semi-implicit Euler in fixed sub-steps so the result does
/// not depend on the display's frame rate.
#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(params: SpringParams, initial: f32) -> Self {
        Self {
            params,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_sec`; returns the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_settled() || !(dt_sec > 0.0) {
            return self.value;
        }
        let k = self.params.stiffness;
        let c = self.params.damping;
        let mut remaining = dt_sec.min(SPRING_MAX_FRAME_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let accel = -k * (self.value - self.target) - c * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (self.value - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
