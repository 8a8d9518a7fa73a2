use crate::config::SpringParams;
use crate::constants::FLIP_SELECTED_DEG;
use crate::spring::Spring;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Which face a box rotated by `angle_deg` around its vertical axis shows.
/// Backface culling makes this exclusive: exactly one face is visible.
pub fn visible_face(angle_deg: f32) -> Face {
    let a = angle_deg.rem_euclid(360.0);
    if a < 90.0 || a > 270.0 {
        Face::Front
    } else {
        Face::Back
    }
}

/// Selection-driven front/back rotation with its own spring.
#[derive(Clone, Debug)]
pub struct FlipState {
    selected: bool,
    spring: Spring,
}

impl FlipState {
    /// Starts at rest on the face matching `selected`.
    pub fn new(params: SpringParams, selected: bool) -> Self {
        Self {
            selected,
            spring: Spring::new(params, target_for(selected)),
        }
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Returns true when the selection actually changed.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        self.spring.set_target(target_for(selected));
        true
    }

    pub fn target_deg(&self) -> f32 {
        self.spring.target()
    }

    pub fn angle_deg(&self) -> f32 {
        self.spring.value()
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        self.spring.step(dt_sec)
    }

    pub fn face(&self) -> Face {
        visible_face(self.angle_deg())
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

#[inline]
fn target_for(selected: bool) -> f32 {
    if selected {
        FLIP_SELECTED_DEG
    } else {
        0.0
    }
}
