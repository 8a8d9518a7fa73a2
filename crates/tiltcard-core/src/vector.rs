//! Tilt vector and card geometry.

use glam::Vec2;

/// Normalised pointer displacement from the card centre.
///
/// Both components are kept in \[-1, 1\]; every constructor clamps, so a
/// `TiltVector` held anywhere in the crate satisfies the bound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltVector(Vec2);

impl TiltVector {
    pub const REST: TiltVector = TiltVector(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self::from_vec2(Vec2::new(x, y))
    }

    pub fn from_vec2(v: Vec2) -> Self {
        // NaN inputs collapse to rest instead of poisoning the springs
        let v = if v.is_finite() { v } else { Vec2::ZERO };
        Self(v.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }

    /// Largest absolute component.
    pub fn magnitude(&self) -> f32 {
        self.0.abs().max_element()
    }

    pub fn is_rest(&self) -> bool {
        self.0 == Vec2::ZERO
    }
}

/// Card bounds in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// A rect with no area cannot normalise a pointer position.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}
