//! Mapping smoothed state onto the values the styling layer binds.

use crate::constants::*;
use crate::flip::{visible_face, Face};
use glam::Vec2;

/// Affine map of `v` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, clamped
/// to the output range. Output bounds may be given in either order.
#[inline]
pub fn map_clamped(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let t = (v - in_lo) / (in_hi - in_lo);
    let out = out_lo + (out_hi - out_lo) * t;
    out.clamp(out_lo.min(out_hi), out_lo.max(out_hi))
}

/// Everything one animation frame needs to render a card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_x_px: f32,
    pub translate_y_px: f32,
    pub scale: f32,
    pub flip_deg: f32,
    pub glare_x_pct: f32,
    pub glare_y_pct: f32,
    pub face: Face,
    pub thickness_px: f32,
}

impl Default for CardTransform {
    fn default() -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            translate_x_px: 0.0,
            translate_y_px: 0.0,
            scale: 1.0,
            flip_deg: 0.0,
            glare_x_pct: 50.0,
            glare_y_pct: 50.0,
            face: Face::Front,
            thickness_px: 0.0,
        }
    }
}

impl CardTransform {
    /// Build from spring outputs. `tilt` is the smoothed tilt vector and
    /// `float` the ambient oscillator sample (zero on touch platforms).
    pub fn compose(tilt: Vec2, scale: f32, flip_deg: f32, float: Vec2, thickness_px: f32) -> Self {
        let span = TILT_INPUT_SPAN;
        // Tilting toward +y (down) rotates the top edge away: inverted sign.
        let rotate_x = map_clamped(tilt.y, -span, span, MAX_ROTATE_DEG, -MAX_ROTATE_DEG);
        let rotate_y = map_clamped(tilt.x, -span, span, -MAX_ROTATE_DEG, MAX_ROTATE_DEG);
        let translate_x = map_clamped(tilt.x, -span, span, MAX_TRANSLATE_PX, -MAX_TRANSLATE_PX);
        let translate_y = map_clamped(tilt.y, -span, span, MAX_TRANSLATE_PX, -MAX_TRANSLATE_PX);

        let glare = |t: f32, f: f32| {
            let base = map_clamped(t, -span, span, 0.0, 100.0);
            (base + FLOAT_GLARE_WEIGHT * f * 50.0).clamp(0.0, 100.0)
        };

        Self {
            rotate_x_deg: rotate_x + float.y * FLOAT_ROTATE_DEG,
            rotate_y_deg: rotate_y + float.x * FLOAT_ROTATE_DEG,
            translate_x_px: translate_x,
            translate_y_px: translate_y - float.x * FLOAT_LIFT_PX,
            scale,
            flip_deg,
            glare_x_pct: glare(tilt.x, float.x),
            glare_y_pct: glare(tilt.y, float.y),
            face: visible_face(flip_deg),
            thickness_px,
        }
    }

    /// CSS `transform` for the tilting body.
    pub fn body_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0px) \
             rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
            self.translate_x_px,
            self.translate_y_px,
            self.rotate_x_deg,
            self.rotate_y_deg,
            self.scale
        )
    }

    /// CSS `transform` for the flipping layer that holds both faces.
    pub fn flip_css(&self) -> String {
        format!("rotateY({:.3}deg)", self.flip_deg)
    }

    /// CSS `transform` placing a face on its side of the card box.
    pub fn face_css(&self, face: Face) -> String {
        let depth = self.thickness_px * 0.5;
        match face {
            Face::Front => format!("translateZ({:.2}px)", depth),
            Face::Back => format!("rotateY(180deg) translateZ({:.2}px)", depth),
        }
    }

    pub fn glare_x(&self) -> String {
        format_pct(self.glare_x_pct)
    }

    pub fn glare_y(&self) -> String {
        format_pct(self.glare_y_pct)
    }
}

#[inline]
pub fn format_pct(v: f32) -> String {
    format!("{:.2}%", v)
}
