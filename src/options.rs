use crate::constants::*;
use tiltcard_core::TiltConfig;

/// Caller-facing options for one card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardOptions {
    pub selected: bool,
    pub float_offset: f32,
    pub float_speed: f32,
    pub thickness: f32,
}

impl Default for CardOptions {
    fn default() -> Self {
        let base = TiltConfig::default();
        Self {
            selected: false,
            float_offset: base.float_offset,
            float_speed: base.float_speed,
            thickness: base.thickness,
        }
    }
}

impl CardOptions {
    /// Read options from a card root's attributes. `index` (position among
    /// auto-mounted siblings) seeds the float offset when none is given.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>, index: usize) -> Self {
        let base = Self::default();
        Self {
            selected: parse_flag(attr(SELECTED_ATTR).as_deref()),
            float_offset: parse_f32(attr(FLOAT_OFFSET_ATTR).as_deref()).unwrap_or(index as f32),
            float_speed: parse_f32(attr(FLOAT_SPEED_ATTR).as_deref())
                .filter(|s| *s > 0.0)
                .unwrap_or(base.float_speed),
            thickness: parse_f32(attr(THICKNESS_ATTR).as_deref())
                .filter(|t| *t >= 0.0)
                .unwrap_or(base.thickness),
        }
    }

    pub fn to_config(&self) -> TiltConfig {
        TiltConfig {
            float_offset: self.float_offset,
            float_speed: self.float_speed,
            thickness: self.thickness,
            ..TiltConfig::default()
        }
    }
}

#[inline]
pub fn parse_f32(value: Option<&str>) -> Option<f32> {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Boolean data attribute: present means true unless spelled "false" or "0".
#[inline]
pub fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => v != "false" && v != "0",
    }
}

/// Registry id recorded on a mounted card root.
#[inline]
pub fn parse_mounted_id(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok()).filter(|id| *id > 0)
}

pub fn is_handheld_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    HANDHELD_UA_TOKENS.iter().any(|t| ua.contains(t))
}
