//! Interaction core for tilt cards.
//!
//! Platform-free: the web front-end feeds events in and applies the
//! resulting [`CardTransform`] and [`Effect`]s to the DOM.

pub mod card;
pub mod config;
pub mod constants;
pub mod filter;
pub mod flip;
pub mod float;
pub mod press;
pub mod sampler;
pub mod sensors;
pub mod spring;
pub mod transform;
pub mod vector;

pub use card::*;
pub use config::*;
pub use flip::{visible_face, Face, FlipState};
pub use float::FloatOscillator;
pub use press::{HoldToken, LongPress, PressKind, PressState, ReleaseOutcome};
pub use sensors::*;
pub use spring::Spring;
pub use transform::CardTransform;
pub use vector::{CardRect, TiltVector};
