// Default tuning for a tilt card. `TiltConfig::default()` is built from these.

// Input sampler
pub const MOUSE_SAMPLE_HALF_RANGE: f32 = 0.5; // mouse samples live in [-0.5, 0.5]
pub const ORIENTATION_DIVISOR_DEG: f32 = 15.0; // degrees of tilt per unit of sample
pub const ORIENTATION_BETA_REST_DEG: f32 = 45.0; // natural hand-held pitch
pub const ORIENTATION_CLAMP: f32 = 0.6;
pub const SHAKE_THRESHOLD: f32 = 15.0; // summed acceleration delta, m/s²
pub const SHAKE_KICK_MAX: f32 = 0.2; // kick sample magnitude per axis
pub const SHAKE_KICK_MS: u64 = 50;

// Idle decay
pub const DECAY_TICK_MS: u64 = 30;
pub const DECAY_FACTOR: f32 = 0.94;
pub const DECAY_SNAP_EPSILON: f32 = 0.01;

// Presentation springs (mass = 1)
pub const TILT_SPRING_STIFFNESS: f32 = 300.0;
pub const TILT_SPRING_DAMPING: f32 = 20.0;
pub const FLIP_SPRING_STIFFNESS: f32 = 200.0;
pub const FLIP_SPRING_DAMPING: f32 = 25.0;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // longer gaps (background tabs) are truncated
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.01;

// Long press
pub const HOLD_MS: u64 = 200;
pub const DRAG_SPAN_FACTOR: f32 = 1.5; // divisor is half-size * factor
pub const HAPTIC_PULSE_MS: u32 = 10;

// Transform mapping
pub const TILT_INPUT_SPAN: f32 = 0.5; // spring output range mapped onto the full angle
pub const MAX_ROTATE_DEG: f32 = 30.0;
pub const MAX_TRANSLATE_PX: f32 = 20.0;
pub const HOVER_SCALE: f32 = 1.15;
pub const FLIP_SELECTED_DEG: f32 = 180.0;

// Ambient float
pub const FLOAT_X_PERIOD_SEC: f32 = 5.0;
pub const FLOAT_Y_PERIOD_SEC: f32 = 7.0;
pub const FLOAT_X_DELAY_PER_OFFSET: f32 = 0.5;
pub const FLOAT_Y_DELAY_PER_OFFSET: f32 = 0.3;
pub const FLOAT_ROTATE_DEG: f32 = 3.0;
pub const FLOAT_LIFT_PX: f32 = 6.0;
pub const FLOAT_GLARE_WEIGHT: f32 = 0.2;

// Card geometry
pub const DEFAULT_THICKNESS_PX: f32 = 0.0;
