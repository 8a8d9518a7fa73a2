//! Platform capabilities, sensor readings and the permission gate.

/// What the host platform offers, resolved once when a card is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Handheld/touch platform: disables mouse sampling and the ambient float.
    pub supports_touch: bool,
    pub has_orientation_sensor: bool,
    pub has_motion_sensor: bool,
}

impl Capabilities {
    pub fn desktop() -> Self {
        Self {
            supports_touch: false,
            has_orientation_sensor: false,
            has_motion_sensor: false,
        }
    }

    pub fn handheld() -> Self {
        Self {
            supports_touch: true,
            has_orientation_sensor: true,
            has_motion_sensor: true,
        }
    }

    pub fn has(&self, sensor: SensorKind) -> bool {
        match sensor {
            SensorKind::Orientation => self.has_orientation_sensor,
            SensorKind::Motion => self.has_motion_sensor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Orientation,
    Motion,
}

impl SensorKind {
    pub const ALL: [SensorKind; 2] = [SensorKind::Orientation, SensorKind::Motion];

    /// DOM event name carrying this sensor's readings.
    pub fn event_name(&self) -> &'static str {
        match self {
            SensorKind::Orientation => "deviceorientation",
            SensorKind::Motion => "devicemotion",
        }
    }
}

/// Outcome of a sensor permission negotiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GateState {
    #[default]
    NotAsked,
    Pending,
    Resolved(PermissionState),
}

/// Tracks negotiation per sensor so subscription only follows a grant.
#[derive(Clone, Debug, Default)]
pub struct SensorGate {
    orientation: GateState,
    motion: GateState,
}

impl SensorGate {
    pub fn new(caps: &Capabilities) -> Self {
        let initial = |present: bool| {
            if present {
                GateState::NotAsked
            } else {
                GateState::Resolved(PermissionState::Unavailable)
            }
        };
        Self {
            orientation: initial(caps.has_orientation_sensor),
            motion: initial(caps.has_motion_sensor),
        }
    }

    fn slot(&mut self, sensor: SensorKind) -> &mut GateState {
        match sensor {
            SensorKind::Orientation => &mut self.orientation,
            SensorKind::Motion => &mut self.motion,
        }
    }

    fn get(&self, sensor: SensorKind) -> GateState {
        match sensor {
            SensorKind::Orientation => self.orientation,
            SensorKind::Motion => self.motion,
        }
    }

    /// Whether a press should (re)negotiate access to `sensor`. Denied sensors
    /// are asked again: some platforms only answer inside a fresh gesture.
    pub fn wants_request(&self, sensor: SensorKind) -> bool {
        matches!(
            self.get(sensor),
            GateState::NotAsked | GateState::Resolved(PermissionState::Denied)
        )
    }

    pub fn mark_pending(&mut self, sensor: SensorKind) {
        *self.slot(sensor) = GateState::Pending;
    }

    /// Record an answer; returns true when the caller should subscribe now.
    pub fn resolve(&mut self, sensor: SensorKind, state: PermissionState) -> bool {
        let slot = self.slot(sensor);
        let newly_granted = state == PermissionState::Granted
            && *slot != GateState::Resolved(PermissionState::Granted);
        *slot = GateState::Resolved(state);
        newly_granted
    }

    pub fn is_granted(&self, sensor: SensorKind) -> bool {
        self.get(sensor) == GateState::Resolved(PermissionState::Granted)
    }
}

/// `deviceorientation` angles in degrees; either may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationReading {
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// `devicemotion` acceleration including gravity. Missing axes read as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Acceleration {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Acceleration {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub fn sum(&self) -> f64 {
        self.x.unwrap_or(0.0) + self.y.unwrap_or(0.0) + self.z.unwrap_or(0.0)
    }
}
