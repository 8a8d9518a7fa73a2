// Host-side tests for the card controller driven end to end.

use glam::Vec2;
use std::time::Duration;
use tiltcard_core::{
    visible_face, Acceleration, Capabilities, CardRect, Face, InteractionMode,
    OrientationReading, PermissionState, PressKind, SensorKind, TiltCard, TiltConfig,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn desktop() -> TiltCard {
    TiltCard::new(TiltConfig::default(), Capabilities::desktop(), false, 3).unwrap()
}

fn handheld() -> TiltCard {
    TiltCard::new(TiltConfig::default(), Capabilities::handheld(), false, 3).unwrap()
}

fn rect() -> CardRect {
    CardRect::new(0.0, 0.0, 400.0, 300.0)
}

fn reading(beta: f64, gamma: f64) -> OrientationReading {
    OrientationReading {
        beta: Some(beta),
        gamma: Some(gamma),
    }
}

#[test]
fn hover_top_left_tilts_toward_pointer() {
    let mut card = desktop();
    card.pointer_enter();
    assert!(card.pointer_move(Vec2::new(40.0, 30.0), &rect()));
    assert_eq!(card.mode(), InteractionMode::Hover);

    let mut t = card.advance(ms(0));
    for frame in 1..=125 {
        t = card.advance(ms(frame * 16));
    }
    // the ambient float adds at most 3 degrees either way
    assert!(t.rotate_x_deg > 20.0, "rotate_x {}", t.rotate_x_deg);
    assert!(t.rotate_y_deg < -20.0, "rotate_y {}", t.rotate_y_deg);
    assert!(t.translate_x_px > 0.0);
    assert_eq!(t.scale, 1.15);
    assert!(t.glare_x_pct < 50.0 && t.glare_y_pct < 50.0);
}

#[test]
fn leaving_the_card_returns_to_rest() {
    let mut card = desktop();
    card.pointer_move(Vec2::new(390.0, 290.0), &rect());
    card.pointer_leave();
    assert_eq!(card.mode(), InteractionMode::Idle);
    assert!(card.raw().is_rest());
    for frame in 0..=180 {
        card.advance(ms(frame * 16));
    }
    assert!(card.filter().is_settled());
    assert_eq!(card.filter().scale(), 1.0);
}

#[test]
fn glare_stays_in_percent_range() {
    let mut card = desktop();
    for p in [Vec2::new(-500.0, -500.0), Vec2::new(900.0, 900.0)] {
        card.pointer_move(p, &rect());
        for frame in 0..400 {
            let t = card.advance(ms(frame * 8));
            assert!((0.0..=100.0).contains(&t.glare_x_pct));
            assert!((0.0..=100.0).contains(&t.glare_y_pct));
        }
    }
}

#[test]
fn touch_platforms_ignore_mouse_hover() {
    let mut card = handheld();
    card.pointer_enter();
    assert!(!card.pointer_move(Vec2::new(40.0, 30.0), &rect()));
    assert_eq!(card.mode(), InteractionMode::Idle);
    assert!(!card.float().is_enabled());
}

#[test]
fn orientation_drives_tilt_on_handheld() {
    let mut card = handheld();
    assert!(card.orientation(&reading(48.0, -6.0)));
    assert_eq!(card.mode(), InteractionMode::Orientation);
    assert!((card.raw().x() - (-0.4)).abs() < 1e-6);
    assert!((card.raw().y() - 0.2).abs() < 1e-6);
    assert_eq!(card.debug_label().as_deref(), Some("B:48 G:-6"));
}

#[test]
fn orientation_with_missing_angle_keeps_previous_vector() {
    let mut card = handheld();
    card.orientation(&reading(48.0, -6.0));
    let before = card.raw();
    assert!(!card.orientation(&OrientationReading {
        beta: None,
        gamma: Some(12.0),
    }));
    assert_eq!(card.raw(), before);
}

#[test]
fn orientation_is_ignored_while_dragging() {
    let mut card = handheld();
    let fx = card.press_start(PressKind::Touch, ms(0));
    let token = fx
        .iter()
        .find_map(|e| match e {
            tiltcard_core::Effect::ArmHoldTimer { token, .. } => Some(*token),
            _ => None,
        })
        .unwrap();
    card.hold_elapsed(token);
    assert!(card.drag_move(Vec2::new(350.0, 150.0), &rect()));
    let dragged = card.raw();
    assert!(!card.orientation(&reading(90.0, 30.0)));
    assert_eq!(card.raw(), dragged);
    assert_eq!(card.mode(), InteractionMode::Dragging);
    // decay is suspended too
    assert!(!card.decay_tick());
    assert_eq!(card.raw(), dragged);
}

#[test]
fn hover_owns_tilt_over_orientation() {
    let mut card = TiltCard::new(
        TiltConfig::default(),
        Capabilities {
            supports_touch: false,
            has_orientation_sensor: true,
            has_motion_sensor: false,
        },
        false,
        3,
    )
    .unwrap();
    card.pointer_move(Vec2::new(40.0, 30.0), &rect());
    let hovered = card.raw();
    assert!(!card.orientation(&reading(80.0, 20.0)));
    assert_eq!(card.raw(), hovered);
    card.pointer_leave();
    assert!(card.orientation(&reading(80.0, 20.0)));
    assert_eq!(card.mode(), InteractionMode::Orientation);
}

#[test]
fn shake_kicks_briefly_then_recentres() {
    let mut card = handheld();
    assert!(!card.motion(Some(&Acceleration::new(0.0, 0.0, 9.8)), ms(0)));
    assert!(card.raw().is_rest());

    assert!(card.motion(Some(&Acceleration::new(20.0, 5.0, 5.0)), ms(16)));
    let kick = card.raw();
    assert!(kick.magnitude() <= 0.2);
    assert!(card.is_kicking());

    card.advance(ms(40));
    assert_eq!(card.raw(), kick);
    card.advance(ms(66));
    assert!(card.raw().is_rest());
    assert!(!card.is_kicking());
}

#[test]
fn motion_event_without_acceleration_is_ignored() {
    let mut card = handheld();
    assert!(!card.motion(None, ms(0)));
    assert!(card.raw().is_rest());
}

#[test]
fn decay_pulls_orientation_sample_to_rest() {
    let mut card = handheld();
    card.orientation(&reading(60.0, 9.0));
    let mut ticks = 0;
    while card.decay_tick() {
        ticks += 1;
        assert!(ticks < 100);
    }
    assert!(card.raw().is_rest());
}

#[test]
fn selection_flips_to_back_and_returns() {
    let mut card = desktop();
    assert_eq!(card.flip().face(), Face::Front);
    assert!(card.set_selected(true));
    assert!(!card.set_selected(true));

    let mut t = card.advance(ms(0));
    for frame in 1..=120 {
        t = card.advance(ms(frame * 16));
    }
    assert_eq!(t.flip_deg, 180.0);
    assert_eq!(t.face, Face::Back);
    assert!(card.selected());

    card.set_selected(false);
    for frame in 121..=240 {
        t = card.advance(ms(frame * 16));
    }
    assert_eq!(t.flip_deg, 0.0);
    assert_eq!(t.face, Face::Front);
}

#[test]
fn mounting_selected_starts_on_back_face() {
    let card = TiltCard::new(TiltConfig::default(), Capabilities::desktop(), true, 3).unwrap();
    assert_eq!(card.flip().angle_deg(), 180.0);
    assert_eq!(card.flip().face(), Face::Back);
}

#[test]
fn visible_face_boundaries() {
    assert_eq!(visible_face(0.0), Face::Front);
    assert_eq!(visible_face(89.9), Face::Front);
    assert_eq!(visible_face(90.0), Face::Back);
    assert_eq!(visible_face(180.0), Face::Back);
    assert_eq!(visible_face(270.0), Face::Back);
    assert_eq!(visible_face(271.0), Face::Front);
    assert_eq!(visible_face(-5.0), Face::Front);
    assert_eq!(visible_face(540.0), Face::Back);
}

#[test]
fn face_css_pushes_faces_apart_by_thickness() {
    let config = TiltConfig {
        thickness: 8.0,
        ..TiltConfig::default()
    };
    let mut card = TiltCard::new(config, Capabilities::handheld(), false, 3).unwrap();
    let t = card.advance(ms(0));
    assert_eq!(t.face_css(Face::Front), "translateZ(4.00px)");
    assert_eq!(t.face_css(Face::Back), "rotateY(180deg) translateZ(4.00px)");
    assert_eq!(t.glare_x(), "50.00%");
}

#[test]
fn granted_sensor_subscribes_once() {
    let mut card = handheld();
    card.press_start(PressKind::Touch, ms(0));
    let fx = card.permission_resolved(SensorKind::Motion, PermissionState::Granted);
    assert_eq!(fx.len(), 1);
    let fx = card.permission_resolved(SensorKind::Motion, PermissionState::Granted);
    assert!(fx.is_empty());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = TiltConfig {
        float_speed: 0.0,
        ..TiltConfig::default()
    };
    assert!(TiltCard::new(config, Capabilities::desktop(), false, 0).is_err());
}

fn start_drag(card: &mut TiltCard, kind: PressKind) {
    let fx = card.press_start(kind, ms(0));
    let token = fx
        .iter()
        .find_map(|e| match e {
            tiltcard_core::Effect::ArmHoldTimer { token, .. } => Some(*token),
            _ => None,
        })
        .unwrap();
    card.hold_elapsed(token);
    assert_eq!(card.mode(), InteractionMode::Dragging);
}

#[test]
fn pointer_leave_does_not_end_a_drag() {
    let mut card = desktop();
    card.pointer_enter();
    start_drag(&mut card, PressKind::Mouse);
    assert!(card.drag_move(Vec2::new(-100.0, 0.0), &rect()));
    let dragged = card.raw();
    assert!(!dragged.is_rest());

    card.pointer_leave();
    assert_eq!(card.raw(), dragged);
    assert_eq!(card.mode(), InteractionMode::Dragging);
    // hover sampling is suspended as well
    assert!(!card.pointer_move(Vec2::new(200.0, 150.0), &rect()));
    assert_eq!(card.raw(), dragged);
}

#[test]
fn shake_is_not_applied_while_dragging() {
    let mut card = handheld();
    start_drag(&mut card, PressKind::Touch);
    assert!(card.drag_move(Vec2::new(350.0, 150.0), &rect()));
    let dragged = card.raw();

    assert!(!card.motion(Some(&Acceleration::new(0.0, 0.0, 9.8)), ms(300)));
    assert!(!card.motion(Some(&Acceleration::new(20.0, 5.0, 5.0)), ms(316)));
    assert_eq!(card.raw(), dragged);
    assert!(!card.is_kicking());
}

#[test]
fn orientation_mode_ends_when_vector_decays_to_rest() {
    let mut card = handheld();
    card.orientation(&reading(52.0, 4.0));
    assert_eq!(card.mode(), InteractionMode::Orientation);
    while card.decay_tick() {
        if !card.raw().is_rest() {
            assert_eq!(card.mode(), InteractionMode::Orientation);
        }
    }
    assert_eq!(card.mode(), InteractionMode::Idle);
}

#[test]
fn tap_on_handheld_returns_to_idle() {
    let mut card = handheld();
    card.orientation(&reading(52.0, 4.0));
    card.press_start(PressKind::Touch, ms(0));
    card.release(ms(80));
    assert!(card.raw().is_rest());
    assert_eq!(card.mode(), InteractionMode::Idle);
}

#[test]
fn hover_mode_lasts_until_pointer_leaves() {
    let mut card = desktop();
    card.pointer_move(Vec2::new(40.0, 30.0), &rect());
    while card.decay_tick() {}
    assert!(card.raw().is_rest());
    assert_eq!(card.mode(), InteractionMode::Hover);
    card.pointer_leave();
    assert_eq!(card.mode(), InteractionMode::Idle);
}
