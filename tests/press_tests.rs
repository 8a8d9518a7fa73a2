// Host-side tests for tap vs. long-press handling.

use glam::Vec2;
use std::time::Duration;
use tiltcard_core::{
    Capabilities, CardRect, Effect, Effects, HoldToken, InteractionMode, LongPress,
    PermissionState, PressKind, ReleaseOutcome, SensorKind, TiltCard, TiltConfig,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn desktop_card() -> TiltCard {
    TiltCard::new(TiltConfig::default(), Capabilities::desktop(), false, 1).unwrap()
}

fn handheld_card() -> TiltCard {
    TiltCard::new(TiltConfig::default(), Capabilities::handheld(), false, 1).unwrap()
}

fn armed_token(effects: &Effects) -> HoldToken {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::ArmHoldTimer { token, .. } => Some(*token),
            _ => None,
        })
        .expect("press should arm the hold timer")
}

fn clicks(effects: &Effects) -> usize {
    effects.iter().filter(|e| **e == Effect::Click).count()
}

#[test]
fn short_press_is_a_single_click() {
    let mut card = desktop_card();
    let fx = card.press_start(PressKind::Mouse, ms(0));
    assert!(fx.contains(&Effect::ArmHoldTimer {
        token: armed_token(&fx),
        after: ms(200),
    }));
    let fx = card.release(ms(150));
    assert_eq!(clicks(&fx), 1);
    assert!(fx.contains(&Effect::CancelHoldTimer));
    assert!(!fx.contains(&Effect::AttachDragListeners));
    assert_ne!(card.mode(), InteractionMode::Dragging);
}

#[test]
fn held_press_drags_and_never_clicks() {
    let mut card = desktop_card();
    let token = armed_token(&card.press_start(PressKind::Mouse, ms(0)));
    let fx = card.hold_elapsed(token);
    assert_eq!(fx.as_slice(), &[Effect::AttachDragListeners]);
    assert_eq!(card.mode(), InteractionMode::Dragging);

    let fx = card.release(ms(900));
    assert_eq!(clicks(&fx), 0);
    assert!(fx.contains(&Effect::DetachDragListeners));
    assert_eq!(card.mode(), InteractionMode::Idle);
    assert!(card.raw().is_rest());
}

#[test]
fn touch_hold_requests_haptic_pulse() {
    let mut card = handheld_card();
    let token = armed_token(&card.press_start(PressKind::Touch, ms(0)));
    let fx = card.hold_elapsed(token);
    assert!(fx.contains(&Effect::Haptic { millis: 10 }));
}

#[test]
fn stale_timer_cannot_start_a_drag() {
    let mut card = desktop_card();
    let first = armed_token(&card.press_start(PressKind::Mouse, ms(0)));
    card.release(ms(50));
    let second = armed_token(&card.press_start(PressKind::Mouse, ms(100)));
    assert_ne!(first, second);
    assert!(card.hold_elapsed(first).is_empty());
    assert!(!card.is_dragging());
    assert_eq!(clicks(&card.release(ms(180))), 1);
}

#[test]
fn release_after_threshold_without_timer_is_not_a_click() {
    let mut card = desktop_card();
    card.press_start(PressKind::Mouse, ms(0));
    let fx = card.release(ms(240));
    assert_eq!(clicks(&fx), 0);
    assert!(!card.is_dragging());
}

#[test]
fn release_without_press_does_nothing() {
    let mut card = desktop_card();
    assert!(card.release(ms(10)).is_empty());
}

#[test]
fn configured_hold_duration_is_used() {
    let config = TiltConfig {
        hold_duration: ms(350),
        ..TiltConfig::default()
    };
    let mut card = TiltCard::new(config, Capabilities::desktop(), false, 1).unwrap();
    let fx = card.press_start(PressKind::Mouse, ms(0));
    assert!(fx
        .iter()
        .any(|e| matches!(e, Effect::ArmHoldTimer { after, .. } if *after == ms(350))));
    assert_eq!(clicks(&card.release(ms(300))), 1);
}

#[test]
fn context_menu_ends_drag_and_is_suppressed() {
    let mut card = desktop_card();
    assert!(card.context_menu().is_empty());

    let token = armed_token(&card.press_start(PressKind::Mouse, ms(0)));
    card.hold_elapsed(token);
    let fx = card.context_menu();
    assert_eq!(fx.first(), Some(&Effect::SuppressContextMenu));
    assert!(fx.contains(&Effect::DetachDragListeners));
    assert_eq!(clicks(&fx), 0);
    assert_eq!(card.mode(), InteractionMode::Idle);
    // the trailing pointerup finds nothing pressed
    assert!(card.release(ms(400)).is_empty());
}

#[test]
fn pointer_cancel_while_pressed_never_clicks() {
    let mut card = desktop_card();
    card.press_start(PressKind::Touch, ms(0));
    let fx = card.cancel();
    assert_eq!(fx.as_slice(), &[Effect::UnwatchRelease, Effect::CancelHoldTimer]);
    assert!(card.release(ms(20)).is_empty());
}

#[test]
fn sensor_permission_is_requested_once_per_negotiation() {
    let mut card = handheld_card();
    let fx = card.press_start(PressKind::Touch, ms(0));
    assert!(fx.contains(&Effect::RequestPermission(SensorKind::Orientation)));
    assert!(fx.contains(&Effect::RequestPermission(SensorKind::Motion)));
    card.release(ms(10));

    // still pending: no second prompt
    let fx = card.press_start(PressKind::Touch, ms(20));
    assert!(!fx.iter().any(|e| matches!(e, Effect::RequestPermission(_))));
    card.release(ms(30));

    let fx = card.permission_resolved(SensorKind::Orientation, PermissionState::Granted);
    assert_eq!(fx.as_slice(), &[Effect::Subscribe(SensorKind::Orientation)]);
    let fx = card.permission_resolved(SensorKind::Motion, PermissionState::Denied);
    assert!(fx.is_empty());
    assert!(card.sensor_granted(SensorKind::Orientation));
    assert!(!card.sensor_granted(SensorKind::Motion));

    // a denied sensor is asked again on the next gesture; a granted one is not
    let fx = card.press_start(PressKind::Touch, ms(40));
    assert!(fx.contains(&Effect::RequestPermission(SensorKind::Motion)));
    assert!(!fx.contains(&Effect::RequestPermission(SensorKind::Orientation)));
}

#[test]
fn sensorless_desktop_never_prompts() {
    let mut card = desktop_card();
    let fx = card.press_start(PressKind::Mouse, ms(0));
    assert!(!fx.iter().any(|e| matches!(e, Effect::RequestPermission(_))));
}

#[test]
fn long_press_machine_ignores_presses_while_dragging() {
    let mut lp = LongPress::new(ms(200));
    let t = lp.press(PressKind::Touch, ms(0)).unwrap();
    assert_eq!(lp.hold_elapsed(t), Some(PressKind::Touch));
    assert!(lp.press(PressKind::Touch, ms(300)).is_none());
    assert!(lp.is_dragging());
    assert_eq!(lp.release(ms(400)), ReleaseOutcome::DragEnded);
    assert_eq!(lp.release(ms(401)), ReleaseOutcome::Idle);
}

#[test]
fn release_is_watched_for_the_whole_press() {
    let mut card = desktop_card();
    let fx = card.press_start(PressKind::Mouse, ms(0));
    assert!(fx.contains(&Effect::WatchRelease));

    // a tap released anywhere on the page ends the watch with the click
    let fx = card.release(ms(120));
    assert!(fx.contains(&Effect::UnwatchRelease));
    assert_eq!(clicks(&fx), 1);

    let token = armed_token(&card.press_start(PressKind::Mouse, ms(300)));
    card.hold_elapsed(token);
    let fx = card.release(ms(900));
    assert!(fx.contains(&Effect::UnwatchRelease));
    assert!(fx.contains(&Effect::DetachDragListeners));
}

#[test]
fn released_press_cannot_be_promoted_by_its_timer() {
    let mut card = desktop_card();
    let token = armed_token(&card.press_start(PressKind::Mouse, ms(0)));
    // button let go off the card before the threshold
    assert_eq!(clicks(&card.release(ms(90))), 1);
    assert!(card.hold_elapsed(token).is_empty());
    assert!(!card.is_dragging());
    let rect = CardRect::new(0.0, 0.0, 400.0, 300.0);
    assert!(!card.drag_move(Vec2::new(900.0, 900.0), &rect));
    assert!(card.raw().is_rest());
}

#[test]
fn cancel_ends_the_release_watch() {
    let mut card = desktop_card();
    let token = armed_token(&card.press_start(PressKind::Touch, ms(0)));
    card.hold_elapsed(token);
    let fx = card.cancel();
    assert!(fx.contains(&Effect::UnwatchRelease));
    assert!(fx.contains(&Effect::DetachDragListeners));
    assert!(card.cancel().is_empty());
}
