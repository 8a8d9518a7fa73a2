// Host-side tests for reading card options from markup.

#[allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[allow(dead_code)]
mod options {
    include!("../src/options.rs");
}

use options::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn flags_follow_presence_with_explicit_opt_out() {
    assert!(!parse_flag(None));
    assert!(parse_flag(Some("")));
    assert!(parse_flag(Some("true")));
    assert!(parse_flag(Some("selected")));
    assert!(!parse_flag(Some("false")));
    assert!(!parse_flag(Some(" FALSE ")));
    assert!(!parse_flag(Some("0")));
}

#[test]
fn numbers_must_be_finite() {
    assert_eq!(parse_f32(Some(" 1.5 ")), Some(1.5));
    assert_eq!(parse_f32(Some("abc")), None);
    assert_eq!(parse_f32(Some("inf")), None);
    assert_eq!(parse_f32(Some("NaN")), None);
    assert_eq!(parse_f32(None), None);
}

#[test]
fn bare_card_uses_defaults_and_sibling_index() {
    let opts = CardOptions::from_attrs(attrs(&[]), 4);
    assert!(!opts.selected);
    assert_eq!(opts.float_offset, 4.0);
    assert_eq!(opts.float_speed, 1.0);
    assert_eq!(opts.thickness, 0.0);
}

#[test]
fn attributes_override_defaults() {
    let opts = CardOptions::from_attrs(
        attrs(&[
            ("data-selected", ""),
            ("data-float-offset", "0.5"),
            ("data-float-speed", "2"),
            ("data-thickness", "6"),
        ]),
        4,
    );
    assert!(opts.selected);
    assert_eq!(opts.float_offset, 0.5);
    assert_eq!(opts.float_speed, 2.0);
    assert_eq!(opts.thickness, 6.0);
    let config = opts.to_config();
    assert_eq!(config.thickness, 6.0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn out_of_range_attributes_fall_back() {
    let opts = CardOptions::from_attrs(
        attrs(&[("data-float-speed", "0"), ("data-thickness", "-3")]),
        0,
    );
    assert_eq!(opts.float_speed, 1.0);
    assert_eq!(opts.thickness, 0.0);
    assert_eq!(opts.to_config().validate(), Ok(()));
}

#[test]
fn handheld_user_agents() {
    assert!(is_handheld_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
    ));
    assert!(is_handheld_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
    assert!(is_handheld_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)"));
    assert!(!is_handheld_user_agent(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0"
    ));
}

#[test]
fn mounted_ids_are_positive_integers() {
    assert_eq!(parse_mounted_id(Some("7")), Some(7));
    assert_eq!(parse_mounted_id(Some(" 12 ")), Some(12));
    assert_eq!(parse_mounted_id(Some("0")), None);
    assert_eq!(parse_mounted_id(Some("-3")), None);
    assert_eq!(parse_mounted_id(Some("card")), None);
    assert_eq!(parse_mounted_id(None), None);
}
