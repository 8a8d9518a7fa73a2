// DOM contract between the Rust front-end and the page markup/stylesheet.

// Card structure (data attributes)
pub const CARD_ATTR: &str = "data-tilt-card"; // auto-mounted card root
pub const BODY_ATTR: &str = "data-tilt-body"; // receives the tilt transform
pub const FLIP_ATTR: &str = "data-tilt-flip"; // receives the flip rotation
pub const FRONT_ATTR: &str = "data-tilt-front";
pub const BACK_ATTR: &str = "data-tilt-back";
pub const GLARE_ATTR: &str = "data-tilt-glare"; // highlight layer, positioned by the glare vars
pub const DEBUG_ATTR: &str = "data-tilt-debug"; // sensor readout text
pub const DEBUG_TOGGLE_ATTR: &str = "data-tilt-debug-toggle"; // invisible corner trigger

// Per-card options read from the card root
pub const SELECTED_ATTR: &str = "data-selected";
pub const FLOAT_OFFSET_ATTR: &str = "data-float-offset";
pub const FLOAT_SPEED_ATTR: &str = "data-float-speed";
pub const THICKNESS_ATTR: &str = "data-thickness";

// Written back onto the card root
pub const MOUNTED_ATTR: &str = "data-tilt-mounted"; // registry id of the live card
pub const VISIBLE_FACE_ATTR: &str = "data-visible-face";
pub const MODE_ATTR: &str = "data-tilt-mode";
pub const SELECTED_CLASS: &str = "is-selected";
pub const GLARE_X_VAR: &str = "--tilt-glare-x";
pub const GLARE_Y_VAR: &str = "--tilt-glare-y";

// Inline styles set on every card root at mount. Panning and text selection
// must be off before a gesture starts or the browser cancels touch drags.
pub const ROOT_STYLES: [(&str, &str); 3] = [
    ("touch-action", "none"),
    ("user-select", "none"),
    ("-webkit-user-select", "none"),
];

// Event dispatched on auto-mounted cards after a tap
pub const CLICK_EVENT: &str = "tiltcard:click";

// User-agent tokens treated as handheld/touch platforms
pub const HANDHELD_UA_TOKENS: [&str; 3] = ["android", "iphone", "ipad"];
