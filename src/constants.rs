// DOM contract and presentation constants for the browser front-end.

// Element the widget mounts into when started automatically
pub const DEFAULT_MOUNT_ID: &str = "hero-name";

// Classes of the elements the widget creates inside its container
pub const FIRST_NAME_CLASS: &str = "animated-first-name";
pub const CHAR_CLASS: &str = "animated-char";
pub const LAST_NAME_WRAPPER_CLASS: &str = "animated-last-name-wrapper";
pub const LAST_NAME_CLASS: &str = "animated-last-name";
pub const GHOST_CURSOR_CLASS: &str = "ghost-cursor";

// 3D transform
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Highlighted character
pub const HIGHLIGHT_LIFT_PX: f32 = 5.0; // raise above the baseline
pub const HIGHLIGHT_TRANSITION_SEC: f32 = 0.1;

// Ghost cursor
pub const GHOST_CURSOR_SIZE_PX: f32 = 18.0;
