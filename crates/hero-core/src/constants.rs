// Tuning constants for the hero name widget. Shared by the controller and
// anything that wants to build a custom `WidgetConfig`.

// Pointer mapping
pub const MAGNET_FACTOR: f32 = 0.2; // translation per unit of pointer offset
pub const MAX_ROTATION_DEG: f32 = 35.0; // tilt at full deflection

// Spring profiles (stiffness, damping, mass)
pub const MAGNET_STIFFNESS: f32 = 150.0;
pub const MAGNET_DAMPING: f32 = 15.0;
pub const MAGNET_MASS: f32 = 0.1;

pub const TILT_STIFFNESS: f32 = 100.0;
pub const TILT_DAMPING: f32 = 30.0;
pub const TILT_MASS: f32 = 0.5;

// Channel ceilings, applied after integration
pub const TRANSLATE_LIMIT: f32 = 80.0; // layout units
pub const TILT_LIMIT_DEG: f32 = 45.0; // leaves room for spring overshoot past MAX_ROTATION_DEG

// Integration
pub const MAX_SUBSTEP_SEC: f32 = 0.001;
pub const MAX_SUBSTEPS: u32 = 10_000; // beyond this a spring is treated as settled
pub const MAX_FRAME_DT_MS: u64 = 100; // backgrounded tabs resume with one capped step

// Idle detection
pub const IDLE_THRESHOLD_MS: u64 = 3000;
pub const IDLE_POLL_INTERVAL_MS: u64 = 1000;

// Idle sweep
pub const IDLE_CYCLE_INTERVAL_MS: u64 = 5000; // cycle start to cycle start
pub const SWEEP_EXTENT: f32 = 0.8; // fraction of the sweep radius reached at each extreme
pub const HIGHLIGHT_THRESHOLD: f32 = 0.5; // fraction of the sweep radius that lights an end char
pub const GHOST_FADE_IN_MS: u64 = 200;
pub const SWEEP_LEFT_MS: u64 = 700;
pub const SWEEP_RIGHT_MS: u64 = 1400;
pub const SWEEP_RETURN_MS: u64 = 700;

// Language cycling
pub const LANGUAGE_PERIOD_MS: u64 = 2500;
pub const LANGUAGE_TRANSITION_MS: u64 = 500; // per half: exit, then enter

// Content
pub const NAME_CHARS: &str = "PRASAD";
pub const LANGUAGE_VARIANTS: [&str; 4] = ["GADE", "गडे", "가데", "ガデ"];

// Highlight palette, cycled by character index
pub const CHAR_COLORS: [&str; 6] = [
    "#3b82f6", // blue
    "#22c55e", // green
    "#ef4444", // red
    "#eab308", // yellow
    "#a855f7", // purple
    "#ec4899", // pink
];
