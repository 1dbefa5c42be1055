// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hero_core::constants as tuning;
use hero_core::{default_ghost_path, path_duration};
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_positive() {
    assert!(
        tuning::MAGNET_STIFFNESS > 0.0 && tuning::MAGNET_DAMPING > 0.0 && tuning::MAGNET_MASS > 0.0
    );
    assert!(tuning::TILT_STIFFNESS > 0.0 && tuning::TILT_DAMPING > 0.0 && tuning::TILT_MASS > 0.0);
    assert!(tuning::MAX_SUBSTEP_SEC > 0.0 && tuning::MAX_SUBSTEP_SEC <= 0.002);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ceilings_leave_room_for_the_mapped_range() {
    // tilt targets top out at MAX_ROTATION_DEG; the ceiling only catches overshoot
    assert!(tuning::TILT_LIMIT_DEG > tuning::MAX_ROTATION_DEG);
    assert!(tuning::TRANSLATE_LIMIT > 0.0);
    assert!(tuning::MAGNET_FACTOR > 0.0 && tuning::MAGNET_FACTOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_timing_is_consistent() {
    assert!(tuning::IDLE_POLL_INTERVAL_MS < tuning::IDLE_THRESHOLD_MS);
    // a sweep fits in its cycle, leaving a rest gap
    let sweep = path_duration(&default_ghost_path());
    assert!(sweep < Duration::from_millis(tuning::IDLE_CYCLE_INTERVAL_MS));
    assert!(tuning::GHOST_FADE_IN_MS < tuning::SWEEP_LEFT_MS);
    // the left extreme must cross the highlight band
    assert!(tuning::SWEEP_EXTENT > tuning::HIGHLIGHT_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn language_swap_fits_in_its_period() {
    assert!(2 * tuning::LANGUAGE_TRANSITION_MS < tuning::LANGUAGE_PERIOD_MS);
    assert!(!tuning::LANGUAGE_VARIANTS.is_empty());
    assert_eq!(tuning::NAME_CHARS.chars().count(), 6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presentation_constants_are_sane() {
    assert!(PERSPECTIVE_PX > 0.0);
    assert!(HIGHLIGHT_LIFT_PX > 0.0);
    assert!(GHOST_CURSOR_SIZE_PX > 0.0);
    assert!(!DEFAULT_MOUNT_ID.is_empty());
    assert_ne!(CHAR_CLASS, LAST_NAME_CLASS);
}
