// Host-side tests for the language cycler.

use hero_core::{LanguageCycler, LanguagePhase, TransitionDirection};
use std::time::Duration;

fn cycler() -> LanguageCycler {
    LanguageCycler::new(4, Duration::from_millis(500))
}

#[test]
fn index_wraps_after_every_variant() {
    let mut c = cycler();
    assert_eq!(c.index(), 0);
    for _ in 0..3 {
        c.tick();
    }
    assert_eq!(c.index(), 3);
    c.tick();
    assert_eq!(c.index(), 0);
    for n in 1..=20usize {
        c.tick();
        assert_eq!(c.index(), n % 4);
    }
}

#[test]
fn change_event_carries_fixed_direction() {
    let mut c = cycler();
    let change = c.tick();
    assert_eq!(change.previous, 0);
    assert_eq!(change.index, 1);
    assert_eq!(change.direction, TransitionDirection::EnterFromBottomExitToTop);
    c.tick();
    c.tick();
    let change = c.tick();
    assert_eq!((change.previous, change.index), (3, 0));
}

#[test]
fn swap_exits_then_enters_then_settles() {
    let mut c = cycler();
    assert_eq!(c.phase(), LanguagePhase::Settled);
    c.tick();
    assert_eq!(
        c.phase(),
        LanguagePhase::Exiting {
            previous: 0,
            progress: 0.0
        }
    );
    c.animate(Duration::from_millis(250));
    match c.phase() {
        LanguagePhase::Exiting { previous, progress } => {
            assert_eq!(previous, 0);
            // circOut is well ahead of linear halfway through
            assert!((progress - 0.75f32.sqrt()).abs() < 1e-4);
        }
        other => panic!("unexpected {other:?}"),
    }
    c.animate(Duration::from_millis(250));
    assert_eq!(c.phase(), LanguagePhase::Entering { progress: 0.0 });
    c.animate(Duration::from_millis(499));
    assert!(matches!(c.phase(), LanguagePhase::Entering { progress } if progress > 0.9));
    c.animate(Duration::from_millis(1));
    assert_eq!(c.phase(), LanguagePhase::Settled);
}

#[test]
fn single_variant_stays_put() {
    let mut c = LanguageCycler::new(1, Duration::from_millis(500));
    let change = c.tick();
    assert_eq!(change.index, 0);
    assert_eq!(c.variant_count(), 1);
}
