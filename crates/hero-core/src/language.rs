//! Periodic swap of the last-name text between language variants.

use crate::easing::Easing;
use std::time::Duration;

/// Visual contract for every swap: the old text leaves upward, the new one
/// rises from below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDirection {
    EnterFromBottomExitToTop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageChange {
    pub index: usize,
    pub previous: usize,
    pub direction: TransitionDirection,
}

/// Where the swap animation is. `progress` is eased, in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LanguagePhase {
    Exiting { previous: usize, progress: f32 },
    Entering { progress: f32 },
    Settled,
}

#[derive(Clone, Debug)]
pub struct LanguageCycler {
    len: usize,
    index: usize,
    previous: usize,
    transition: Duration,
    since_change: Option<Duration>,
}

impl LanguageCycler {
    /// `len` must be non-zero; `WidgetConfig::validate` guarantees it.
    pub fn new(len: usize, transition: Duration) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            previous: 0,
            transition,
            since_change: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn variant_count(&self) -> usize {
        self.len
    }

    /// One period elapsed.
    pub fn tick(&mut self) -> LanguageChange {
        self.previous = self.index;
        self.index = (self.index + 1) % self.len;
        self.since_change = Some(Duration::ZERO);
        LanguageChange {
            index: self.index,
            previous: self.previous,
            direction: TransitionDirection::EnterFromBottomExitToTop,
        }
    }

    /// Advance the swap animation clock.
    pub fn animate(&mut self, dt: Duration) {
        if let Some(t) = self.since_change.as_mut() {
            *t += dt;
            if *t >= self.transition * 2 {
                self.since_change = None;
            }
        }
    }

    pub fn phase(&self) -> LanguagePhase {
        let Some(t) = self.since_change else {
            return LanguagePhase::Settled;
        };
        let half = self.transition.as_secs_f32();
        if half <= 0.0 {
            return LanguagePhase::Settled;
        }
        let t = t.as_secs_f32();
        if t < half {
            LanguagePhase::Exiting {
                previous: self.previous,
                progress: Easing::CircOut.apply(t / half),
            }
        } else {
            LanguagePhase::Entering {
                progress: Easing::CircOut.apply((t - half) / half),
            }
        }
    }
}
