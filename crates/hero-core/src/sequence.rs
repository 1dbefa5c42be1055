//! Scripted "ghost cursor" sweep played while the widget sits idle.
//!
//! The player is a tick-driven state machine. It owns its own timing, so
//! cancelling is a state change and nothing scheduled survives it.

use crate::constants::{
    GHOST_FADE_IN_MS, HIGHLIGHT_THRESHOLD, IDLE_CYCLE_INTERVAL_MS, SWEEP_EXTENT, SWEEP_LEFT_MS,
    SWEEP_RETURN_MS, SWEEP_RIGHT_MS,
};
use crate::easing::{lerp, Easing};
use crate::mapper::PointerOffset;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use std::time::Duration;

/// One leg of the sweep. `offset_x` is in units of the sweep radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostPathWaypoint {
    pub offset_x: f32,
    pub duration: Duration,
    pub easing: Easing,
}

pub type GhostPath = SmallVec<[GhostPathWaypoint; 4]>;

/// Centre -> left -> right -> centre.
pub fn default_ghost_path() -> GhostPath {
    smallvec![
        GhostPathWaypoint {
            offset_x: -SWEEP_EXTENT,
            duration: Duration::from_millis(SWEEP_LEFT_MS),
            easing: Easing::EaseInOut,
        },
        GhostPathWaypoint {
            offset_x: SWEEP_EXTENT,
            duration: Duration::from_millis(SWEEP_RIGHT_MS),
            easing: Easing::EaseInOut,
        },
        GhostPathWaypoint {
            offset_x: 0.0,
            duration: Duration::from_millis(SWEEP_RETURN_MS),
            easing: Easing::EaseOut,
        },
    ]
}

/// Total scripted time of one sweep.
pub fn path_duration(path: &[GhostPathWaypoint]) -> Duration {
    path.iter().map(|w| w.duration).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceState {
    Dormant,
    Playing,
    Cancelling,
}

/// Lives from the first idle sweep until a real pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleSession {
    pub started_at: Duration,
    /// `true` while a sweep is running, `false` while resting between sweeps.
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct SequenceSettings {
    pub path: GhostPath,
    pub cycle_interval: Duration,
    pub fade_in: Duration,
    pub highlight_threshold: f32,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            path: default_ghost_path(),
            cycle_interval: Duration::from_millis(IDLE_CYCLE_INTERVAL_MS),
            fade_in: Duration::from_millis(GHOST_FADE_IN_MS),
            highlight_threshold: HIGHLIGHT_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug)]
pub struct IdleSequencePlayer {
    settings: SequenceSettings,
    char_count: usize,
    state: SequenceState,
    session: Option<IdleSession>,
    radius: f32,
    waypoint: usize,
    waypoint_elapsed: Duration,
    from_x: f32,
    cycle_elapsed: Duration,
    offset_x: f32,
    ghost_opacity: f32,
    highlight: Option<usize>,
}

impl IdleSequencePlayer {
    pub fn new(settings: SequenceSettings, char_count: usize) -> Self {
        Self {
            settings,
            char_count,
            state: SequenceState::Dormant,
            session: None,
            radius: 0.0,
            waypoint: 0,
            waypoint_elapsed: Duration::ZERO,
            from_x: 0.0,
            cycle_elapsed: Duration::ZERO,
            offset_x: 0.0,
            ghost_opacity: 0.0,
            highlight: None,
        }
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn session(&self) -> Option<IdleSession> {
        self.session
    }

    pub fn waypoint_index(&self) -> usize {
        self.waypoint
    }

    pub fn ghost_opacity(&self) -> f32 {
        self.ghost_opacity
    }

    /// Ghost cursor position relative to the widget centre.
    pub fn ghost_cursor(&self) -> Vec2 {
        Vec2::new(self.offset_x, 0.0)
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Begin an idle session. Returns `false` when one already exists or the
    /// radius is unusable (widget not measured yet).
    pub fn start(&mut self, now: Duration, radius: f32) -> bool {
        if self.state != SequenceState::Dormant || self.session.is_some() {
            return false;
        }
        if !radius.is_finite() || radius <= 0.0 || self.settings.path.is_empty() {
            return false;
        }
        self.radius = radius;
        self.session = Some(IdleSession {
            started_at: now,
            active: true,
        });
        self.begin_cycle();
        log::info!("[idle] sweep started (radius {:.1})", radius);
        true
    }

    /// Stop everything immediately. Returns `true` if there was anything to stop.
    pub fn cancel(&mut self) -> bool {
        if self.session.is_none() && self.state == SequenceState::Dormant {
            return false;
        }
        let was = self.state;
        self.session = None;
        self.state = SequenceState::Cancelling;
        self.reset_sweep();
        log::info!("[idle] {:?} -> Cancelling", was);
        true
    }

    /// Finish a pending cancellation without waiting for the next tick.
    pub fn force_dormant(&mut self) {
        if self.state == SequenceState::Cancelling {
            self.state = SequenceState::Dormant;
        }
    }

    /// Step the script by `dt`. Returns the synthetic offset while the sweep
    /// owns the spring targets, including the tick on which it finishes.
    pub fn advance(&mut self, dt: Duration) -> Option<PointerOffset> {
        match self.state {
            SequenceState::Cancelling => {
                self.state = SequenceState::Dormant;
                None
            }
            SequenceState::Dormant => {
                if self.session.is_none() {
                    return None;
                }
                self.cycle_elapsed += dt;
                if self.cycle_elapsed < self.settings.cycle_interval {
                    return None;
                }
                let carry = self.cycle_elapsed - self.settings.cycle_interval;
                self.begin_cycle();
                if let Some(s) = self.session.as_mut() {
                    s.active = true;
                }
                log::debug!("[idle] next sweep");
                self.advance_playing(carry)
            }
            SequenceState::Playing => self.advance_playing(dt),
        }
    }

    fn advance_playing(&mut self, dt: Duration) -> Option<PointerOffset> {
        self.cycle_elapsed += dt;
        let mut budget = dt;
        loop {
            let Some(wp) = self.settings.path.get(self.waypoint).copied() else {
                self.finish_cycle();
                return Some(Vec2::new(self.offset_x, 0.0));
            };
            let end_x = wp.offset_x * self.radius;
            let left = wp.duration.saturating_sub(self.waypoint_elapsed);
            if budget < left {
                self.waypoint_elapsed += budget;
                let t = self.waypoint_elapsed.as_secs_f32() / wp.duration.as_secs_f32();
                self.offset_x = lerp(self.from_x, end_x, wp.easing.apply(t));
                break;
            }
            budget -= left;
            self.offset_x = end_x;
            self.from_x = end_x;
            self.waypoint += 1;
            self.waypoint_elapsed = Duration::ZERO;
            if self.waypoint >= self.settings.path.len() {
                let offset = Vec2::new(self.offset_x, 0.0);
                self.finish_cycle();
                return Some(offset);
            }
        }
        self.ghost_opacity = self.fade_in_opacity();
        self.update_highlight();
        Some(Vec2::new(self.offset_x, 0.0))
    }

    fn begin_cycle(&mut self) {
        self.state = SequenceState::Playing;
        self.waypoint = 0;
        self.waypoint_elapsed = Duration::ZERO;
        self.from_x = 0.0;
        self.offset_x = 0.0;
        self.cycle_elapsed = Duration::ZERO;
        self.ghost_opacity = 0.0;
        self.highlight = None;
    }

    fn finish_cycle(&mut self) {
        self.state = SequenceState::Dormant;
        self.ghost_opacity = 0.0;
        self.highlight = None;
        if let Some(s) = self.session.as_mut() {
            s.active = false;
        }
        log::debug!("[idle] sweep finished, resting");
    }

    fn reset_sweep(&mut self) {
        self.waypoint = 0;
        self.waypoint_elapsed = Duration::ZERO;
        self.from_x = 0.0;
        self.offset_x = 0.0;
        self.cycle_elapsed = Duration::ZERO;
        self.ghost_opacity = 0.0;
        self.highlight = None;
    }

    fn fade_in_opacity(&self) -> f32 {
        let fade = self.settings.fade_in.as_secs_f32();
        if fade <= 0.0 {
            return 1.0;
        }
        (self.cycle_elapsed.as_secs_f32() / fade).min(1.0)
    }

    fn update_highlight(&mut self) {
        let edge = self.radius * self.settings.highlight_threshold;
        self.highlight = if self.char_count == 0 {
            None
        } else if self.offset_x < -edge {
            Some(0)
        } else if self.offset_x > edge {
            Some(self.char_count - 1)
        } else {
            None
        };
    }
}
