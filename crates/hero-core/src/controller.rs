//! Composition root for the widget.
//!
//! Live pointer input and the idle sweep feed the same mapper and springs.
//! At most one of them writes spring targets at a time: any real pointer
//! event cancels the sweep before its own offset is applied.

use crate::config::WidgetConfig;
use crate::error::ConfigError;
use crate::idle::IdleDetector;
use crate::language::{LanguageChange, LanguageCycler, LanguagePhase};
use crate::mapper::{Bounds, PhysicsTargets, PointerOffset, PointerPhysicsMapper};
use crate::sequence::{IdleSequencePlayer, SequenceState};
use crate::spring::SpringChannel;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightSource {
    Hover,
    Idle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub char_index: Option<usize>,
    pub source: Option<HighlightSource>,
}

/// Which side last wrote the spring targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlSource {
    Live,
    Idle,
}

/// Per-frame output consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    pub translate: Vec2,
    /// Degrees; `x` is rotateX, `y` is rotateY.
    pub tilt: Vec2,
    pub ghost_cursor: Vec2,
    pub ghost_opacity: f32,
    pub highlight: HighlightState,
    pub language_index: usize,
    pub language_phase: LanguagePhase,
}

pub struct WidgetController {
    config: WidgetConfig,
    mapper: PointerPhysicsMapper,
    translate_x: SpringChannel,
    translate_y: SpringChannel,
    tilt_x: SpringChannel,
    tilt_y: SpringChannel,
    detector: IdleDetector,
    player: IdleSequencePlayer,
    cycler: LanguageCycler,
    bounds: Option<Bounds>,
    hover: Option<usize>,
    source: Option<ControlSource>,
    last_frame_at: Option<Duration>,
}

impl WidgetController {
    pub fn new(config: WidgetConfig, now: Duration) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = IdleSequencePlayer::new(config.sequence.clone(), config.char_count());
        let cycler = LanguageCycler::new(config.languages.len(), config.language_transition);
        Ok(Self {
            mapper: config.mapper,
            translate_x: SpringChannel::new(config.magnet, config.translate_limit),
            translate_y: SpringChannel::new(config.magnet, config.translate_limit),
            tilt_x: SpringChannel::new(config.tilt, config.tilt_limit_deg),
            tilt_y: SpringChannel::new(config.tilt, config.tilt_limit_deg),
            detector: IdleDetector::new(now),
            player,
            cycler,
            bounds: None,
            hover: None,
            source: None,
            last_frame_at: None,
            config,
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn sequence_state(&self) -> SequenceState {
        self.player.state()
    }

    pub fn control_source(&self) -> Option<ControlSource> {
        self.source
    }

    pub fn targets(&self) -> PhysicsTargets {
        PhysicsTargets {
            translate: Vec2::new(self.translate_x.state().target, self.translate_y.state().target),
            tilt: Vec2::new(self.tilt_x.state().target, self.tilt_y.state().target),
        }
    }

    pub fn language_text(&self) -> &str {
        &self.config.languages[self.cycler.index()]
    }

    pub fn language_variant(&self, index: usize) -> Option<&str> {
        self.config.languages.get(index).map(String::as_str)
    }

    /// Layout-ready or resize. Unusable sizes put the widget back into the
    /// unmeasured state.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds.has_area() {
            if self.bounds.is_none() {
                log::info!("[layout] measured {:.0}x{:.0}", bounds.width, bounds.height);
            }
            self.bounds = Some(bounds);
        } else {
            self.bounds = None;
        }
    }

    /// Any real input: resets the idle clock and takes control back from
    /// the sweep, without moving anything.
    pub fn on_interaction(&mut self, now: Duration) {
        self.detector.note_interaction(now);
        self.interrupt_idle(true);
    }

    pub fn on_pointer_move(&mut self, now: Duration, offset: PointerOffset) {
        self.on_interaction(now);
        let Some(bounds) = self.bounds else {
            return;
        };
        let targets = self.mapper.map(offset, bounds);
        self.apply_targets(targets);
        self.source = Some(ControlSource::Live);
    }

    pub fn on_pointer_leave(&mut self, now: Duration) {
        self.detector.note_interaction(now);
        self.interrupt_idle(false);
        self.hover = None;
        self.apply_targets(PhysicsTargets::default());
        self.source = Some(ControlSource::Live);
    }

    /// Live hover over a name character; `None` when the pointer leaves it.
    pub fn on_char_hover(&mut self, now: Duration, index: Option<usize>) {
        self.on_interaction(now);
        self.hover = index.filter(|i| *i < self.config.char_count());
    }

    /// Idle poll. Returns `true` if a sweep session was started.
    pub fn poll_idle(&mut self, now: Duration) -> bool {
        if self.detector.poll(now, self.config.idle_threshold) {
            log::debug!(
                "[idle] no interaction for {} ms",
                self.detector.idle_for(now).as_millis()
            );
        }
        if !self.detector.is_idle(now, self.config.idle_threshold) {
            return false;
        }
        if self.player.state() != SequenceState::Dormant || self.player.session().is_some() {
            return false;
        }
        let Some(bounds) = self.bounds else {
            log::debug!("[idle] widget not measured yet, sweep deferred");
            return false;
        };
        if !self.player.start(now, bounds.width / 2.0) {
            return false;
        }
        self.hover = None;
        true
    }

    pub fn cycle_language(&mut self) -> LanguageChange {
        let change = self.cycler.tick();
        log::debug!("[lang] {} -> {}", change.previous, change.index);
        change
    }

    /// Render-clock tick.
    pub fn frame(&mut self, now: Duration) -> RenderFrame {
        let dt = match self.last_frame_at {
            Some(prev) => now.saturating_sub(prev).min(self.config.max_frame_dt),
            None => Duration::ZERO,
        };
        self.last_frame_at = Some(now);

        if let Some(offset) = self.player.advance(dt) {
            if let Some(bounds) = self.bounds {
                let targets = self.mapper.map(offset, bounds);
                self.apply_targets(targets);
                self.source = Some(ControlSource::Idle);
            }
        }
        for ch in [
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.tilt_x,
            &mut self.tilt_y,
        ] {
            ch.step(dt);
        }
        self.cycler.animate(dt);
        self.render()
    }

    /// Snapshot of the current output without advancing time.
    pub fn render(&self) -> RenderFrame {
        RenderFrame {
            translate: Vec2::new(self.translate_x.value(), self.translate_y.value()),
            tilt: Vec2::new(self.tilt_x.value(), self.tilt_y.value()),
            ghost_cursor: self.player.ghost_cursor(),
            ghost_opacity: self.player.ghost_opacity(),
            highlight: self.highlight(),
            language_index: self.cycler.index(),
            language_phase: self.cycler.phase(),
        }
    }

    pub fn highlight(&self) -> HighlightState {
        if let Some(i) = self.player.highlight() {
            return HighlightState {
                char_index: Some(i),
                source: Some(HighlightSource::Idle),
            };
        }
        match self.hover {
            Some(i) => HighlightState {
                char_index: Some(i),
                source: Some(HighlightSource::Hover),
            },
            None => HighlightState::default(),
        }
    }

    fn interrupt_idle(&mut self, force: bool) {
        if !self.player.cancel() {
            return;
        }
        self.apply_targets(PhysicsTargets::default());
        if force {
            self.player.force_dormant();
        }
    }

    fn apply_targets(&mut self, t: PhysicsTargets) {
        self.translate_x.set_target(t.translate.x);
        self.translate_y.set_target(t.translate.y);
        self.tilt_x.set_target(t.tilt.x);
        self.tilt_y.set_target(t.tilt.y);
    }
}
