use crate::constants::*;
use crate::error::ConfigError;
use crate::mapper::PointerPhysicsMapper;
use crate::sequence::SequenceSettings;
use crate::spring::PhysicsConfig;
use std::time::Duration;

/// Everything the widget can be tuned with. `Default` reproduces the
/// portfolio hero; hosts may override fields before building a controller.
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub name: String,
    pub languages: Vec<String>,
    pub magnet: PhysicsConfig,
    pub tilt: PhysicsConfig,
    pub translate_limit: f32,
    pub tilt_limit_deg: f32,
    pub mapper: PointerPhysicsMapper,
    pub idle_threshold: Duration,
    pub idle_poll_interval: Duration,
    pub language_period: Duration,
    pub language_transition: Duration,
    pub max_frame_dt: Duration,
    pub sequence: SequenceSettings,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            name: NAME_CHARS.to_string(),
            languages: LANGUAGE_VARIANTS.iter().map(|s| s.to_string()).collect(),
            magnet: PhysicsConfig::MAGNET,
            tilt: PhysicsConfig::TILT,
            translate_limit: TRANSLATE_LIMIT,
            tilt_limit_deg: TILT_LIMIT_DEG,
            mapper: PointerPhysicsMapper::default(),
            idle_threshold: Duration::from_millis(IDLE_THRESHOLD_MS),
            idle_poll_interval: Duration::from_millis(IDLE_POLL_INTERVAL_MS),
            language_period: Duration::from_millis(LANGUAGE_PERIOD_MS),
            language_transition: Duration::from_millis(LANGUAGE_TRANSITION_MS),
            max_frame_dt: Duration::from_millis(MAX_FRAME_DT_MS),
            sequence: SequenceSettings::default(),
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_zero(name: &'static str, value: Duration) -> Result<(), ConfigError> {
    if value.is_zero() {
        Err(ConfigError::ZeroDuration { name })
    } else {
        Ok(())
    }
}

impl WidgetConfig {
    pub fn char_count(&self) -> usize {
        self.name.chars().count()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguageVariants);
        }
        positive("translate_limit", self.translate_limit)?;
        positive("tilt_limit_deg", self.tilt_limit_deg)?;
        positive("magnet_factor", self.mapper.magnet_factor)?;
        positive("max_rotation_deg", self.mapper.max_rotation_deg)?;
        positive("highlight_threshold", self.sequence.highlight_threshold)?;
        non_zero("idle_threshold", self.idle_threshold)?;
        non_zero("idle_poll_interval", self.idle_poll_interval)?;
        non_zero("language_period", self.language_period)?;
        non_zero("max_frame_dt", self.max_frame_dt)?;
        non_zero("idle_cycle_interval", self.sequence.cycle_interval)?;
        Ok(())
    }
}
