use thiserror::Error;

/// Rejected widget or physics configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("physics {field} must be finite and > 0, got {value}")]
    NonPositivePhysics { field: &'static str, value: f32 },
    #[error("{name} must be finite and > 0, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be a non-zero duration")]
    ZeroDuration { name: &'static str },
    #[error("language variant list is empty")]
    NoLanguageVariants,
    #[error("name has no characters")]
    EmptyName,
}
