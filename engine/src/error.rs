use thiserror::Error;

/// Invalid parameters when creating an entity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid level {0}, characters start from level 1")]
    Level(i32),
    #[error("invalid health {0}, must not be negative")]
    Health(i32),
    #[error("invalid weapon damage {0}, must not be negative")]
    Damage(i32),
}
