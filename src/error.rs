//! Error types
//!
//! Only configuration and storage can fail. The simulation tick itself is
//! infallible: empty clicks and missing audio cues are normal outcomes.

use thiserror::Error;

/// Rejected session configuration (raised before the loop starts)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("play area must be positive and finite, got {width}x{height}")]
    PlayArea { width: f32, height: f32 },

    #[error("tick rate must be at least 1 Hz")]
    TickRate,

    #[error("session duration must be positive and finite, got {0}s")]
    Duration(f64),

    #[error("starting lives must be at least 1")]
    Lives,

    #[error("entity radius {radius} does not fit a play area {width} wide")]
    Radius { radius: f32, width: f32 },

    #[error("level must be at least 1")]
    ZeroLevel,

    #[error("level {level} reaches the {kind} spawn denominator {denominator}")]
    LevelTooHigh {
        kind: &'static str,
        level: u32,
        denominator: u32,
    },

    #[error("level-up interval must be positive and finite, got {0}s")]
    LevelUpInterval(f64),

    #[error("invalid {what} range [{min}, {max}]")]
    Range { what: &'static str, min: f32, max: f32 },

    #[error("particle lifetime must be at least 1 tick")]
    ParticleLife,

    #[error("particle size decrement must be finite and non-negative, got {0}")]
    ParticleShrink(f32),

    #[error("particle gravity must be finite, got {0}")]
    ParticleGravity(f32),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Leaderboard persistence failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}
