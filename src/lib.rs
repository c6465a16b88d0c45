//! Bubble Pop - a timed reaction arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, hits, session state machine)
//! - `config`: Session configuration and validation
//! - `clock`: Fixed timestep frame driver
//! - `audio`: Fire-and-forget audio cue dispatch
//! - `highscores`: Leaderboard of finished sessions

pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::SessionConfig;
pub use error::{ConfigError, StorageError};
pub use highscores::HighScores;

/// Game configuration constants (defaults for [`SessionConfig`])
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 900.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f64 = 1.0 / TICK_RATE as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Session rules
    pub const SESSION_SECS: f64 = 60.0;
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_LEVEL: u32 = 1;

    /// Unified hit/draw radius for every entity
    pub const ENTITY_RADIUS: f32 = 40.0;

    /// Spawn odds per tick are 1 / (denominator - level)
    pub const COLLECTIBLE_DENOMINATOR: u32 = 40;
    pub const HAZARD_DENOMINATOR: u32 = 95;

    /// Vertical speed range (pixels per tick, negative = upward)
    pub const RISE_SPEED_MIN: f32 = -5.0;
    pub const RISE_SPEED_MAX: f32 = -2.0;
    /// Horizontal drift range (pixels per tick)
    pub const DRIFT_MIN: f32 = -1.0;
    pub const DRIFT_MAX: f32 = 1.0;

    /// Particle burst on hit
    pub const PARTICLES_PER_HIT: u32 = 15;
    pub const PARTICLE_LIFE_TICKS: u32 = 25;
    pub const PARTICLE_SIZE_DECREMENT: f32 = 0.3;
    pub const PARTICLE_SIZE_MIN: f32 = 4.0;
    pub const PARTICLE_SIZE_MAX: f32 = 9.0;
    /// Max per-axis particle speed (pixels per tick)
    pub const PARTICLE_SPEED: f32 = 4.0;
    pub const MAX_PARTICLES: usize = 512;
}
