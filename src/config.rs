//! Session configuration
//!
//! Supplied once at session start. Every knob has a default matching
//! [`crate::consts`]; a JSON file only needs the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::SpawnProfile;

/// Tunables for one session (and every restart of it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // === Play area ===
    pub width: f32,
    pub height: f32,
    /// Ticks per second of the external frame driver
    pub tick_rate: u32,

    // === Rules ===
    pub duration_secs: f64,
    pub starting_lives: u32,
    pub entity_radius: f32,
    /// Difficulty bias subtracted from both spawn denominators
    pub starting_level: u32,
    /// Raise the level by one every this many seconds (None = constant level)
    pub level_up_secs: Option<f64>,

    // === Spawning ===
    pub collectible: SpawnProfile,
    pub hazard: SpawnProfile,

    // === Particles ===
    pub particles_per_hit: u32,
    pub particle_life_ticks: u32,
    pub particle_size_decrement: f32,
    pub particle_size_range: (f32, f32),
    /// Max per-axis launch speed
    pub particle_speed: f32,
    /// Added to particle vertical velocity every tick
    pub particle_gravity: f32,
    pub max_particles: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            tick_rate: TICK_RATE,

            duration_secs: SESSION_SECS,
            starting_lives: STARTING_LIVES,
            entity_radius: ENTITY_RADIUS,
            starting_level: STARTING_LEVEL,
            level_up_secs: None,

            collectible: SpawnProfile::new(COLLECTIBLE_DENOMINATOR),
            hazard: SpawnProfile::new(HAZARD_DENOMINATOR),

            particles_per_hit: PARTICLES_PER_HIT,
            particle_life_ticks: PARTICLE_LIFE_TICKS,
            particle_size_decrement: PARTICLE_SIZE_DECREMENT,
            particle_size_range: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            particle_speed: PARTICLE_SPEED,
            particle_gravity: 0.0,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl SessionConfig {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded session config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Highest level the session can reach before time runs out
    pub fn max_level(&self) -> u32 {
        match self.level_up_secs {
            Some(interval) if interval > 0.0 => {
                let steps = (self.duration_secs / interval).ceil() - 1.0;
                self.starting_level
                    .saturating_add(steps.clamp(0.0, u32::MAX as f64) as u32)
            }
            _ => self.starting_level,
        }
    }

    /// Reject anything that would make the loop degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let area_ok = |v: f32| v.is_finite() && v > 0.0;
        if !area_ok(self.width) || !area_ok(self.height) {
            return Err(ConfigError::PlayArea {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::TickRate);
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ConfigError::Duration(self.duration_secs));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Lives);
        }
        if !area_ok(self.entity_radius) || self.entity_radius * 2.0 > self.width {
            return Err(ConfigError::Radius {
                radius: self.entity_radius,
                width: self.width,
            });
        }

        if self.starting_level == 0 {
            return Err(ConfigError::ZeroLevel);
        }
        if let Some(interval) = self.level_up_secs {
            if !interval.is_finite() || interval <= 0.0 {
                return Err(ConfigError::LevelUpInterval(interval));
            }
        }
        let level = self.max_level();
        for (kind, profile) in [("collectible", &self.collectible), ("hazard", &self.hazard)] {
            if level >= profile.denominator {
                return Err(ConfigError::LevelTooHigh {
                    kind,
                    level,
                    denominator: profile.denominator,
                });
            }
            check_range("rise speed", profile.rise_speed)?;
            check_range("drift", profile.drift)?;
        }

        if self.particle_life_ticks == 0 {
            return Err(ConfigError::ParticleLife);
        }
        check_range("particle size", self.particle_size_range)?;
        if !self.particle_speed.is_finite() || self.particle_speed < 0.0 {
            return Err(ConfigError::Range {
                what: "particle speed",
                min: -self.particle_speed,
                max: self.particle_speed,
            });
        }
        if !self.particle_size_decrement.is_finite() || self.particle_size_decrement < 0.0 {
            return Err(ConfigError::ParticleShrink(self.particle_size_decrement));
        }
        if !self.particle_gravity.is_finite() {
            return Err(ConfigError::ParticleGravity(self.particle_gravity));
        }

        Ok(())
    }
}

fn check_range(what: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::Range { what, min, max })
    }
}
