//! Spawn scheduling
//!
//! Each tick runs two independent Bernoulli trials, one per entity kind, with
//! success odds `1 / (denominator - level)`. Both, either or neither may fire.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use crate::config::SessionConfig;
use crate::consts::{DRIFT_MAX, DRIFT_MIN, RISE_SPEED_MAX, RISE_SPEED_MIN};
use crate::error::ConfigError;

/// Per-kind spawn odds and launch velocity ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnProfile {
    /// Base odds denominator; must stay above every reachable level
    pub denominator: u32,
    /// Vertical speed range (pixels/tick, negative = upward)
    pub rise_speed: (f32, f32),
    /// Horizontal drift range (pixels/tick)
    pub drift: (f32, f32),
}

impl SpawnProfile {
    pub fn new(denominator: u32) -> Self {
        Self {
            denominator,
            rise_speed: (RISE_SPEED_MIN, RISE_SPEED_MAX),
            drift: (DRIFT_MIN, DRIFT_MAX),
        }
    }

    /// Effective odds denominator at `level`
    #[inline]
    pub fn odds(&self, level: u32) -> u32 {
        debug_assert!(level < self.denominator, "level validated at config time");
        self.denominator.saturating_sub(level).max(1)
    }
}

/// Decides what appears each tick and where
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    collectible: SpawnProfile,
    hazard: SpawnProfile,
    width: f32,
    height: f32,
    radius: f32,
    max_level: u32,
}

impl SpawnScheduler {
    /// Build from a config, rejecting any reachable level that would make a
    /// denominator non-positive
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            collectible: config.collectible,
            hazard: config.hazard,
            width: config.width,
            height: config.height,
            radius: config.entity_radius,
            max_level: config.max_level(),
        })
    }

    pub fn profile(&self, kind: EntityKind) -> &SpawnProfile {
        match kind {
            EntityKind::Collectible => &self.collectible,
            EntityKind::Hazard => &self.hazard,
        }
    }

    /// Highest level this scheduler accepts
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Run this tick's two trials. Collectible first, then hazard.
    pub fn roll<R: Rng>(&self, rng: &mut R, level: u32) -> [Option<EntityKind>; 2] {
        let level = level.min(self.max_level);
        let collectible = rng.random_ratio(1, self.collectible.odds(level));
        let hazard = rng.random_ratio(1, self.hazard.odds(level));
        [
            collectible.then_some(EntityKind::Collectible),
            hazard.then_some(EntityKind::Hazard),
        ]
    }

    /// Place a new entity just below the bottom edge, inset horizontally by
    /// its radius
    pub fn make_entity<R: Rng>(&self, rng: &mut R, id: u32, kind: EntityKind, now: f64) -> Entity {
        let profile = self.profile(kind);
        let x = rng.random_range(self.radius..=self.width - self.radius);
        let y = self.height + self.radius;
        let vel = Vec2::new(
            rng.random_range(profile.drift.0..=profile.drift.1),
            rng.random_range(profile.rise_speed.0..=profile.rise_speed.1),
        );
        Entity::new(id, kind, Vec2::new(x, y), vel, self.radius, now)
    }
}
