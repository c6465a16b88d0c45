//! Bubbles and bombs
//!
//! An entity lives from spawn until it is either hit or rises out of the top
//! of the play area. Velocity is fixed at spawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{exited_top, point_in_circle};

/// What a click on the entity does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Bubble: +1 score on hit
    Collectible,
    /// Bomb: -1 life on hit
    Hazard,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Collectible => "collectible",
            EntityKind::Hazard => "hazard",
        }
    }
}

/// A spawned object rising through the play area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Pixels per tick, constant for the entity's whole life
    pub vel: Vec2,
    pub radius: f32,
    /// Session clock (seconds) at spawn, for reaction time
    pub spawn_time: f64,
}

impl Entity {
    pub fn new(
        id: u32,
        kind: EntityKind,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        spawn_time: f64,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            vel,
            radius,
            spawn_time,
        }
    }

    /// Advance one tick
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Pointer hit test
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_circle(point, self.pos, self.radius)
    }

    /// Left the play area through the top without being hit
    #[inline]
    pub fn has_escaped(&self) -> bool {
        exited_top(self.pos, self.radius)
    }
}
