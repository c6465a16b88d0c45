//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, clock supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (entities kept in creation order)
//! - No rendering, audio or platform dependencies

pub mod autoplay;
pub mod collision;
pub mod entity;
pub mod hit;
pub mod particle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autoplay::AutoPlayer;
pub use collision::{exited_top, point_in_circle};
pub use entity::{Entity, EntityKind};
pub use hit::resolve_click;
pub use particle::{BurstSpec, Particle, ParticleColor, spawn_burst};
pub use spawn::{SpawnProfile, SpawnScheduler};
pub use state::{EndReason, GameEvent, RngState, SessionPhase, SessionState, SessionSummary};
pub use tick::{Hud, Session, TickInput, TickOutcome, TickStatus, tick};
