//! Fixed timestep simulation tick
//!
//! Core game loop: drain clicks, spawn, move, cull, then check end
//! conditions. The external driver supplies the session clock (`now`, in
//! seconds) and calls [`tick`] once per fixed time slice.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityKind};
use super::hit::resolve_click;
use super::particle::{BurstSpec, Particle};
use super::spawn::SpawnScheduler;
use super::state::{EndReason, GameEvent, RngState, SessionPhase, SessionState, SessionSummary};
use crate::config::SessionConfig;
use crate::error::ConfigError;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer-down positions, in arrival order
    pub clicks: Vec<Vec2>,
    /// Restart pressed this tick (edge, only honored when Ended)
    pub restart: bool,
    /// Quit pressed this tick (edge, only honored when Ended)
    pub quit: bool,
}

impl TickInput {
    pub fn click(pos: Vec2) -> Self {
        Self {
            clicks: vec![pos],
            ..Default::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Default::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }
}

/// Whether the driver should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Quit,
}

/// Result of one tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub status: TickStatus,
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    fn new() -> Self {
        Self {
            status: TickStatus::Continue,
            events: Vec::new(),
        }
    }
}

/// Heads-up display values for the current phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hud {
    Playing {
        score: u32,
        lives: u32,
        remaining_secs: f64,
    },
    Ended(SessionSummary),
}

/// One play-through plus its restarts: the session state machine
pub struct Session {
    config: SessionConfig,
    scheduler: SpawnScheduler,
    burst: BurstSpec,
    rng: Pcg32,
    phase: SessionPhase,
    state: SessionState,
    /// Live entities, creation order
    entities: Vec<Entity>,
    particles: Vec<Particle>,
    summary: Option<SessionSummary>,
    next_id: u32,
}

impl Session {
    /// Validate `config` and start playing at `now`
    pub fn new(config: SessionConfig, seed: u64, now: f64) -> Result<Self, ConfigError> {
        let scheduler = SpawnScheduler::new(&config)?;
        let burst = BurstSpec {
            count: config.particles_per_hit,
            life_ticks: config.particle_life_ticks,
            size_range: config.particle_size_range,
            speed: config.particle_speed,
            max_live: config.max_particles,
        };
        let rng = RngState::new(seed).to_rng();
        let state = SessionState::new(&config, now);

        log::info!(
            "Session started (seed {}, {}s, {} lives, level {})",
            seed,
            config.duration_secs,
            config.starting_lives,
            config.starting_level
        );

        Ok(Self {
            config,
            scheduler,
            burst,
            rng,
            phase: SessionPhase::Playing,
            state,
            entities: Vec::new(),
            particles: Vec::new(),
            summary: None,
            next_id: 1,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Final statistics, once Ended
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn hud(&self) -> Hud {
        match (self.phase, self.summary) {
            (SessionPhase::Ended, Some(summary)) => Hud::Ended(summary),
            _ => Hud::Playing {
                score: self.state.score,
                lives: self.state.lives,
                remaining_secs: self.state.remaining().max(0.0),
            },
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place an entity directly (scripted waves, tests). Returns its id.
    pub fn spawn_entity(&mut self, kind: EntityKind, pos: Vec2, vel: Vec2, now: f64) -> u32 {
        let id = self.next_entity_id();
        let entity = Entity::new(id, kind, pos, vel, self.config.entity_radius, now);
        self.entities.push(entity);
        id
    }

    /// Level for the current elapsed time
    fn level_at(&self, elapsed: f64) -> u32 {
        let start = self.config.starting_level;
        let level = match self.config.level_up_secs {
            Some(interval) => start.saturating_add((elapsed / interval).floor().max(0.0) as u32),
            None => start,
        };
        level.min(self.scheduler.max_level())
    }

    fn end(&mut self, reason: EndReason, outcome: &mut TickOutcome) {
        let summary = self.state.summary();
        self.phase = SessionPhase::Ended;
        self.summary = Some(summary);
        log::info!(
            "Session ended ({:?}): score {}, accuracy {:.2}%, avg reaction {:.3}s",
            reason,
            summary.score,
            summary.accuracy_percent(),
            summary.avg_reaction_secs
        );
        outcome.events.push(GameEvent::SessionEnded { reason, summary });
    }

    /// Full reset: fresh state and empty collections, no carry-over
    fn restart(&mut self, now: f64) {
        self.state = SessionState::new(&self.config, now);
        self.entities.clear();
        self.particles.clear();
        self.summary = None;
        self.next_id = 1;
        self.phase = SessionPhase::Playing;
        log::info!("Session restarted");
    }
}

/// Advance the session by one fixed timestep ending at `now`
pub fn tick(session: &mut Session, input: &TickInput, now: f64) -> TickOutcome {
    let mut outcome = TickOutcome::new();

    // Ended: simulation frozen, only restart/quit are honored
    if session.phase == SessionPhase::Ended {
        if input.quit {
            log::info!("Quit requested");
            outcome.status = TickStatus::Quit;
        } else if input.restart {
            session.restart(now);
            outcome.events.push(GameEvent::Restarted);
        }
        return outcome;
    }

    session.state.elapsed = now - session.state.start_time;

    // Time can run out between ticks; end before touching input
    if let Some(reason) = session.state.end_reason() {
        session.end(reason, &mut outcome);
        return outcome;
    }
    session.state.level = session.level_at(session.state.elapsed);

    // Input: every click resolves independently, in arrival order. Clicks
    // after the last life still count; the session ends below.
    for &click in &input.clicks {
        let event = resolve_click(
            &mut session.state,
            &mut session.entities,
            &mut session.particles,
            &mut session.rng,
            click,
            now,
            &session.burst,
        );
        outcome.events.push(event);
    }

    // Spawn
    let rolled = session.scheduler.roll(&mut session.rng, session.state.level);
    for kind in rolled.into_iter().flatten() {
        let id = session.next_entity_id();
        let entity = session.scheduler.make_entity(&mut session.rng, id, kind, now);
        log::trace!("Spawned {} #{} at {:?}", kind.as_str(), id, entity.pos);
        session.entities.push(entity);
        outcome.events.push(GameEvent::Spawned { id, kind });
    }

    // Move and cull
    let events = &mut outcome.events;
    session.entities.retain_mut(|entity| {
        entity.advance();
        if entity.has_escaped() {
            log::debug!("{} #{} escaped", entity.kind.as_str(), entity.id);
            events.push(GameEvent::Escaped {
                id: entity.id,
                kind: entity.kind,
            });
            false
        } else {
            true
        }
    });

    let size_decrement = session.config.particle_size_decrement;
    let gravity = session.config.particle_gravity;
    session
        .particles
        .retain_mut(|particle| particle.update(size_decrement, gravity));

    if let Some(reason) = session.state.end_reason() {
        session.end(reason, &mut outcome);
    }

    outcome
}
