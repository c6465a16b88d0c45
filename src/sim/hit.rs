//! Pointer hit resolution
//!
//! A click resolves at most one entity: the first in live-collection (creation)
//! order whose circle contains the pointer. Every click counts toward accuracy,
//! including clicks on empty space.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::particle::{BurstSpec, Particle, ParticleColor, spawn_burst};
use super::state::{GameEvent, SessionState};

/// Resolve one pointer-down at `click`
pub fn resolve_click<R: Rng>(
    state: &mut SessionState,
    entities: &mut Vec<Entity>,
    particles: &mut Vec<Particle>,
    rng: &mut R,
    click: Vec2,
    now: f64,
    burst: &BurstSpec,
) -> GameEvent {
    state.click_count += 1;

    let Some(index) = entities.iter().position(|e| e.contains(click)) else {
        return GameEvent::Missed { pos: click };
    };

    // Vec::remove keeps creation order for the next tie-break
    let entity = entities.remove(index);
    let reaction_secs = (now - entity.spawn_time).max(0.0);
    state.reaction_times.push(reaction_secs);

    match entity.kind {
        EntityKind::Collectible => {
            state.score += 1;
            state.hit_count += 1;
            spawn_burst(particles, rng, entity.pos, ParticleColor::Success, burst);
            log::debug!(
                "Popped #{} after {:.3}s (score {})",
                entity.id,
                reaction_secs,
                state.score
            );
            GameEvent::CollectibleHit {
                id: entity.id,
                pos: entity.pos,
                reaction_secs,
            }
        }
        EntityKind::Hazard => {
            state.lives = state.lives.saturating_sub(1);
            spawn_burst(particles, rng, entity.pos, ParticleColor::Failure, burst);
            log::debug!("Hit hazard #{} ({} lives left)", entity.id, state.lives);
            GameEvent::HazardHit {
                id: entity.id,
                pos: entity.pos,
                reaction_secs,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn burst() -> BurstSpec {
        BurstSpec {
            count: 15,
            life_ticks: 25,
            size_range: (4.0, 9.0),
            speed: 4.0,
            max_live: 512,
        }
    }

    fn entity(id: u32, kind: EntityKind, x: f32, y: f32) -> Entity {
        Entity::new(id, kind, Vec2::new(x, y), Vec2::ZERO, 40.0, 0.0)
    }

    #[test]
    fn test_collectible_hit() {
        let mut state = SessionState::new(&SessionConfig::default(), 0.0);
        let mut entities = vec![entity(1, EntityKind::Collectible, 100.0, 500.0)];
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);

        let event = resolve_click(
            &mut state,
            &mut entities,
            &mut particles,
            &mut rng,
            Vec2::new(110.0, 510.0),
            0.5,
            &burst(),
        );

        assert!(matches!(event, GameEvent::CollectibleHit { id: 1, .. }));
        assert_eq!(state.score, 1);
        assert_eq!(state.hit_count, 1);
        assert_eq!(state.click_count, 1);
        assert_eq!(state.reaction_times, vec![0.5]);
        assert!(entities.is_empty());
        assert_eq!(particles.len(), 15);
        assert!(particles.iter().all(|p| p.color == ParticleColor::Success));
    }

    #[test]
    fn test_hazard_hit() {
        let mut state = SessionState::new(&SessionConfig::default(), 0.0);
        let mut entities = vec![entity(1, EntityKind::Hazard, 300.0, 300.0)];
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);

        let event = resolve_click(
            &mut state,
            &mut entities,
            &mut particles,
            &mut rng,
            Vec2::new(300.0, 300.0),
            2.0,
            &burst(),
        );

        assert!(matches!(event, GameEvent::HazardHit { id: 1, .. }));
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert_eq!(state.hit_count, 0);
        assert_eq!(state.click_count, 1);
        // Hazard hits still record a reaction time
        assert_eq!(state.reaction_times, vec![2.0]);
        assert!(particles.iter().all(|p| p.color == ParticleColor::Failure));
    }

    #[test]
    fn test_miss_only_counts_click() {
        let mut state = SessionState::new(&SessionConfig::default(), 0.0);
        let mut entities = vec![entity(1, EntityKind::Collectible, 100.0, 100.0)];
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);

        let event = resolve_click(
            &mut state,
            &mut entities,
            &mut particles,
            &mut rng,
            Vec2::new(500.0, 500.0),
            1.0,
            &burst(),
        );

        assert!(matches!(event, GameEvent::Missed { .. }));
        assert_eq!(state.click_count, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.hit_count, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(entities.len(), 1);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_overlap_resolves_first_in_order() {
        let mut state = SessionState::new(&SessionConfig::default(), 0.0);
        let mut entities = vec![
            entity(1, EntityKind::Hazard, 100.0, 100.0),
            entity(2, EntityKind::Collectible, 110.0, 100.0),
            entity(3, EntityKind::Collectible, 120.0, 100.0),
        ];
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        let click = Vec2::new(110.0, 100.0);

        let event = resolve_click(
            &mut state,
            &mut entities,
            &mut particles,
            &mut rng,
            click,
            1.0,
            &burst(),
        );
        assert!(matches!(event, GameEvent::HazardHit { id: 1, .. }));
        assert_eq!(entities.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3]);

        let event = resolve_click(
            &mut state,
            &mut entities,
            &mut particles,
            &mut rng,
            click,
            1.0,
            &burst(),
        );
        assert!(matches!(event, GameEvent::CollectibleHit { id: 2, .. }));
        assert_eq!(entities.len(), 1);
    }
}
