//! Hit feedback particles
//!
//! Purely visual. The life counter alone decides removal; a particle whose
//! size has shrunk to zero simply stops being drawn until its life runs out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Color class for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Collectible popped (blue)
    Success,
    /// Hazard exploded (red)
    Failure,
}

/// A short-lived fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Ticks left before removal
    pub life: u32,
    pub color: ParticleColor,
}

/// Burst parameters, resolved once from the session config
#[derive(Debug, Clone, Copy)]
pub struct BurstSpec {
    pub count: u32,
    pub life_ticks: u32,
    pub size_range: (f32, f32),
    pub speed: f32,
    /// Live particle cap; fragments past it are dropped
    pub max_live: usize,
}

impl Particle {
    /// Advance one tick. Returns false once the particle should be removed.
    pub fn update(&mut self, size_decrement: f32, gravity: f32) -> bool {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.size -= size_decrement;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }

    /// Still has something to draw
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.size > 0.0
    }
}

/// Append a burst at `origin`, never growing `particles` past the cap
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    color: ParticleColor,
    spec: &BurstSpec,
) {
    let room = spec.max_live.saturating_sub(particles.len());
    let count = (spec.count as usize).min(room);
    let (size_min, size_max) = spec.size_range;

    for _ in 0..count {
        let vel = Vec2::new(
            rng.random_range(-spec.speed..=spec.speed),
            rng.random_range(-spec.speed..=spec.speed),
        );
        particles.push(Particle {
            pos: origin,
            vel,
            size: rng.random_range(size_min..=size_max),
            life: spec.life_ticks,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spec() -> BurstSpec {
        BurstSpec {
            count: 15,
            life_ticks: 25,
            size_range: (4.0, 9.0),
            speed: 4.0,
            max_live: 512,
        }
    }

    #[test]
    fn test_burst_count_and_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        let origin = Vec2::new(100.0, 100.0);
        spawn_burst(&mut particles, &mut rng, origin, ParticleColor::Success, &spec());

        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert_eq!(p.pos, origin);
            assert_eq!(p.life, 25);
            assert!((4.0..=9.0).contains(&p.size));
            assert!(p.vel.x.abs() <= 4.0 && p.vel.y.abs() <= 4.0);
            assert_eq!(p.color, ParticleColor::Success);
        }
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        let spec = BurstSpec {
            max_live: 20,
            ..spec()
        };
        spawn_burst(&mut particles, &mut rng, Vec2::ZERO, ParticleColor::Failure, &spec);
        spawn_burst(&mut particles, &mut rng, Vec2::ZERO, ParticleColor::Failure, &spec);
        assert_eq!(particles.len(), 20);
    }

    #[test]
    fn test_life_is_sole_removal_authority() {
        // Small particle: size hits zero long before life does
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            size: 0.5,
            life: 5,
            color: ParticleColor::Success,
        };
        assert!(p.update(0.3, 0.0));
        assert!(p.is_visible());
        assert!(p.update(0.3, 0.0));
        assert!(!p.is_visible());
        // Invisible but still alive
        assert!(p.update(0.3, 0.0));
        assert!(p.update(0.3, 0.0));
        assert!(!p.update(0.3, 0.0));
        assert_eq!(p.life, 0);
        assert!((p.pos.x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_bends_path() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 5.0,
            life: 10,
            color: ParticleColor::Failure,
        };
        p.update(0.3, 0.2);
        p.update(0.3, 0.2);
        assert!((p.pos.y - 0.2).abs() < 1e-6);
        assert!((p.vel.y - 0.4).abs() < 1e-6);
    }
}
