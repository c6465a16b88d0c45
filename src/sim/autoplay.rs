//! Idle/demo mode - a bot that plays the game
//!
//! Produces pointer-down input like a (slightly sloppy) human: it waits out a
//! reaction delay before clicking a bubble, never clicks faster than its
//! click interval, and sometimes misclicks somewhere random.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::EntityKind;
use super::state::SessionPhase;
use super::tick::{Session, TickInput};

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    /// Minimum entity age before the bot reacts to it
    pub reaction_secs: f64,
    /// Minimum time between clicks
    pub click_interval_secs: f64,
    /// Probability a click lands at a random spot instead of the target.
    /// Non-finite values count as 0.
    pub miss_chance: f64,
    last_click: Option<f64>,
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            reaction_secs: 0.6,
            click_interval_secs: 0.25,
            miss_chance: 0.1,
            last_click: None,
        }
    }

    /// Input for the tick that will run at `now`
    pub fn next_input(&mut self, session: &Session, now: f64) -> TickInput {
        if session.phase() == SessionPhase::Ended {
            self.last_click = None;
            return TickInput::default();
        }
        if let Some(last) = self.last_click {
            if now - last < self.click_interval_secs {
                return TickInput::default();
            }
        }

        let height = session.config().height;
        // Most urgent visible bubble: the one closest to escaping
        let target = session
            .entities()
            .iter()
            .filter(|e| e.kind == EntityKind::Collectible)
            .filter(|e| e.pos.y < height && now - e.spawn_time >= self.reaction_secs)
            .min_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|e| e.pos);

        let Some(target) = target else {
            return TickInput::default();
        };

        self.last_click = Some(now);
        let miss_chance = if self.miss_chance.is_finite() {
            self.miss_chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let click = if self.rng.random_bool(miss_chance) {
            let config = session.config();
            Vec2::new(
                self.rng.random_range(0.0..config.width),
                self.rng.random_range(0.0..config.height),
            )
        } else {
            target
        };
        TickInput::click(click)
    }
}
