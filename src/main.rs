//! Bubble Pop entry point
//!
//! Headless native driver: runs one session on a simulated frame clock with
//! the demo bot at the controls, then records the result.
//!
//! Usage: `bubble-pop [config.json] [seed]`

use std::time::{SystemTime, UNIX_EPOCH};

use bubble_pop::audio::AudioManager;
use bubble_pop::clock::FixedStep;
use bubble_pop::sim::{AutoPlayer, Hud, Session, TickStatus, tick};
use bubble_pop::{HighScores, SessionConfig};

const HIGH_SCORES_FILE: &str = "bubble_pop_highscores.json";

fn main() {
    env_logger::init();
    log::info!("Bubble Pop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SessionConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Bad config {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => SessionConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| unix_millis() as u64);

    let mut session = match Session::new(config, seed, 0.0) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Bad config: {}", e);
            std::process::exit(2);
        }
    };

    let mut clock = FixedStep::new(session.config().tick_rate);
    let mut bot = AutoPlayer::new(seed);
    let mut audio = AudioManager::silent();
    let mut restarted = false;

    // Simulated 60 fps frames; tick times come from the fixed-step clock
    'frames: loop {
        for now in clock.advance(1.0 / 60.0) {
            let mut input = bot.next_input(&session, now);
            if let Hud::Ended(summary) = session.hud() {
                println!(
                    "Game Over! Score: {}  Accuracy: {:.2}%  Avg Reaction: {:.3}s",
                    summary.score,
                    summary.accuracy_percent(),
                    summary.avg_reaction_secs
                );
                record(&summary);
                // One replay, then quit
                input.restart = !restarted;
                input.quit = restarted;
                restarted = true;
            }

            let outcome = tick(&mut session, &input, now);
            audio.play_events(&outcome.events);
            if outcome.status == TickStatus::Quit {
                break 'frames;
            }
        }
    }

    log::info!("Bubble Pop exiting");
}

fn record(summary: &bubble_pop::sim::SessionSummary) {
    let mut scores = HighScores::load(HIGH_SCORES_FILE);
    if let Some(rank) = scores.record(summary, unix_millis()) {
        println!("New high score! Rank #{}", rank);
        if let Err(e) = scores.save(HIGH_SCORES_FILE) {
            log::warn!("Could not save high scores: {}", e);
        }
    }
}

fn unix_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
