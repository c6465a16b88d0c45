//! Audio cue dispatch
//!
//! The core only says *which* cue fired; playback belongs to a backend
//! (mixer, Web Audio, nothing at all). A backend that cannot play a cue is
//! skipped silently after one warning.

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Collectible popped
    Success,
    /// Hazard exploded
    Failure,
}

impl AudioCue {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CollectibleHit { .. } => Some(AudioCue::Success),
            GameEvent::HazardHit { .. } => Some(AudioCue::Failure),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            AudioCue::Success => 0,
            AudioCue::Failure => 1,
        }
    }
}

/// Something that can actually make noise
pub trait CueBackend {
    /// Whether the asset for `cue` loaded
    fn has_cue(&self, cue: AudioCue) -> bool {
        let _ = cue;
        true
    }

    /// Fire and forget
    fn play(&mut self, cue: AudioCue, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn CueBackend>>,
    volume: f32,
    muted: bool,
    warned: [bool; 2],
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    /// `volume` is clamped to 0.0 - 1.0; NaN means silent
    pub fn new(backend: Box<dyn CueBackend>, volume: f32) -> Self {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        Self {
            backend: Some(backend),
            volume,
            muted: false,
            warned: [false; 2],
        }
    }

    /// No backend at all (headless, or the device failed to open)
    pub fn silent() -> Self {
        Self {
            backend: None,
            volume: 0.0,
            muted: false,
            warned: [false; 2],
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Play a cue
    pub fn play(&mut self, cue: AudioCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        if !backend.has_cue(cue) {
            let warned = &mut self.warned[cue.index()];
            if !*warned {
                log::warn!("Audio cue {:?} unavailable - skipping", cue);
                *warned = true;
            }
            return;
        }
        backend.play(cue, vol);
    }

    /// Play the cues for a tick's events
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(AudioCue::for_event) {
            self.play(cue);
        }
    }
}
