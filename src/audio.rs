//! Audio collaborator
//!
//! Two cue points: a collision thud and a distinct game-over sting. The
//! native backend is the terminal bell; an unwritable terminal degrades to
//! silence, never to an error.

use std::io::Write;

use crate::sim::GameEvent;

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Submarine struck a coral or fish
    Collision,
    /// Run ended
    GameOver,
}

impl SoundCue {
    pub fn from_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Collision => SoundCue::Collision,
            GameEvent::GameOver => SoundCue::GameOver,
        }
    }
}

/// Fire-and-forget sound playback
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Play a cue. Write failures are swallowed; the game never stops for
    /// a broken speaker.
    pub fn play(&self, cue: SoundCue) {
        if self.muted || self.master_volume <= 0.0 {
            return;
        }
        log::debug!("audio cue: {cue:?}");

        let bells: usize = match cue {
            SoundCue::Collision => 1,
            SoundCue::GameOver => 2,
        };
        let mut out = std::io::stdout();
        for _ in 0..bells {
            let _ = out.write_all(b"\x07");
        }
        let _ = out.flush();
    }
}
