//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn::Spawner;
use crate::tuning::Tuning;

/// Lives at the start of a run (and the heart-slot count in the HUD)
pub const STARTING_LIVES: u8 = 3;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start signal; nothing ticks or spawns
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended
    GameOver,
}

/// Side-effect signals produced by a tick, consumed by the audio/UI
/// collaborators. Fire-and-forget; dropping them loses nothing but sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Submarine struck a coral or a fish
    Collision,
    /// Lives hit zero or the submarine fell below the board
    GameOver,
}

/// The player's submarine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submarine {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Integrated each tick; horizontal movement is positional only
    pub velocity_y: f32,
}

impl Submarine {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.board_width / 8.0, tuning.board_height / 2.0),
            width: tuning.submarine_width,
            height: tuning.submarine_height,
            velocity_y: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.width, self.height)
    }
}

/// Which half of a pair a coral belongs to.
///
/// Selects the sprite row for rendering; physics treats both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoralOrientation {
    Top,
    Bottom,
}

/// One coral obstacle. Spawned in vertically linked pairs, but each member
/// lives and dies independently afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coral {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub orientation: CoralOrientation,
    /// One-shot score credit once the submarine is fully past
    pub passed: bool,
}

impl Coral {
    pub fn new(pos: Vec2, orientation: CoralOrientation, tuning: &Tuning) -> Self {
        Self {
            pos,
            width: tuning.coral_width,
            height: tuning.coral_height,
            orientation,
            passed: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.width, self.height)
    }
}

/// A hazard fish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Fish {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            width: tuning.fish_width,
            height: tuning.fish_height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.width, self.height)
    }
}

/// Parallax backdrop: two copies of the background, each wrapping back to
/// the right edge once fully scrolled past the left. Render-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub offsets: [f32; 2],
}

impl Background {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            offsets: [0.0, tuning.board_width],
        }
    }

    pub fn scroll(&mut self, speed: f32, board_width: f32) {
        for x in &mut self.offsets {
            *x -= speed;
            if *x + board_width < 0.0 {
                *x = board_width;
            }
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state; serialized with the rest so a restored game replays
    /// identically
    pub rng: Pcg32,
    /// Gameplay constants for this run
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score accumulator; +0.5 per passed coral member
    pub score: f64,
    /// Player lives
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub submarine: Submarine,
    pub corals: Vec<Coral>,
    pub fish: Vec<Fish>,
    pub spawner: Spawner,
    pub background: Background,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            score: 0.0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            submarine: Submarine::new(&tuning),
            corals: Vec::new(),
            fish: Vec::new(),
            spawner: Spawner::armed(&tuning),
            background: Background::new(&tuning),
            tuning,
        }
    }

    /// Begin the run. Valid only from `NotStarted`; otherwise a no-op.
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.spawner = Spawner::armed(&self.tuning);
        self.phase = GamePhase::Running;
        log::info!("run started (seed {})", self.seed);
    }

    /// Restart after a game over. Valid only from `GameOver`; otherwise a
    /// no-op. Resumes Running directly - there is no second start screen.
    ///
    /// Submarine x and vertical velocity carry over from the ended run.
    pub fn reset(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.lives = STARTING_LIVES;
        self.score = 0.0;
        self.submarine.pos.y = self.tuning.board_height / 2.0;
        self.corals.clear();
        self.fish.clear();
        self.spawner = Spawner::armed(&self.tuning);
        self.phase = GamePhase::Running;
        log::info!("run restarted");
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_from_not_started() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::NotStarted);

        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        // reset is not valid while running
        state.score = 4.5;
        state.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 4.5);
    }

    #[test]
    fn test_reset_restores_initial_run_state() {
        let mut state = GameState::new(1);
        state.start();

        let tuning = state.tuning.clone();
        state.score = 12.0;
        state.lives = 0;
        state.submarine.pos.y = 700.0;
        state
            .corals
            .push(Coral::new(Vec2::new(100.0, 0.0), CoralOrientation::Top, &tuning));
        state.fish.push(Fish::new(Vec2::new(100.0, 100.0), &tuning));
        state.phase = GamePhase::GameOver;

        state.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0.0);
        assert!(state.corals.is_empty());
        assert!(state.fish.is_empty());
        assert_eq!(state.submarine.pos.y, state.tuning.board_height / 2.0);
    }

    #[test]
    fn test_background_wraps_past_left_edge() {
        let tuning = Tuning::default();
        let mut background = Background::new(&tuning);
        background.offsets[0] = -tuning.board_width;

        background.scroll(tuning.background_scroll, tuning.board_width);
        assert_eq!(background.offsets[0], tuning.board_width);
        // Second copy is still mid-scroll
        assert!(background.offsets[1] < tuning.board_width);
    }
}
