//! Timed coral and fish generators
//!
//! Two independent countdowns measured in ticks, so tests drive spawning
//! deterministically without wall-clock timers. Both are stepped only
//! while the game is Running; nothing spawns on the start or game-over
//! screens.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Coral, CoralOrientation, Fish, GamePhase, GameState};
use crate::tuning::Tuning;

/// Spawn countdowns, reloaded from tuning each time a generator fires.
/// Re-armed on start() and reset().
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub coral_countdown: u32,
    pub fish_countdown: u32,
}

impl Spawner {
    /// Fresh countdowns at their full periods
    pub fn armed(tuning: &Tuning) -> Self {
        Self {
            coral_countdown: tuning.coral_period_ticks(),
            fish_countdown: tuning.fish_period_ticks(),
        }
    }
}

/// Step both generators by one tick, appending any spawned entities.
pub fn step(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.spawner.coral_countdown -= 1;
    if state.spawner.coral_countdown == 0 {
        state.spawner.coral_countdown = state.tuning.coral_period_ticks();
        spawn_coral_pair(state);
    }

    state.spawner.fish_countdown -= 1;
    if state.spawner.fish_countdown == 0 {
        state.spawner.fish_countdown = state.tuning.fish_period_ticks();
        spawn_fish(state);
    }
}

/// Emit a top/bottom coral pair at the right edge.
///
/// Both members share one random vertical offset drawn from a band above
/// the playfield; the bottom sits a fixed gap (boardHeight / 3) below the
/// top. After this call the pair has no structural link.
pub fn spawn_coral_pair(state: &mut GameState) {
    let coral_height = state.tuning.coral_height;
    let jitter: f32 = state.rng.random_range(0.0..1.0);
    let top_y = -coral_height / 4.0 - jitter * coral_height / 2.0;
    let bottom_y = top_y + coral_height + state.tuning.coral_gap();
    let x = state.tuning.board_width;

    let top = Coral::new(Vec2::new(x, top_y), CoralOrientation::Top, &state.tuning);
    let bottom = Coral::new(Vec2::new(x, bottom_y), CoralOrientation::Bottom, &state.tuning);
    state.corals.push(top);
    state.corals.push(bottom);
}

/// Emit one fish ahead of the right edge, within the lead jitter band.
pub fn spawn_fish(state: &mut GameState) {
    let lead: f32 = state.rng.random_range(0.0..state.tuning.fish_lead);
    let y: f32 = state
        .rng
        .random_range(0.0..state.tuning.board_height - state.tuning.fish_height);
    let pos = Vec2::new(state.tuning.board_width + lead, y);

    let fish = Fish::new(pos, &state.tuning);
    state.fish.push(fish);
}
