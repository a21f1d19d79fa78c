//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one tick: spawners, parallax,
//! vertical physics, scroll motion, pass scoring, collisions, pruning.
//! No-op unless the game is Running.

use super::collision;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one fixed tick.
///
/// Events fired during the tick are appended to `events`; the caller owns
/// the buffer and forwards it to the audio/UI collaborators.
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    spawn::step(state);

    // Parallax backdrop (render-only)
    let background_scroll = state.tuning.background_scroll;
    let board_width = state.tuning.board_width;
    state.background.scroll(background_scroll, board_width);

    // Net vertical drift from the opposing constant accelerations; the
    // ceiling clamps, the floor is fatal and handled by the resolver
    state.submarine.velocity_y += state.tuning.gravity + state.tuning.buoyancy;
    state.submarine.pos.y += state.submarine.velocity_y;
    state.submarine.pos.y = state.submarine.pos.y.max(0.0);

    // Scroll obstacles left, crediting passes per coral member rather than
    // per pair
    let scroll = state.tuning.scroll_velocity;
    let sub_x = state.submarine.pos.x;
    for coral in &mut state.corals {
        coral.pos.x -= scroll;
        if !coral.passed && sub_x > coral.pos.x + coral.width {
            coral.passed = true;
            state.score += 0.5;
        }
    }
    for fish in &mut state.fish {
        fish.pos.x -= scroll;
    }

    collision::resolve(state, events);

    // Drop entities fully past the left edge
    state.fish.retain(|f| f.pos.x + f.width >= 0.0);
    state.corals.retain(|c| c.pos.x + c.width >= 0.0);
}
