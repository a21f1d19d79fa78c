//! Axis-aligned collision detection and response
//!
//! Box-vs-box overlap tests between the submarine and every coral/fish,
//! driving life loss and the game-over transition.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::new(width, height),
        }
    }

    /// Strict-overlap test: boxes that only touch along an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Resolve submarine collisions for one tick.
///
/// Each entity class is scanned in list order and stops at the first hit,
/// so at most one coral and one fish are consumed per tick even when
/// several overlap. Afterwards, falling below the board ends the run
/// regardless of remaining lives.
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let sub = state.submarine.bounds();

    if let Some(idx) = state.corals.iter().position(|c| sub.intersects(&c.bounds())) {
        state.corals.remove(idx);
        lose_life(state, events);
    }

    if let Some(idx) = state.fish.iter().position(|f| sub.intersects(&f.bounds())) {
        state.fish.remove(idx);
        lose_life(state, events);
    }

    if state.submarine.pos.y > state.tuning.board_height {
        end_run(state, events);
    }
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::Collision);
    if state.lives == 0 {
        end_run(state, events);
    }
}

/// Transition to GameOver, emitting the terminal event exactly once.
fn end_run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::GameOver);
    log::info!("game over at score {}", state.score as i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coral, CoralOrientation, Fish, STARTING_LIVES};

    fn running_state() -> GameState {
        let mut state = GameState::new(5);
        state.start();
        state
    }

    fn coral_at(state: &GameState, pos: Vec2) -> Coral {
        Coral::new(pos, CoralOrientation::Top, &state.tuning)
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), 10.0, 10.0);
        let overlapping = Aabb::from_pos_size(Vec2::new(5.0, 5.0), 10.0, 10.0);
        let touching = Aabb::from_pos_size(Vec2::new(10.0, 0.0), 10.0, 10.0);
        let disjoint = Aabb::from_pos_size(Vec2::new(20.0, 20.0), 5.0, 5.0);

        assert!(a.intersects(&overlapping));
        assert!(!a.intersects(&touching));
        assert!(!a.intersects(&disjoint));
    }

    #[test]
    fn test_coral_hit_costs_a_life_and_removes_it() {
        let mut state = running_state();
        let pos = state.submarine.pos;
        state.corals.push(coral_at(&state, pos));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(state.corals.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(events, vec![GameEvent::Collision]);
    }

    #[test]
    fn test_first_hit_only_per_class() {
        let mut state = running_state();
        let pos = state.submarine.pos;
        state.corals.push(coral_at(&state, pos));
        state.corals.push(coral_at(&state, pos));

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        // Only the first overlapping coral is consumed this tick
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.corals.len(), 1);
    }

    #[test]
    fn test_coral_and_fish_can_both_hit_in_one_tick() {
        let mut state = running_state();
        let pos = state.submarine.pos;
        state.corals.push(coral_at(&state, pos));
        let fish = Fish::new(pos, &state.tuning);
        state.fish.push(fish);

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.lives, STARTING_LIVES - 2);
        assert_eq!(events, vec![GameEvent::Collision, GameEvent::Collision]);
    }

    #[test]
    fn test_third_hit_ends_the_run() {
        let mut state = running_state();
        let mut events = Vec::new();

        for _ in 0..3 {
            let pos = state.submarine.pos;
            state.corals.push(coral_at(&state, pos));
            resolve(&mut state, &mut events);
        }

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        let terminal = events.iter().filter(|e| **e == GameEvent::GameOver).count();
        assert_eq!(terminal, 1);
    }

    #[test]
    fn test_falling_below_board_forces_game_over() {
        let mut state = running_state();
        state.submarine.pos.y = state.tuning.board_height + 1.0;

        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(events, vec![GameEvent::GameOver]);
    }
}
