//! Frame orchestration
//!
//! Bridges wall-clock frames to the fixed-rate simulation: accumulate
//! real elapsed time, run whole ticks, and hand the fired events to the
//! audio/UI collaborators. Rendering reads the state between updates.

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{self, Command, GameEvent, GameState};

/// Longest frame worth simulating; anything slower is treated as a hiccup
const MAX_FRAME_DT: f32 = 0.1;

/// Owns the game state and the real-time accumulator.
pub struct Game {
    state: GameState,
    accumulator: f32,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_state(GameState::new(seed))
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Forward the start signal
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Apply a directional command between ticks
    pub fn command(&mut self, command: Command) {
        sim::input::apply(&mut self.state, command);
    }

    /// Advance by `real_dt` seconds of wall-clock time.
    ///
    /// Runs as many whole fixed ticks as the accumulator covers, capped at
    /// [`MAX_SUBSTEPS`] per frame. Returns the events fired this frame.
    pub fn update(&mut self, real_dt: f32) -> &[GameEvent] {
        self.events.clear();

        self.accumulator += real_dt.min(MAX_FRAME_DT);
        let sim_dt = self.state.tuning.sim_dt();

        let mut substeps = 0;
        while self.accumulator >= sim_dt && substeps < MAX_SUBSTEPS {
            sim::tick(&mut self.state, &mut self.events);
            self.accumulator -= sim_dt;
            substeps += 1;
        }

        if self.accumulator >= sim_dt {
            log::warn!(
                "frame fell behind, dropping {:.0} ms of simulation",
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }

        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Coral, CoralOrientation, GamePhase};
    use glam::Vec2;

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut game = Game::new(1);
        game.start();
        let sim_dt = game.state().tuning.sim_dt();

        game.update(sim_dt * 3.25);
        assert_eq!(game.state().time_ticks, 3);

        // Leftover fraction carries into the next frame
        game.update(sim_dt);
        assert_eq!(game.state().time_ticks, 4);
    }

    #[test]
    fn test_update_caps_substeps() {
        let mut game = Game::new(1);
        game.start();
        let sim_dt = game.state().tuning.sim_dt();

        game.update(sim_dt * (MAX_SUBSTEPS as f32 + 4.0));
        assert_eq!(game.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_update_surfaces_events() {
        let mut game = Game::new(1);
        game.start();
        let tuning = game.state().tuning.clone();
        let pos = game.state().submarine.pos;
        game.state
            .corals
            .push(Coral::new(pos, CoralOrientation::Top, &tuning));

        let events = game.update(tuning.sim_dt());
        assert_eq!(events, [GameEvent::Collision].as_slice());
        assert_eq!(game.state().phase, GamePhase::Running);
    }
}
