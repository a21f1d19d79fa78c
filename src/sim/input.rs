//! Discrete input commands
//!
//! Commands mutate the state immediately between ticks; nothing here is
//! physics-integrated. Only Ascend touches velocity - the four nudges are
//! purely positional, and left/right deliberately apply no velocity at
//! all.

use super::state::{GamePhase, GameState};

/// The directional command set. Start is a separate signal
/// ([`GameState::start`]); restart rides on `Ascend` from the game-over
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Upward impulse; doubles as restart when the run has ended
    Ascend,
    Up,
    Down,
    Left,
    Right,
}

/// Apply one command to the state.
pub fn apply(state: &mut GameState, command: Command) {
    match command {
        Command::Ascend => {
            if state.phase == GamePhase::GameOver {
                state.reset();
            } else {
                state.submarine.velocity_y = state.tuning.buoyancy;
            }
        }
        Command::Up => {
            let step = state.tuning.nudge_step;
            state.submarine.pos.y = (state.submarine.pos.y - step).max(0.0);
        }
        Command::Down => {
            let step = state.tuning.nudge_step;
            let floor = state.tuning.board_height - state.submarine.height;
            state.submarine.pos.y = (state.submarine.pos.y + step).min(floor);
        }
        Command::Left => {
            let step = state.tuning.strafe_step;
            state.submarine.pos.x = (state.submarine.pos.x - step).max(0.0);
        }
        Command::Right => {
            let step = state.tuning.strafe_step;
            let wall = state.tuning.board_width - state.submarine.width;
            state.submarine.pos.x = (state.submarine.pos.x + step).min(wall);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(2);
        state.start();
        state
    }

    #[test]
    fn test_ascend_sets_upward_velocity() {
        let mut state = running_state();
        apply(&mut state, Command::Ascend);
        assert_eq!(state.submarine.velocity_y, state.tuning.buoyancy);
    }

    #[test]
    fn test_nudges_move_and_clamp() {
        let mut state = running_state();
        let start_y = state.submarine.pos.y;

        apply(&mut state, Command::Up);
        assert_eq!(state.submarine.pos.y, start_y - state.tuning.nudge_step);

        state.submarine.pos.y = 5.0;
        apply(&mut state, Command::Up);
        assert_eq!(state.submarine.pos.y, 0.0);

        let floor = state.tuning.board_height - state.submarine.height;
        state.submarine.pos.y = floor - 5.0;
        apply(&mut state, Command::Down);
        assert_eq!(state.submarine.pos.y, floor);
    }

    #[test]
    fn test_strafes_move_and_clamp() {
        let mut state = running_state();

        state.submarine.pos.x = 2.0;
        apply(&mut state, Command::Left);
        assert_eq!(state.submarine.pos.x, 0.0);

        let wall = state.tuning.board_width - state.submarine.width;
        state.submarine.pos.x = wall - 2.0;
        apply(&mut state, Command::Right);
        assert_eq!(state.submarine.pos.x, wall);

        // No velocity is ever applied horizontally
        assert_eq!(state.submarine.velocity_y, 0.0);
    }

    #[test]
    fn test_ascend_before_start_does_not_begin_the_run() {
        let mut state = GameState::new(2);
        apply(&mut state, Command::Ascend);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.submarine.velocity_y, state.tuning.buoyancy);
    }
}
