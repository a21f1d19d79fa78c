//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::Command;
pub use spawn::Spawner;
pub use state::{
    Background, Coral, CoralOrientation, Fish, GameEvent, GamePhase, GameState, STARTING_LIVES,
    Submarine,
};
pub use tick::tick;
