//! Reef Runner - a side-scrolling submarine arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `app`: Fixed-timestep frame orchestration
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound cue collaborator

pub mod app;
pub mod audio;
pub mod sim;
pub mod tuning;

pub use app::Game;
pub use tuning::Tuning;

/// Game configuration defaults
///
/// These are the out-of-the-box values; everything here is overridable
/// through [`tuning::Tuning`].
pub mod consts {
    /// Simulation tick length in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 1900.0;
    pub const BOARD_HEIGHT: f32 = 720.0;

    /// Entity sizes
    pub const SUBMARINE_WIDTH: f32 = 80.0;
    pub const SUBMARINE_HEIGHT: f32 = 45.0;
    pub const CORAL_WIDTH: f32 = 60.0;
    pub const CORAL_HEIGHT: f32 = 500.0;
    pub const FISH_WIDTH: f32 = 60.0;
    pub const FISH_HEIGHT: f32 = 40.0;
    /// Heart icon size for the lives HUD
    pub const HEART_SIZE: f32 = 50.0;

    /// Vertical accelerations, combined each tick into the net velocity
    /// change (positive is down)
    pub const GRAVITY: f32 = 1.0;
    pub const BUOYANCY: f32 = -1.0;

    /// Leftward displacement applied to corals and fish per tick
    pub const SCROLL_VELOCITY: f32 = 10.0;
    /// Parallax backdrop displacement per tick
    pub const BACKGROUND_SCROLL: f32 = 2.0;

    /// Spawner periods
    pub const CORAL_PERIOD_MS: u64 = 1500;
    pub const FISH_PERIOD_MS: u64 = 2000;
    /// Maximum random lead distance beyond the right edge for fish spawns
    pub const FISH_LEAD: f32 = 300.0;

    /// Positional input steps (up/down and left/right)
    pub const NUDGE_STEP: f32 = 20.0;
    pub const STRAFE_STEP: f32 = 5.0;
}
