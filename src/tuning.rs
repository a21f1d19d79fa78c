//! Data-driven game balance
//!
//! Every gameplay constant in one serializable struct so runs are tunable
//! without recompiling. Unspecified fields fall back to the defaults in
//! [`crate::consts`]; an unreadable or malformed file degrades to the
//! defaults with a warning, never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: f32,
    pub board_height: f32,

    pub submarine_width: f32,
    pub submarine_height: f32,
    pub coral_width: f32,
    pub coral_height: f32,
    pub fish_width: f32,
    pub fish_height: f32,
    pub heart_size: f32,

    /// Opposing vertical accelerations, summed each tick
    pub gravity: f32,
    pub buoyancy: f32,
    /// Leftward entity displacement per tick
    pub scroll_velocity: f32,
    pub background_scroll: f32,

    pub tick_ms: u64,
    pub coral_period_ms: u64,
    pub fish_period_ms: u64,
    /// Maximum random lead beyond the right edge for fish spawns
    pub fish_lead: f32,

    pub nudge_step: f32,
    pub strafe_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: consts::BOARD_WIDTH,
            board_height: consts::BOARD_HEIGHT,
            submarine_width: consts::SUBMARINE_WIDTH,
            submarine_height: consts::SUBMARINE_HEIGHT,
            coral_width: consts::CORAL_WIDTH,
            coral_height: consts::CORAL_HEIGHT,
            fish_width: consts::FISH_WIDTH,
            fish_height: consts::FISH_HEIGHT,
            heart_size: consts::HEART_SIZE,
            gravity: consts::GRAVITY,
            buoyancy: consts::BUOYANCY,
            scroll_velocity: consts::SCROLL_VELOCITY,
            background_scroll: consts::BACKGROUND_SCROLL,
            tick_ms: consts::TICK_MS,
            coral_period_ms: consts::CORAL_PERIOD_MS,
            fish_period_ms: consts::FISH_PERIOD_MS,
            fish_lead: consts::FISH_LEAD,
            nudge_step: consts::NUDGE_STEP,
            strafe_step: consts::STRAFE_STEP,
        }
    }
}

impl Tuning {
    /// Fixed timestep in seconds
    pub fn sim_dt(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }

    /// Coral spawn period in ticks, rounded up so a period never fires
    /// early
    pub fn coral_period_ticks(&self) -> u32 {
        ms_to_ticks(self.coral_period_ms, self.tick_ms)
    }

    /// Fish spawn period in ticks
    pub fn fish_period_ticks(&self) -> u32 {
        ms_to_ticks(self.fish_period_ms, self.tick_ms)
    }

    /// Vertical opening between the members of a coral pair
    pub fn coral_gap(&self) -> f32 {
        self.board_height / 3.0
    }

    /// Load tuning from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

fn ms_to_ticks(period_ms: u64, tick_ms: u64) -> u32 {
    (period_ms.div_ceil(tick_ms.max(1)) as u32).max(1)
}
