//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or file I/O; outcomes surface as [`GameEvent`]s

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Axis, brick_hit, paddle_hit};
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, Scoreboard};
pub use tick::{TickInput, tick};
