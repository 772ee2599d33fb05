//! Brickout - a classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Drawing adapter that reads sim state once per frame
//! - `ui`: HUD text and overlays
//! - `audio`: Named sound effects with non-fatal loading
//! - `highscore`: Single-value high score persistence
//! - `settings`: Player preferences
//! - `stopwatch`: Pausable elapsed-time tracking for the HUD

pub mod audio;
pub mod highscore;
pub mod render;
pub mod settings;
pub mod sim;
pub mod stopwatch;
pub mod ui;

pub use highscore::HighScore;
pub use settings::Settings;
pub use stopwatch::Stopwatch;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const TICK_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Side walls: the ball reflects when |x| exceeds this
    pub const WALL_X: f32 = 390.0;
    /// Top wall
    pub const WALL_Y: f32 = 290.0;
    /// Below this the ball is lost; the bottom edge has no wall
    pub const LOSS_Y: f32 = -290.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Starting speed magnitude on each axis, units per tick
    pub const BALL_BASE_SPEED: f32 = 2.0;
    /// Horizontal speed cap applied after paddle english
    pub const BALL_MAX_DX: f32 = 2.0 * BALL_BASE_SPEED;
    /// Fraction of the paddle-hit offset converted into horizontal speed
    pub const ENGLISH_FACTOR: f32 = 0.1;
    /// Speed added to both axes on every level-up
    pub const LEVEL_SPEED_BONUS: f32 = 0.5;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Fixed paddle height: just above the bottom edge
    pub const PADDLE_Y: f32 = -ARENA_HEIGHT / 2.0 + 20.0;
    /// Horizontal distance covered by one move command
    pub const PADDLE_STEP: f32 = 20.0;
    /// The paddle center never leaves [-limit, limit]
    pub const PADDLE_LIMIT: f32 = 320.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Center of the top-left brick
    pub const BRICK_LEFT: f32 = -380.0;
    pub const BRICK_TOP: f32 = 250.0;
    pub const BRICK_COL_SPACING: f32 = 50.0;
    pub const BRICK_ROW_SPACING: f32 = 30.0;
    pub const START_FLOORS: u32 = 5;
    pub const START_COLUMNS: u32 = 16;
    /// Points awarded per destroyed brick
    pub const BRICK_POINTS: u64 = 10;

    pub const MAX_LIVES: u32 = 3;
}
