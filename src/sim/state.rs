//! Game state and core simulation types
//!
//! Everything the tick mutates lives here; the frontend only reads it.
//! Arena coordinates put the origin at the center of the 800x600 field
//! with +y pointing up.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen mid-game; physics and collision steps are skipped
    Paused,
    /// Run ended, waiting for a restart-or-quit decision
    GameOver,
}

/// Gameplay outcomes the frontend reacts to (sounds, persistence, HUD).
///
/// The tick pushes these; the frame pump drains them once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleHit,
    /// A brick was destroyed and scored
    BrickDestroyed,
    /// Ball fell out the bottom with lives to spare
    BallLost,
    /// Last life gone
    GameOver,
    /// All bricks destroyed; `level` is the level that was beaten
    LevelCleared { level: u32 },
    Paused,
    Resumed,
    /// In-place session restart
    Restarted,
}

/// The ball: a point with per-tick velocity.
///
/// `speed` is the current per-axis base magnitude. It grows with levels and
/// is what `reset` restores, so a ball re-centered after a lost life keeps
/// the pace the level demands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in units per tick
    pub vel: Vec2,
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(BALL_BASE_SPEED, -BALL_BASE_SPEED),
            speed: BALL_BASE_SPEED,
        }
    }

    /// Integrate one tick of motion and reflect off the side and top walls.
    ///
    /// Reflection clamps the position exactly onto the wall before flipping
    /// the velocity sign. The bottom edge is deliberately open: the ball
    /// keeps falling past `LOSS_Y` so the tick can detect the lost life.
    pub fn advance(&mut self) {
        self.pos += self.vel;

        if self.pos.y > WALL_Y {
            self.pos.y = WALL_Y;
            self.vel.y = -self.vel.y;
        }
        if self.pos.x > WALL_X {
            self.pos.x = WALL_X;
            self.vel.x = -self.vel.x;
        } else if self.pos.x < -WALL_X {
            self.pos.x = -WALL_X;
            self.vel.x = -self.vel.x;
        }
    }

    pub fn invert_dx(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn invert_dy(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Add `delta` to the magnitude of both velocity components, preserving
    /// their signs, and to the base speed `reset` will restore.
    pub fn increase_speed(&mut self, delta: f32) {
        self.speed += delta;
        self.vel.x += delta.copysign(self.vel.x);
        self.vel.y += delta.copysign(self.vel.y);
    }

    /// Apply paddle english: `offset` is the ball-to-paddle-center distance
    /// at contact, so off-center hits redirect the ball. The result is
    /// clamped to twice the starting speed.
    pub fn adjust_dx(&mut self, offset: f32) {
        self.vel.x = (self.vel.x + offset * ENGLISH_FACTOR).clamp(-BALL_MAX_DX, BALL_MAX_DX);
    }

    /// Back to the arena center on the starting diagonal, at the current
    /// base speed.
    pub fn reset(&mut self) {
        self.pos = Vec2::ZERO;
        self.vel = Vec2::new(self.speed, -self.speed);
    }
}

/// The player's paddle: horizontal position only, fixed height.
///
/// No collision logic lives here; the tick queries the position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    pub fn new() -> Self {
        Self { x: 0.0 }
    }

    /// One step left, clamped to the arena
    pub fn move_left(&mut self) {
        self.x = (self.x - PADDLE_STEP).max(-PADDLE_LIMIT);
    }

    /// One step right, clamped to the arena
    pub fn move_right(&mut self) {
        self.x = (self.x + PADDLE_STEP).min(PADDLE_LIMIT);
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, PADDLE_Y)
    }
}

/// A destructible brick. Alive-ness is membership in [`GameState::bricks`];
/// destroyed bricks are removed outright rather than tombstoned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    /// Packed 0xRRGGBB, cosmetic only
    pub color: u32,
}

/// Score, lives and level counters.
///
/// The high score is not sim state; it lives with the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: MAX_LIVES,
            level: 1,
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.score += points;
    }

    /// Guarded: a second loss at zero lives must not underflow.
    pub fn lose_life(&mut self) {
        if self.lives > 0 {
            self.lives -= 1;
        }
    }

    pub fn next_level(&mut self) {
        self.level += 1;
    }

    /// Fresh run: score 0, full lives, level 1.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Complete game state: one owned context struct, no globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed; brick colors derive from it deterministically
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Alive bricks only
    pub bricks: Vec<Brick>,
    /// Brick rows in the current field; grows with levels
    pub floors: u32,
    pub columns: u32,
    pub scoreboard: Scoreboard,
    /// Outcomes of recent ticks, drained by the frontend
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            ball: Ball::new(),
            paddle: Paddle::new(),
            bricks: Vec::new(),
            floors: START_FLOORS,
            columns: START_COLUMNS,
            scoreboard: Scoreboard::new(),
            events: Vec::new(),
        };
        state.spawn_bricks();
        state
    }

    /// Populate the brick grid: `floors` rows by `columns` columns at fixed
    /// spacing, one random color per row.
    pub fn spawn_bricks(&mut self) {
        let mut rng = self.field_rng();
        for row in 0..self.floors {
            let color = rng.random_range(0..0x0100_0000u32);
            for col in 0..self.columns {
                self.bricks.push(Brick {
                    pos: Vec2::new(
                        BRICK_LEFT + col as f32 * BRICK_COL_SPACING,
                        BRICK_TOP - row as f32 * BRICK_ROW_SPACING,
                    ),
                    color,
                });
            }
        }
    }

    /// Tear the field down and build it again with the current row count.
    pub fn reset_bricks(&mut self) {
        self.bricks.clear();
        self.spawn_bricks();
    }

    /// Color RNG, re-seeded per level: each field gets a fresh palette, but
    /// a given (seed, level) pair always produces the same one.
    fn field_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.scoreboard.level as u64))
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the accumulated events to the caller, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wall_reflection_clamps_to_boundary() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(0.0, WALL_Y - 0.5);
        ball.vel = Vec2::new(0.0, 2.0);
        ball.advance();
        assert_eq!(ball.pos.y, WALL_Y);
        assert_eq!(ball.vel.y, -2.0);

        ball.pos = Vec2::new(WALL_X - 0.5, 0.0);
        ball.vel = Vec2::new(2.0, 0.0);
        ball.advance();
        assert_eq!(ball.pos.x, WALL_X);
        assert_eq!(ball.vel.x, -2.0);

        ball.pos = Vec2::new(-WALL_X + 0.5, 0.0);
        ball.vel = Vec2::new(-2.0, 0.0);
        ball.advance();
        assert_eq!(ball.pos.x, -WALL_X);
        assert_eq!(ball.vel.x, 2.0);
    }

    #[test]
    fn test_bottom_edge_is_open() {
        let mut ball = Ball::new();
        ball.pos = Vec2::new(0.0, LOSS_Y + 1.0);
        ball.vel = Vec2::new(0.0, -2.0);
        ball.advance();
        assert!(ball.pos.y < LOSS_Y);
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_reset_restores_current_base_speed() {
        let mut ball = Ball::new();
        ball.increase_speed(1.0);
        ball.adjust_dx(25.0);
        ball.pos = Vec2::new(50.0, -120.0);
        ball.reset();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_paddle_clamped_to_limits() {
        let mut paddle = Paddle::new();
        for _ in 0..100 {
            paddle.move_left();
        }
        assert_eq!(paddle.x, -PADDLE_LIMIT);
        for _ in 0..100 {
            paddle.move_right();
        }
        assert_eq!(paddle.x, PADDLE_LIMIT);
    }

    #[test]
    fn test_lose_life_is_guarded_at_zero() {
        let mut board = Scoreboard::new();
        for _ in 0..10 {
            board.lose_life();
        }
        assert_eq!(board.lives, 0);
    }

    #[test]
    fn test_brick_grid_dimensions() {
        let state = GameState::new(7);
        assert_eq!(state.bricks.len(), (START_FLOORS * START_COLUMNS) as usize);
        let first = state.bricks[0];
        assert_eq!(first.pos.x, BRICK_LEFT);
        assert_eq!(first.pos.y, BRICK_TOP);
        let last = state.bricks[state.bricks.len() - 1];
        assert_eq!(
            last.pos.x,
            BRICK_LEFT + (START_COLUMNS - 1) as f32 * BRICK_COL_SPACING
        );
        assert_eq!(
            last.pos.y,
            BRICK_TOP - (START_FLOORS - 1) as f32 * BRICK_ROW_SPACING
        );
    }

    #[test]
    fn test_brick_colors_deterministic_per_seed() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.bricks, b.bricks);
        // One color per row
        assert_eq!(a.bricks[0].color, a.bricks[1].color);
    }

    proptest! {
        #[test]
        fn prop_adjust_dx_stays_clamped(
            offset in -10_000.0f32..10_000.0,
            dx in -BALL_MAX_DX..BALL_MAX_DX,
        ) {
            let mut ball = Ball::new();
            ball.vel.x = dx;
            ball.adjust_dx(offset);
            prop_assert!(ball.vel.x.abs() <= BALL_MAX_DX);
        }

        #[test]
        fn prop_increase_speed_preserves_sign(delta in 0.0f32..5.0) {
            let mut ball = Ball::new();
            ball.increase_speed(delta);
            prop_assert!(ball.vel.x > 0.0 && ball.vel.y < 0.0);
            prop_assert!((ball.vel.x - (BALL_BASE_SPEED + delta)).abs() < 1e-6);
            prop_assert!((ball.vel.y.abs() - (BALL_BASE_SPEED + delta)).abs() < 1e-6);
        }
    }
}
