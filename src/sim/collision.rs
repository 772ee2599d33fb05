//! Collision tests for the paddle and brick field
//!
//! These are deliberately loose coordinate-threshold boxes, not exact
//! rectangle intersection: a ball passing close beside the paddle can still
//! register a hit. The coarseness is part of the game's feel and is kept
//! rather than corrected.

use glam::Vec2;

/// Vertical reach of the paddle hit box (inclusive)
pub const PADDLE_REACH_Y: f32 = 20.0;
/// Horizontal reach of the paddle hit box
pub const PADDLE_REACH_X: f32 = 50.0;
/// Vertical reach of a brick hit box
pub const BRICK_REACH_Y: f32 = 20.0;
/// Horizontal reach of a brick hit box
pub const BRICK_REACH_X: f32 = 50.0;
/// Inside this horizontal band a hit counts as striking the brick's face
pub const BRICK_FACE_BAND: f32 = 25.0;

/// Which brick surface the ball struck, deciding the velocity axis to flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Top or bottom face: dy flips
    Vertical,
    /// Left or right side: dx flips
    Horizontal,
}

/// True when the ball overlaps the paddle's threshold box.
pub fn paddle_hit(ball: Vec2, paddle: Vec2) -> bool {
    (ball.y - paddle.y).abs() <= PADDLE_REACH_Y && (ball.x - paddle.x).abs() < PADDLE_REACH_X
}

/// Check the ball against one brick; on a hit, classify the struck surface.
///
/// A ball horizontally centered on the brick hit its face; further out it
/// clipped a side.
pub fn brick_hit(ball: Vec2, brick: Vec2) -> Option<Axis> {
    if (ball.y - brick.y).abs() < BRICK_REACH_Y && (ball.x - brick.x).abs() < BRICK_REACH_X {
        if (ball.x - brick.x).abs() < BRICK_FACE_BAND {
            Some(Axis::Vertical)
        } else {
            Some(Axis::Horizontal)
        }
    } else {
        None
    }
}
