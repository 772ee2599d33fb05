//! Drawing adapter
//!
//! Reads the simulation state once per frame and issues macroquad draw
//! calls. The sim knows nothing about any of this: arena coordinates
//! (origin at the center, +y up) are mapped to screen space here.

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::GameState;

/// Arena x to screen x
fn screen_x(x: f32) -> f32 {
    x + ARENA_WIDTH / 2.0
}

/// Arena y to screen y (flipped)
fn screen_y(y: f32) -> f32 {
    ARENA_HEIGHT / 2.0 - y
}

fn brick_color(packed: u32) -> Color {
    Color::from_rgba((packed >> 16) as u8, (packed >> 8) as u8, packed as u8, 255)
}

fn draw_centered_rect(x: f32, y: f32, w: f32, h: f32, color: Color) {
    draw_rectangle(screen_x(x) - w / 2.0, screen_y(y) - h / 2.0, w, h, color);
}

/// Draw the playfield: bricks, paddle, ball.
pub fn draw_arena(state: &GameState) {
    clear_background(BLACK);

    for brick in &state.bricks {
        draw_centered_rect(
            brick.pos.x,
            brick.pos.y,
            BRICK_WIDTH,
            BRICK_HEIGHT,
            brick_color(brick.color),
        );
    }

    draw_centered_rect(state.paddle.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT, WHITE);
    draw_centered_rect(state.ball.pos.x, state.ball.pos.y, BALL_SIZE, BALL_SIZE, WHITE);
}
