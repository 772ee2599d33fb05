//! HUD text and overlays

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Remaining lives as hearts, lost ones hollowed out
pub fn format_lives(lives: u32) -> String {
    let lives = lives.min(MAX_LIVES) as usize;
    "\u{2665}".repeat(lives) + &"\u{2661}".repeat(MAX_LIVES as usize - lives)
}

/// MM:SS for the HUD clock
pub fn format_clock(elapsed_secs: f64) -> String {
    let total = elapsed_secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Top-of-screen status line
pub fn draw_hud(state: &GameState, high_score: u64, clock: Option<&str>) {
    let board = &state.scoreboard;
    let mut line = format!(
        "Score: {}  High Score: {}  Lives: {}  Level: {}",
        board.score,
        high_score,
        format_lives(board.lives),
        board.level,
    );
    if let Some(clock) = clock {
        line.push_str("  Time: ");
        line.push_str(clock);
    }
    draw_text(&line, 10.0, 24.0, 22.0, WHITE);
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (ARENA_WIDTH - dims.width) / 2.0, y, size, color);
}

/// Transient level-beaten banner
pub fn draw_banner(text: &str) {
    draw_centered(text, ARENA_HEIGHT / 2.0 - 80.0, 36.0, GREEN);
}

/// Pause and game-over screens; nothing while running.
pub fn draw_overlays(state: &GameState) {
    match state.phase {
        GamePhase::Running => {}
        GamePhase::Paused => {
            draw_centered("PAUSED", ARENA_HEIGHT / 2.0, 48.0, YELLOW);
            draw_centered("press P to resume", ARENA_HEIGHT / 2.0 + 32.0, 24.0, GRAY);
        }
        GamePhase::GameOver => {
            draw_centered("GAME OVER", ARENA_HEIGHT / 2.0 - 24.0, 48.0, RED);
            draw_centered(
                &format!("final score {}", state.scoreboard.score),
                ARENA_HEIGHT / 2.0 + 12.0,
                28.0,
                WHITE,
            );
            draw_centered(
                "start a new game?  R = yes, Q = no",
                ARENA_HEIGHT / 2.0 + 44.0,
                24.0,
                GRAY,
            );
        }
    }
}
