//! Fixed timestep simulation tick
//!
//! Advances the game exactly one step: one integration, one collision pass,
//! then the life-loss and level-clear checks. The frame pump decides how
//! many ticks a rendered frame is worth.

use super::collision::{self, Axis};
use super::state::{Ball, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick. All fields are one-shot: the frame pump
/// sets them from key state and clears them once a tick has consumed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Toggle Running <-> Paused
    pub pause: bool,
    /// In-place restart of the whole session
    pub restart: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        restart(state);
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                state.push_event(GameEvent::Paused);
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                state.push_event(GameEvent::Resumed);
            }
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    if input.move_left {
        state.paddle.move_left();
    }
    if input.move_right {
        state.paddle.move_right();
    }

    state.ball.advance();

    check_paddle_collision(state);
    check_brick_collision(state);
    check_ball_lost(state);
    check_level_clear(state);
}

/// The coarse paddle test. On contact the vertical velocity flips and the
/// hit offset becomes english, so off-center bounces redirect the ball.
fn check_paddle_collision(state: &mut GameState) {
    if collision::paddle_hit(state.ball.pos, state.paddle.pos()) {
        state.ball.invert_dy();
        let diff = state.ball.pos.x - state.paddle.x;
        state.ball.adjust_dx(diff);
        state.push_event(GameEvent::PaddleHit);
    }
}

/// Scan the brick field. Only the first hit in field order is processed per
/// tick, and the brick is removed after the scan, so removal can never skip
/// or double-count a brick within the pass.
fn check_brick_collision(state: &mut GameState) {
    let hit = state.bricks.iter().enumerate().find_map(|(idx, brick)| {
        collision::brick_hit(state.ball.pos, brick.pos).map(|axis| (idx, axis))
    });

    if let Some((idx, axis)) = hit {
        match axis {
            Axis::Vertical => state.ball.invert_dy(),
            Axis::Horizontal => state.ball.invert_dx(),
        }
        state.bricks.remove(idx);
        state.scoreboard.add_points(BRICK_POINTS);
        state.push_event(GameEvent::BrickDestroyed);
    }
}

/// The open bottom edge. Losing a life resets ball and paddle in place and
/// leaves the bricks alone; losing the last one ends the run.
fn check_ball_lost(state: &mut GameState) {
    if state.ball.pos.y >= LOSS_Y {
        return;
    }
    state.scoreboard.lose_life();
    if state.scoreboard.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver);
    } else {
        state.ball.reset();
        state.paddle.reset();
        state.push_event(GameEvent::BallLost);
    }
}

/// An empty field levels up: faster ball, a deeper grid every second
/// level-up, fresh bricks, re-centered ball. The paddle stays put.
fn check_level_clear(state: &mut GameState) {
    if state.phase != GamePhase::Running || !state.bricks.is_empty() {
        return;
    }
    let beaten = state.scoreboard.level;
    state.scoreboard.next_level();
    state.ball.increase_speed(LEVEL_SPEED_BONUS);
    if state.scoreboard.level % 2 == 1 {
        state.floors += 1;
    }
    state.ball.reset();
    state.reset_bricks();
    state.push_event(GameEvent::LevelCleared { level: beaten });
}

/// In-place session restart: fresh scoreboard and ball, bricks rebuilt with
/// the current row count, loop resumed.
fn restart(state: &mut GameState) {
    state.scoreboard.reset();
    state.ball = Ball::new();
    state.paddle.reset();
    state.reset_bricks();
    state.phase = GamePhase::Running;
    state.push_event(GameEvent::Restarted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_pause_toggles_and_freezes_physics() {
        let mut state = GameState::new(12345);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Nothing moves while paused
        let ticks = state.time_ticks;
        let pos = state.ball.pos;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.ball.pos, pos);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Running);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Paused));
        assert!(events.contains(&GameEvent::Resumed));
    }

    #[test]
    fn test_life_loss_resets_ball_and_paddle() {
        let mut state = GameState::new(12345);
        state.ball.pos = Vec2::new(0.0, -295.0);
        state.ball.vel = Vec2::new(2.0, -2.0);
        state.paddle.x = 100.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.scoreboard.lives, MAX_LIVES - 1);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 0.0);
        assert_eq!(
            state.bricks.len(),
            (START_FLOORS * START_COLUMNS) as usize,
            "a lost life leaves the brick field alone"
        );
        assert!(state.drain_events().contains(&GameEvent::BallLost));
    }

    #[test]
    fn test_game_over_after_last_life() {
        let mut state = GameState::new(12345);
        for _ in 0..MAX_LIVES {
            state.ball.pos = Vec2::new(0.0, -295.0);
            state.ball.vel = Vec2::new(0.0, -2.0);
            state.paddle.x = 100.0;
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.scoreboard.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.drain_events().contains(&GameEvent::GameOver));

        // The dead loop is inert
        let pos = state.ball.pos;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_level_clear_rebuilds_and_speeds_up() {
        let mut state = GameState::new(12345);
        state.bricks.clear();
        tick(&mut state, &TickInput::default());

        assert_eq!(state.scoreboard.level, 2);
        assert_eq!(state.floors, START_FLOORS, "no extra row entering level 2");
        assert_eq!(state.bricks.len(), (START_FLOORS * START_COLUMNS) as usize);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.ball.vel, Vec2::new(2.5, -2.5));
        assert!(matches!(
            state.drain_events().as_slice(),
            [GameEvent::LevelCleared { level: 1 }]
        ));

        // The second clear adds a row
        state.bricks.clear();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scoreboard.level, 3);
        assert_eq!(state.floors, START_FLOORS + 1);
        assert_eq!(
            state.bricks.len(),
            ((START_FLOORS + 1) * START_COLUMNS) as usize
        );
        assert_eq!(state.ball.vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_paddle_english_redirects_ball() {
        let mut state = GameState::new(12345);
        // Lands at (10, paddle_y) on this tick's move
        state.ball.pos = Vec2::new(8.0, PADDLE_Y + 2.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.y, 2.0);
        assert!((state.ball.vel.x - 3.0).abs() < 1e-6, "dx gains 10 * 0.1");
        assert!(state.drain_events().contains(&GameEvent::PaddleHit));
    }

    #[test]
    fn test_brick_hit_removes_one_and_scores() {
        let mut state = GameState::new(12345);
        let target = state.bricks[0].pos;
        let total = state.bricks.len();
        // Rises into the underside of the first brick
        state.ball.pos = Vec2::new(target.x, target.y - 14.0);
        state.ball.vel = Vec2::new(0.0, 2.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.bricks.len(), total - 1);
        assert_eq!(state.scoreboard.score, BRICK_POINTS);
        assert_eq!(state.ball.vel.y, -2.0, "face hit flips dy");
        assert!(
            !state.bricks.iter().any(|b| b.pos == target),
            "the struck brick is gone"
        );
        assert!(state.drain_events().contains(&GameEvent::BrickDestroyed));
    }

    #[test]
    fn test_side_brick_hit_flips_dx() {
        let mut state = GameState::new(12345);
        let target = state.bricks[0].pos;
        // Approaches from the side band: |dx to center| in (25, 50)
        state.ball.pos = Vec2::new(target.x + 32.0, target.y - 2.0);
        state.ball.vel = Vec2::new(-2.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel.x, 2.0, "side hit flips dx");
        assert_eq!(state.ball.vel.y, 0.0);
    }

    #[test]
    fn test_move_commands_step_the_paddle() {
        let mut state = GameState::new(12345);
        // Park the ball where nothing happens this tick
        state.ball.pos = Vec2::new(0.0, 0.0);
        state.ball.vel = Vec2::new(0.0, -2.0);

        tick(
            &mut state,
            &TickInput {
                move_left: true,
                ..Default::default()
            },
        );
        assert_eq!(state.paddle.x, -PADDLE_STEP);

        tick(
            &mut state,
            &TickInput {
                move_right: true,
                ..Default::default()
            },
        );
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_restart_resets_session_in_place() {
        let mut state = GameState::new(12345);
        state.scoreboard.score = 500;
        state.scoreboard.lives = 1;
        state.scoreboard.level = 4;
        state.ball.increase_speed(1.5);
        state.bricks.clear();
        state.phase = GamePhase::GameOver;

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.scoreboard.score, 0);
        assert_eq!(state.scoreboard.lives, MAX_LIVES);
        assert_eq!(state.scoreboard.level, 1);
        assert_eq!(state.ball.vel, Vec2::new(BALL_BASE_SPEED, -BALL_BASE_SPEED));
        assert!(!state.bricks.is_empty());
        assert!(state.drain_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_floors_grow_every_second_level() {
        let mut state = GameState::new(12345);
        let mut seen = Vec::new();
        for _ in 0..6 {
            state.bricks.clear();
            // Keep the ball clear of the paddle while levels churn
            state.ball.pos = Vec2::ZERO;
            tick(&mut state, &TickInput::default());
            seen.push((state.scoreboard.level, state.floors));
        }
        assert_eq!(
            seen,
            vec![
                (2, START_FLOORS),
                (3, START_FLOORS + 1),
                (4, START_FLOORS + 1),
                (5, START_FLOORS + 2),
                (6, START_FLOORS + 2),
                (7, START_FLOORS + 3),
            ]
        );
    }
}
