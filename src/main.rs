//! Brickout entry point
//!
//! Owns the window, the fixed-timestep frame pump, input sampling, and the
//! side effects the simulation reports: sounds, the stopwatch, the high
//! score file. The sim itself never touches any of those.

use macroquad::prelude::*;

use brickout::audio::{self, SoundBank};
use brickout::consts::*;
use brickout::sim::{GameEvent, GameState, TickInput, tick};
use brickout::{HighScore, Settings, Stopwatch, render, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Brickout".to_string(),
        window_width: ARENA_WIDTH as i32,
        window_height: ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load();
    let mut high_score = HighScore::load();
    let sounds = SoundBank::load_defaults().await;

    let seed = macroquad::miniquad::date::now() as u64;
    let mut state = GameState::new(seed);
    log::info!("new game, seed {seed}");

    let mut clock = Stopwatch::new();
    clock.start();

    let mut input = TickInput::default();
    let mut accumulator = 0.0_f32;
    let mut banner: Option<(String, f64)> = None;

    loop {
        // Sample the keyboard. Move keys repeat while held (one step per
        // frame); everything else is edge-triggered.
        if is_key_down(KeyCode::Left) {
            input.move_left = true;
        }
        if is_key_down(KeyCode::Right) {
            input.move_right = true;
        }
        if is_key_pressed(KeyCode::P) {
            input.pause = true;
        }
        if is_key_pressed(KeyCode::R) {
            input.restart = true;
        }
        let quit = is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape);

        // Fixed-timestep update: one integration + one collision pass per
        // tick, however many ticks this frame is worth.
        accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            accumulator -= TICK_DT;
            substeps += 1;
            // One-shot commands must not repeat across substeps
            input = TickInput::default();
        }

        for event in state.drain_events() {
            match event {
                GameEvent::PaddleHit => sounds.play(audio::PADDLE, &settings),
                GameEvent::BrickDestroyed => sounds.play(audio::BRICK, &settings),
                GameEvent::BallLost => sounds.play(audio::BALL_LOST, &settings),
                GameEvent::LevelCleared { level } => {
                    log::info!("level {level} cleared");
                    sounds.play(audio::LEVEL_UP, &settings);
                    banner = Some((format!("You beat level {level}!"), get_time() + 2.0));
                }
                GameEvent::GameOver => {
                    sounds.play(audio::GAME_OVER, &settings);
                    clock.pause();
                    if high_score.record(state.scoreboard.score) {
                        log::info!("new high score: {}", high_score.best());
                    }
                }
                GameEvent::Paused => clock.pause(),
                GameEvent::Resumed => clock.start(),
                GameEvent::Restarted => {
                    log::info!("restarting");
                    banner = None;
                    clock.reset();
                    clock.start();
                }
            }
        }

        render::draw_arena(&state);
        let clock_text = settings.show_timer.then(|| ui::format_clock(clock.elapsed()));
        ui::draw_hud(&state, high_score.best(), clock_text.as_deref());

        if banner.as_ref().is_some_and(|(_, until)| get_time() >= *until) {
            banner = None;
        }
        if let Some((text, _)) = &banner {
            ui::draw_banner(text);
        }
        ui::draw_overlays(&state);

        if settings.show_fps {
            draw_text(
                &format!("{} fps", get_fps()),
                10.0,
                ARENA_HEIGHT - 10.0,
                20.0,
                GRAY,
            );
        }

        if quit {
            // Declining the restart prompt lands here too
            if high_score.record(state.scoreboard.score) {
                log::info!("new high score: {}", high_score.best());
            }
            break;
        }

        next_frame().await;
    }
}
