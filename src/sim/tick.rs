//! Per-frame simulation update
//!
//! One call to [`tick`] consumes the frame's input signals and elapsed time
//! and advances the game state machine (Menu, Playing, GameOver).

use super::bonus::{spawn_bonus, update_bonuses};
use super::collision::{
    BrickHit, SpeedTriggers, apply_speed_policy, resolve_bricks, resolve_paddle, resolve_walls,
};
use super::level::generate_level;
use super::state::{GamePhase, GameState};
use super::viewport;
use crate::consts::*;

/// Input signals for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left held
    pub move_left: bool,
    /// Move-right held
    pub move_right: bool,
    /// Release a stuck ball
    pub launch: bool,
    /// Start from the menu, or return to it from game over
    pub confirm: bool,
    /// Finish this frame, then stop the run
    pub quit: bool,
    /// Pending viewport size in pixels, applied before anything else
    pub resize: Option<(u32, u32)>,
    /// Idle/demo mode - autopilot drives the paddle
    pub idle_mode: bool,
}

/// Whether the driver should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Quit,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickStatus {
    if let Some((width, height)) = input.resize {
        viewport::resize(state, width, height);
    }

    // A stalled frame must not tunnel the ball through a brick row
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                start_game(state);
            }
        }
        GamePhase::Playing => {
            let input = if input.idle_mode {
                autopilot(state, input)
            } else {
                input.clone()
            };
            update_playing(state, &input, dt);
        }
        GamePhase::GameOver => {
            if input.confirm {
                state.phase = GamePhase::Menu;
                log::info!("Back to menu");
            }
        }
    }

    if input.quit {
        log::info!("Quit requested in {:?}", state.phase);
        TickStatus::Quit
    } else {
        TickStatus::Running
    }
}

/// Reset counters and build level 1
pub fn start_game(state: &mut GameState) {
    state.score = 0;
    state.lives = state.tuning.initial_lives;
    state.level = 1;
    state.first_contact_red = true;
    state.first_contact_orange = true;
    state.paddle_shrunk = false;
    state.blocks = generate_level(state.bounds.half_width, &mut state.rng);
    state.bonuses.clear();
    state.reset_paddle_and_ball(false);
    state.phase = GamePhase::Playing;

    log::info!("Game started (seed={})", state.seed);
}

/// Move to the next level, keeping the score.
///
/// A paddle halved by the ceiling stays halved until the next game.
pub fn advance_level(state: &mut GameState) {
    state.level += 1;
    state.first_contact_red = true;
    state.first_contact_orange = true;
    state.blocks = generate_level(state.bounds.half_width, &mut state.rng);
    state.bonuses.clear();
    state.reset_paddle_and_ball(false);

    log::info!("Level {} (score={})", state.level, state.score);
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    let direction = match (input.move_left, input.move_right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    if direction != 0.0 {
        let dx = direction * state.tuning.paddle_speed * dt;
        state.paddle.slide(dx, state.bounds);
    }

    if state.ball.is_stuck() {
        state.ball.follow_paddle(&state.paddle);
        if input.launch {
            state.ball.launch(&mut state.rng);
            log::debug!("Ball launched with velocity {:?}", state.ball.vel);
        }
    } else {
        state.ball.rect.pos += state.ball.vel * dt;
    }

    resolve_collisions(state);

    // Lost ball
    if state.ball.rect.max().y < -state.bounds.half_height {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over (score={}, level={})", state.score, state.level);
            return;
        }
        log::info!("Life lost, {} left", state.lives);
        state.reset_paddle_and_ball(true);
    }

    update_bonuses(state, dt);

    if state.remaining_bricks() == 0 {
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over on level clear (score={})", state.score);
        } else {
            advance_level(state);
        }
    }
}

/// Walls, then paddle, then at most one brick
fn resolve_collisions(state: &mut GameState) {
    let ceiling = resolve_walls(&mut state.ball, state.bounds);
    if ceiling && !state.paddle_shrunk {
        state.paddle_shrunk = true;
        let width = state.paddle.width() * 0.5;
        state.paddle.set_width(width, state.bounds);
        log::debug!("Ceiling reached, paddle width -> {:.3}", width);
    }

    resolve_paddle(&mut state.ball, &state.paddle);

    let Some(contact) = resolve_bricks(&mut state.ball, &mut state.blocks) else {
        return;
    };

    match contact.hit {
        BrickHit::Wall => return,
        BrickHit::Damaged => {}
        BrickHit::Destroyed { points, bonus } => {
            state.score += points;
            log::debug!(
                "Brick {} destroyed (+{} -> {})",
                contact.index,
                points,
                state.score
            );
            if let Some((kind, origin)) = bonus {
                let falling = spawn_bonus(kind, &origin, state.tuning.bonus_fall_speed);
                state.bonuses.push(falling);
            }
        }
    }

    let triggers = SpeedTriggers {
        hit_milestones: &state.tuning.speed_bump_hits,
        first_red: state.first_contact_red,
        first_orange: state.first_contact_orange,
    };
    let (first_red, first_orange) = apply_speed_policy(
        &mut state.ball,
        contact.color_kind,
        triggers,
        state.tuning.speed_increment,
    );
    state.first_contact_red = first_red;
    state.first_contact_orange = first_orange;
}

/// Demo input: launch at once, then follow the ball, or chase a falling
/// bonus while the ball is on its way up.
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    let paddle_x = state.paddle.center_x();
    let ball = &state.ball;

    if ball.is_stuck() {
        input.launch = true;
    }

    let chase_bonus = ball.vel.y > 0.0 || ball.is_stuck();
    let target_bonus = state
        .bonuses
        .iter()
        .filter(|b| b.active && chase_bonus)
        .min_by(|a, b| {
            a.rect
                .pos
                .y
                .partial_cmp(&b.rect.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|b| b.rect.center().x);

    let target = target_bonus.unwrap_or_else(|| {
        // Aim slightly off center so rallies do not repeat forever
        let lean = if ball.hit_count % 2 == 0 { 0.3 } else { -0.3 };
        ball.rect.center().x + lean * state.paddle.width() * 0.5
    });

    let dead_zone = state.paddle.width() * 0.1;
    input.move_left = target < paddle_x - dead_zone;
    input.move_right = target > paddle_x + dead_zone;
    input
}
