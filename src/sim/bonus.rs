//! Falling bonuses
//!
//! A destroyed bonus brick drops a small square that falls at constant
//! speed. Catching it with the paddle applies its effect; letting it pass
//! the arena bottom discards it.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::{BonusKind, FallingBonus, GameState};
use crate::consts::*;
use crate::vertical_component;

/// Horizontal fraction of speed after a straighten bonus
const STRAIGHTEN_RATIO: f32 = 0.2;
/// Horizontal fraction of speed after an angle bonus
const ANGLE_RATIO: f32 = 0.7;

/// +1 for a strictly positive component, -1 otherwise (zero counts as negative)
fn sign(value: f32) -> f32 {
    if value > 0.0 { 1.0 } else { -1.0 }
}

/// Create a bonus at the former position of the brick that carried it
pub fn spawn_bonus(kind: BonusKind, origin: &Aabb, fall_speed: f32) -> FallingBonus {
    FallingBonus {
        rect: Aabb::new(origin.pos, Vec2::splat(BONUS_SIZE)),
        color: kind.color(),
        kind,
        fall_speed,
        active: true,
    }
}

/// Move every active bonus down, apply caught ones, then purge the inactive
pub fn update_bonuses(state: &mut GameState, dt: f32) {
    let mut caught = Vec::new();

    for bonus in state.bonuses.iter_mut().filter(|b| b.active) {
        bonus.rect.pos.y -= bonus.fall_speed * dt;

        if bonus.rect.max().y < -state.bounds.half_height {
            bonus.active = false;
        } else if bonus.rect.overlaps(&state.paddle.rect) {
            caught.push(bonus.kind);
            bonus.active = false;
        }
    }

    for kind in caught {
        apply_bonus(state, kind);
    }

    state.bonuses.retain(|b| b.active);
}

/// Apply a caught bonus. Every effect is clamped to sane bounds.
pub fn apply_bonus(state: &mut GameState, kind: BonusKind) {
    let initial_speed = state.tuning.initial_ball_speed;
    let ball = &mut state.ball;

    match kind {
        BonusKind::LifeAdd => {
            state.lives = (state.lives + 1).min(state.tuning.max_lives);
        }
        BonusKind::LifeRemove => {
            state.lives = state.lives.saturating_sub(1).max(1);
        }
        BonusKind::PaddleWiden => {
            let width = (state.paddle.width() * 1.25).min(state.bounds.half_width * 1.5);
            state.paddle.set_width(width, state.bounds);
        }
        BonusKind::PaddleShrink => {
            let width = (state.paddle.width() * 0.75).max(PADDLE_WIDTH * 0.25);
            state.paddle.set_width(width, state.bounds);
        }
        BonusKind::BallSlow => {
            ball.speed = (ball.speed * 0.8).max(initial_speed * 0.5);
            ball.renormalize();
        }
        BonusKind::BallFast => {
            ball.speed = (ball.speed * 1.2).min(initial_speed * 3.0);
            ball.renormalize();
        }
        BonusKind::BallStraighten => {
            if ball.vel.x.abs() > 0.01 {
                let vx = sign(ball.vel.x) * ball.speed * STRAIGHTEN_RATIO;
                let vy = sign(ball.vel.y) * vertical_component(ball.speed, vx);
                ball.vel = Vec2::new(vx, vy);
            }
        }
        BonusKind::BallAngle => {
            if ball.vel.y.abs() > 0.01 {
                let vx = sign(ball.vel.x) * ball.speed * ANGLE_RATIO;
                let vy = sign(ball.vel.y) * vertical_component(ball.speed, vx);
                ball.vel = Vec2::new(vx, vy);
            }
        }
    }

    log::debug!("Bonus {:?} applied (lives={})", kind, state.lives);
}
