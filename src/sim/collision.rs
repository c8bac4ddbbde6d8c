//! Collision detection and response
//!
//! Resolution runs in a fixed order each step: arena walls, then paddle,
//! then bricks. Later stages may override the position correction of earlier
//! ones. At most one brick is resolved per step.

use glam::Vec2;

use super::aabb::{Aabb, Axis};
use super::state::{ArenaBounds, Ball, Block, BonusKind, BrickColor, Paddle};
use crate::consts::*;
use crate::vertical_component;

/// Clamp-and-reflect against the left, right and top arena edges.
///
/// Horizontal and vertical edges are handled independently. The bottom edge
/// is open (the ball is lost there). Returns true if the ceiling was hit.
pub fn resolve_walls(ball: &mut Ball, bounds: ArenaBounds) -> bool {
    if ball.rect.min().x <= -bounds.half_width {
        ball.vel.x = ball.vel.x.abs();
        ball.rect.pos.x = -bounds.half_width;
    } else if ball.rect.max().x >= bounds.half_width {
        ball.vel.x = -ball.vel.x.abs();
        ball.rect.pos.x = bounds.half_width - ball.rect.size.x;
    }

    if ball.rect.max().y >= bounds.half_height {
        ball.vel.y = -ball.vel.y.abs();
        ball.rect.pos.y = bounds.half_height - ball.rect.size.y;
        return true;
    }
    false
}

/// Velocity after a paddle hit at normalized impact `offset` (-1 left edge,
/// 0 center, 1 right edge).
///
/// Two zones: near the center the horizontal gain is small for fine
/// control, toward the edges it is large for sharp angles. The vertical
/// component is rebuilt so the magnitude stays `speed` and always points up.
pub fn paddle_deflection(offset: f32, speed: f32) -> Vec2 {
    let offset = offset.clamp(-1.0, 1.0);
    let gain = if offset.abs() < DEFLECT_ZONE {
        DEFLECT_SHALLOW_GAIN
    } else {
        DEFLECT_STEEP_GAIN
    };
    let vx = offset * speed * gain;
    Vec2::new(vx, vertical_component(speed, vx))
}

/// Bounce the ball off the paddle.
///
/// Only a descending ball is resolved; an ascending ball still touching the
/// paddle is left alone so it cannot bounce twice.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect.overlaps(&paddle.rect) || ball.vel.y >= 0.0 {
        return false;
    }

    ball.rect.pos.y = paddle.top();

    let half_width = paddle.width() * 0.5;
    let offset = if half_width > 0.0 {
        (ball.rect.center().x - paddle.center_x()) / half_width
    } else {
        0.0
    };
    ball.vel = paddle_deflection(offset, ball.speed);
    true
}

/// Outcome of a ball/brick contact
#[derive(Debug, Clone, PartialEq)]
pub enum BrickHit {
    /// Indestructible wall; nothing changes on the brick
    Wall,
    /// Destructible brick survived with hits left
    Damaged,
    /// Destructible brick reached zero hits
    Destroyed {
        points: u32,
        bonus: Option<(BonusKind, Aabb)>,
    },
}

/// Resolved brick contact for one step
#[derive(Debug, Clone, PartialEq)]
pub struct BrickContact {
    /// Storage index of the brick that was struck
    pub index: usize,
    pub color_kind: BrickColor,
    pub hit: BrickHit,
}

/// Flip the velocity on the axis of least penetration and put the ball
/// flush against the struck face, `BOUNCE_EPSILON` clear of it.
fn bounce_off(ball: &mut Ball, brick: &Aabb, flip: bool) {
    let penetration = ball.rect.penetration(brick);
    match penetration.axis() {
        Axis::Horizontal => {
            if flip {
                ball.vel.x = -ball.vel.x;
            }
            ball.rect.pos.x = if ball.vel.x > 0.0 {
                brick.max().x + BOUNCE_EPSILON
            } else {
                brick.min().x - ball.rect.size.x - BOUNCE_EPSILON
            };
        }
        Axis::Vertical => {
            if flip {
                ball.vel.y = -ball.vel.y;
            }
            ball.rect.pos.y = if ball.vel.y > 0.0 {
                brick.max().y + BOUNCE_EPSILON
            } else {
                brick.min().y - ball.rect.size.y - BOUNCE_EPSILON
            };
        }
    }
}

/// Resolve the first active brick (in storage order) the ball overlaps.
///
/// Walls only deflect the ball. Destructible bricks lose one hit; at zero
/// they are deactivated and report their points and carried bonus. A
/// surviving counter brick is repainted in its plain tier color.
pub fn resolve_bricks(ball: &mut Ball, blocks: &mut [Block]) -> Option<BrickContact> {
    let index = blocks
        .iter()
        .position(|b| b.active && b.rect.overlaps(&ball.rect))?;
    let block = &mut blocks[index];

    let hit = if block.is_wall {
        if block.is_reflective {
            ball.vel = -ball.vel;
            bounce_off(ball, &block.rect, false);
        } else {
            bounce_off(ball, &block.rect, true);
        }
        BrickHit::Wall
    } else {
        bounce_off(ball, &block.rect, true);
        if block.is_destructible() {
            block.hit_counter -= 1;
        }
        if block.is_destructible() && block.hit_counter <= 0 {
            block.active = false;
            BrickHit::Destroyed {
                points: block.points,
                bonus: block.bonus.map(|kind| (kind, block.rect)),
            }
        } else {
            block.color = block.color_kind.rgba(false);
            BrickHit::Damaged
        }
    };

    Some(BrickContact {
        index,
        color_kind: block.color_kind,
        hit,
    })
}

/// One-shot speed triggers, re-armed every level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTriggers<'a> {
    pub hit_milestones: &'a [u32],
    pub first_red: bool,
    pub first_orange: bool,
}

/// Count a brick hit and apply the speed-increase policy.
///
/// The speed is multiplied by `increment` when the hit count lands exactly
/// on a milestone, and once each for the first tier A and tier B contact in
/// the level. Any bump renormalizes the velocity. Returns the updated
/// first-contact flags.
pub fn apply_speed_policy(
    ball: &mut Ball,
    color_kind: BrickColor,
    triggers: SpeedTriggers<'_>,
    increment: f32,
) -> (bool, bool) {
    ball.hit_count += 1;

    let mut first_red = triggers.first_red;
    let mut first_orange = triggers.first_orange;
    let mut bumps = 0;

    if triggers.hit_milestones.contains(&ball.hit_count) {
        bumps += 1;
    }
    if first_orange && color_kind == BrickColor::Orange {
        first_orange = false;
        bumps += 1;
    }
    if first_red && color_kind == BrickColor::Red {
        first_red = false;
        bumps += 1;
    }

    if bumps > 0 {
        ball.speed *= increment.powi(bumps);
        ball.renormalize();
        log::debug!(
            "Ball speed -> {:.3} (hits={}, bumps={})",
            ball.speed,
            ball.hit_count,
            bumps
        );
    }

    (first_red, first_orange)
}
