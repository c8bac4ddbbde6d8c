//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - State is owned by [`GameState`] and passed explicitly
//! - Randomness only comes from explicitly seeded generators
//! - Brick iteration follows storage order

pub mod aabb;
pub mod bonus;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;
pub mod viewport;

pub use aabb::{Aabb, Axis, Penetration, overlaps};
pub use bonus::{apply_bonus, spawn_bonus, update_bonuses};
pub use collision::{
    BrickContact, BrickHit, SpeedTriggers, apply_speed_policy, paddle_deflection,
    resolve_bricks, resolve_paddle, resolve_walls,
};
pub use level::{SpecialColumns, brick_width, generate_level, relayout, special_columns};
pub use state::{
    ArenaBounds, Ball, BallState, Block, BonusKind, BrickColor, FallingBonus, GamePhase,
    GameState, INDESTRUCTIBLE, Paddle, Rgba,
};
pub use tick::{TickInput, TickStatus, advance_level, start_game, tick};
pub use viewport::{bounds_for_viewport, resize};
