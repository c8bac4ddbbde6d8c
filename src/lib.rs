//! Brick Bounce - an arcade brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: Simulation (collisions, level layout, bonuses, game state machine)
//! - `renderer`: Turns a game state into drawable rectangles and HUD values
//! - `settings`: Data-driven game balance loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError, Tuning};

/// Game configuration constants
///
/// World units: the shorter screen dimension always spans [-1, 1].
pub mod consts {
    /// Nominal frame timestep used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta integrated in one step (stalled frames are clamped)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Brick grid
    pub const BRICK_ROWS: usize = 8;
    pub const BRICKS_PER_ROW: usize = 14;
    /// Y of the bottom edge of the top row
    pub const BRICK_START_Y: f32 = 0.85;
    pub const BRICK_HEIGHT: f32 = 0.06;
    pub const BRICK_GAP: f32 = 0.01;
    /// Seed for special-brick column placement (same layout every level)
    pub const LAYOUT_SEED: u64 = 42;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.25;
    pub const PADDLE_HEIGHT: f32 = 0.04;
    pub const PADDLE_Y: f32 = -0.9;
    pub const PADDLE_SPEED: f32 = 1.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.02;
    pub const INITIAL_BALL_SPEED: f32 = 1.0;
    /// Multiplicative speed bump (hit-count milestones, first tier contact)
    pub const BALL_SPEED_INCREMENT: f32 = 1.19;
    /// Launch horizontal fraction of speed is drawn from [MIN, MAX)
    pub const LAUNCH_MIN_FACTOR: f32 = 0.2;
    pub const LAUNCH_MAX_FACTOR: f32 = 0.7;
    /// Gap left between ball and brick face after a bounce
    pub const BOUNCE_EPSILON: f32 = 0.001;

    /// Paddle deflection: |offset| below this uses the shallow gain
    pub const DEFLECT_ZONE: f32 = 0.5;
    pub const DEFLECT_SHALLOW_GAIN: f32 = 0.2;
    pub const DEFLECT_STEEP_GAIN: f32 = 0.8;

    /// Lives
    pub const INITIAL_LIVES: u32 = 3;
    pub const MAX_LIVES: u32 = 5;

    /// Falling bonuses
    pub const BONUS_SIZE: f32 = BALL_RADIUS * 1.5;
    pub const BONUS_FALL_SPEED: f32 = 1.0;
}

/// Vertical speed that keeps `|(vx, vy)| == speed`, always non-negative.
///
/// The radicand is clamped so a horizontal component larger than `speed`
/// yields zero instead of NaN.
#[inline]
pub fn vertical_component(speed: f32, vx: f32) -> f32 {
    (speed * speed - vx * vx).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_component_preserves_magnitude() {
        let vy = vertical_component(1.0, 0.8);
        assert!((vy - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_component_clamps_radicand() {
        assert_eq!(vertical_component(1.0, 1.5), 0.0);
        assert!(!vertical_component(0.0, 0.1).is_nan());
    }
}
