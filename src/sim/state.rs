//! Game state and core simulation types
//!
//! Everything the per-frame update reads or mutates lives in [`GameState`];
//! there is no process-wide mutable state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;
use crate::settings::Tuning;
use crate::vertical_component;

/// RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, waiting for the start command
    Menu,
    /// Simulation running
    Playing,
    /// Run ended, waiting for the return-to-menu command
    GameOver,
}

/// Logical color channel of an entity.
///
/// Drives points and speed triggers independently of the rendered color
/// (a counter brick is drawn darker but still counts as its tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickColor {
    /// Tier A (top rows, most points)
    Red,
    /// Tier B
    Orange,
    /// Tier C
    Green,
    /// Tier D (bottom rows, fewest points)
    Yellow,
    /// Indestructible wall
    Gray,
    /// Reflective wall
    White,
    Paddle,
    Ball,
}

impl BrickColor {
    /// Tier for a grid row: always four bands regardless of row count
    pub fn for_row(row: usize) -> Self {
        let rows_per_tier = (BRICK_ROWS / 4).max(1);
        match row / rows_per_tier {
            0 => BrickColor::Red,
            1 => BrickColor::Orange,
            2 => BrickColor::Green,
            _ => BrickColor::Yellow,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            BrickColor::Red => 7,
            BrickColor::Orange => 5,
            BrickColor::Green => 3,
            BrickColor::Yellow => 1,
            _ => 0,
        }
    }

    pub fn rgba(self, darker: bool) -> Rgba {
        let [r, g, b, a] = match self {
            BrickColor::Red => [1.0, 0.2, 0.2, 1.0],
            BrickColor::Orange => [1.0, 0.6, 0.2, 1.0],
            BrickColor::Green => [0.2, 1.0, 0.2, 1.0],
            BrickColor::Yellow => [1.0, 1.0, 0.2, 1.0],
            BrickColor::Gray => [0.5, 0.5, 0.5, 1.0],
            BrickColor::White => [1.0, 1.0, 1.0, 1.0],
            BrickColor::Paddle => [0.8, 0.8, 0.8, 1.0],
            BrickColor::Ball => [1.0, 1.0, 1.0, 1.0],
        };
        if darker {
            [r * 0.7, g * 0.7, b * 0.7, a]
        } else {
            [r, g, b, a]
        }
    }
}

/// Effect carried by a bonus brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    LifeAdd,
    LifeRemove,
    PaddleWiden,
    PaddleShrink,
    BallSlow,
    BallFast,
    BallStraighten,
    BallAngle,
}

impl BonusKind {
    pub const ALL: [BonusKind; 8] = [
        BonusKind::LifeAdd,
        BonusKind::LifeRemove,
        BonusKind::PaddleWiden,
        BonusKind::PaddleShrink,
        BonusKind::BallSlow,
        BonusKind::BallFast,
        BonusKind::BallStraighten,
        BonusKind::BallAngle,
    ];

    /// Bonus for a type id in 0..8
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn color(self) -> Rgba {
        match self {
            BonusKind::LifeAdd => [0.2, 1.0, 0.2, 1.0],
            BonusKind::LifeRemove => [1.0, 0.2, 0.2, 1.0],
            BonusKind::PaddleWiden => [0.2, 0.8, 1.0, 1.0],
            BonusKind::PaddleShrink => [1.0, 0.5, 0.0, 1.0],
            BonusKind::BallSlow => [1.0, 1.0, 0.2, 1.0],
            BonusKind::BallFast => [0.8, 0.2, 1.0, 1.0],
            BonusKind::BallStraighten => [1.0, 1.0, 1.0, 1.0],
            BonusKind::BallAngle => [0.6, 0.6, 0.6, 1.0],
        }
    }
}

/// World half-extents, recomputed from the viewport aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            half_width: 1.0,
            half_height: 1.0,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Aabb,
    pub color: Rgba,
}

impl Paddle {
    /// Centered paddle at the fixed paddle height
    pub fn new(width: f32) -> Self {
        Self {
            rect: Aabb::new(
                Vec2::new(-width / 2.0, PADDLE_Y),
                Vec2::new(width, PADDLE_HEIGHT),
            ),
            color: BrickColor::Paddle.rgba(false),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.size.x
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.rect.pos.x + self.rect.size.x * 0.5
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.max().y
    }

    /// Keep the paddle inside [-half_width, half_width]
    pub fn clamp_to(&mut self, bounds: ArenaBounds) {
        let max_x = bounds.half_width - self.width();
        self.rect.pos.x = self.rect.pos.x.min(max_x).max(-bounds.half_width);
    }

    /// Slide horizontally by `dx`, stopping at the arena edges
    pub fn slide(&mut self, dx: f32, bounds: ArenaBounds) {
        self.rect.pos.x += dx;
        self.clamp_to(bounds);
    }

    /// Change width keeping the left edge, then re-clamp
    pub fn set_width(&mut self, width: f32, bounds: ArenaBounds) {
        self.rect.size.x = width.max(0.0);
        self.clamp_to(bounds);
    }
}

/// Ball flight state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    /// Glued to the paddle top-center, velocity forced to zero
    Stuck,
    /// Free flight
    Launched,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Aabb,
    pub color: Rgba,
    pub vel: Vec2,
    /// Target speed; `|vel| == speed` whenever launched
    pub speed: f32,
    pub state: BallState,
    /// Bricks struck since the last reset
    pub hit_count: u32,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self {
            rect: Aabb::new(Vec2::ZERO, Vec2::splat(BALL_RADIUS * 2.0)),
            color: BrickColor::Ball.rgba(false),
            vel: Vec2::ZERO,
            speed,
            state: BallState::Stuck,
            hit_count: 0,
        }
    }

    #[inline]
    pub fn is_stuck(&self) -> bool {
        self.state == BallState::Stuck
    }

    /// Glue the ball to the paddle's top-center
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        self.rect.pos = Vec2::new(paddle.center_x() - BALL_RADIUS, paddle.top());
        self.vel = Vec2::ZERO;
    }

    /// Launch from the paddle with a random horizontal sign and a mostly
    /// vertical angle. The resulting speed equals `self.speed`.
    pub fn launch<R: Rng>(&mut self, rng: &mut R) {
        if !self.is_stuck() {
            return;
        }
        let factor = rng.random_range(LAUNCH_MIN_FACTOR..LAUNCH_MAX_FACTOR);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vx = sign * self.speed * factor;
        self.vel = Vec2::new(vx, vertical_component(self.speed, vx));
        self.state = BallState::Launched;
    }

    /// Rescale velocity to `speed`, keeping direction.
    ///
    /// A launched ball with (near) zero velocity is sent straight up.
    pub fn renormalize(&mut self) {
        let current = self.vel.length();
        if current > 1e-4 {
            self.vel = self.vel / current * self.speed;
        } else if !self.is_stuck() {
            self.vel = Vec2::new(0.0, self.speed);
        }
    }
}

/// Sentinel hit counter for bricks that are never destroyed
pub const INDESTRUCTIBLE: i32 = -1;

/// A brick
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Aabb,
    /// Rendered color
    pub color: Rgba,
    /// Logical tier channel
    pub color_kind: BrickColor,
    /// Inactive bricks stay in storage so grid slots are stable
    pub active: bool,
    pub points: u32,
    /// Hits left; [`INDESTRUCTIBLE`] never decrements
    pub hit_counter: i32,
    pub is_wall: bool,
    pub is_reflective: bool,
    /// Bonus dropped on destruction
    pub bonus: Option<BonusKind>,
}

impl Block {
    #[inline]
    pub fn is_destructible(&self) -> bool {
        self.hit_counter != INDESTRUCTIBLE
    }

    /// Returns true if this brick must be destroyed to clear the level
    #[inline]
    pub fn counts_for_clear(&self) -> bool {
        !self.is_wall
    }
}

/// A bonus falling toward the paddle
#[derive(Debug, Clone)]
pub struct FallingBonus {
    pub rect: Aabb,
    pub color: Rgba,
    pub kind: BonusKind,
    pub fall_speed: f32,
    pub active: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the general-purpose generator
    pub seed: u64,
    /// Bonus types and launch angles (brick placement has its own generator)
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub bounds: ArenaBounds,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Brick grid in row-major order
    pub blocks: Vec<Block>,
    pub bonuses: Vec<FallingBonus>,
    pub score: u32,
    pub lives: u32,
    /// 1-based
    pub level: u32,
    /// One-shot speed bump armed for the first tier A contact this level
    pub first_contact_red: bool,
    /// One-shot speed bump armed for the first tier B contact this level
    pub first_contact_orange: bool,
    /// Ceiling contact already halved the paddle
    pub paddle_shrunk: bool,
}

impl GameState {
    /// Create a game in the menu with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let paddle = Paddle::new(PADDLE_WIDTH);
        let mut ball = Ball::new(tuning.initial_ball_speed);
        ball.follow_paddle(&paddle);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.initial_lives,
            tuning,
            phase: GamePhase::Menu,
            bounds: ArenaBounds::default(),
            paddle,
            ball,
            blocks: Vec::new(),
            bonuses: Vec::new(),
            score: 0,
            level: 1,
            first_contact_red: true,
            first_contact_orange: true,
            paddle_shrunk: false,
        }
    }

    /// Put the paddle back in the middle and glue a fresh ball to it.
    ///
    /// `keep_speed` carries the ball's current speed over (life lost);
    /// otherwise it resets to the initial speed (new game or level).
    pub fn reset_paddle_and_ball(&mut self, keep_speed: bool) {
        let width = if self.paddle_shrunk {
            PADDLE_WIDTH * 0.5
        } else {
            PADDLE_WIDTH
        };
        self.paddle = Paddle::new(width);
        self.paddle.clamp_to(self.bounds);

        let speed = if keep_speed {
            self.ball.speed
        } else {
            self.tuning.initial_ball_speed
        };
        self.ball = Ball::new(speed);
        self.ball.follow_paddle(&self.paddle);
    }

    /// Number of bricks still standing that count toward clearing the level
    pub fn remaining_bricks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.active && b.counts_for_clear())
            .count()
    }
}
