//! Render output
//!
//! The simulation never draws. Each frame the presentation layer asks for a
//! snapshot: a flat list of colored rectangles in draw order plus the HUD
//! values for its text overlay. Both are plain data; `DrawRect` and
//! `Vertex` are `Pod` so they can be uploaded to a GPU buffer as bytes.

pub mod shapes;
pub mod vertex;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, GamePhase, GameState, Rgba};

pub use vertex::Vertex;

/// One drawable rectangle in world units
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawRect {
    /// Bottom-left corner
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl DrawRect {
    fn from_aabb(rect: &Aabb, color: Rgba) -> Self {
        Self {
            position: rect.pos.to_array(),
            size: rect.size.to_array(),
            color,
        }
    }
}

/// Rectangles for the current frame: bricks, falling bonuses, paddle, ball.
///
/// The menu draws nothing. Game over shows the frozen board without the
/// lost ball.
pub fn draw_list(state: &GameState) -> Vec<DrawRect> {
    if state.phase == GamePhase::Menu {
        return Vec::new();
    }

    let mut rects = Vec::with_capacity(state.blocks.len() + state.bonuses.len() + 2);
    rects.extend(
        state
            .blocks
            .iter()
            .filter(|b| b.active)
            .map(|b| DrawRect::from_aabb(&b.rect, b.color)),
    );
    rects.extend(
        state
            .bonuses
            .iter()
            .filter(|b| b.active)
            .map(|b| DrawRect::from_aabb(&b.rect, b.color)),
    );
    rects.push(DrawRect::from_aabb(&state.paddle.rect, state.paddle.color));
    if state.phase == GamePhase::Playing {
        rects.push(DrawRect::from_aabb(&state.ball.rect, state.ball.color));
    }
    rects
}

/// Scalar values for the text overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
}

pub fn hud(state: &GameState) -> Hud {
    Hud {
        score: state.score,
        lives: state.lives,
        level: state.level,
        phase: state.phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    fn started() -> GameState {
        let mut state = GameState::new(21);
        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, 1.0 / 60.0);
        state
    }

    #[test]
    fn test_menu_draws_nothing() {
        let state = GameState::new(20);
        assert!(draw_list(&state).is_empty());
    }

    #[test]
    fn test_draw_order_ends_with_paddle_and_ball() {
        let mut state = started();
        state.blocks[5].active = false;
        let rects = draw_list(&state);

        assert_eq!(rects.len(), state.blocks.len() - 1 + 2);
        let ball = rects[rects.len() - 1];
        let paddle = rects[rects.len() - 2];
        assert_eq!(ball.size, state.ball.rect.size.to_array());
        assert_eq!(paddle.position, state.paddle.rect.pos.to_array());
        assert_eq!(rects[0].color, state.blocks[0].color);
    }

    #[test]
    fn test_game_over_hides_ball() {
        let mut state = started();
        state.phase = GamePhase::GameOver;
        let rects = draw_list(&state);
        assert_eq!(rects.len(), state.blocks.len() + 1);
        assert_eq!(rects[rects.len() - 1].position, state.paddle.rect.pos.to_array());
    }

    #[test]
    fn test_draw_rects_cast_to_bytes() {
        let rects = draw_list(&started());
        let bytes: &[u8] = bytemuck::cast_slice(&rects);
        assert_eq!(bytes.len(), rects.len() * std::mem::size_of::<DrawRect>());
    }

    #[test]
    fn test_hud_serializes() {
        let state = started();
        let json = serde_json::to_string(&hud(&state)).unwrap();
        assert_eq!(json, r#"{"score":0,"lives":3,"level":1,"phase":"Playing"}"#);
    }
}
