//! Viewport adapter
//!
//! Maps a window size in pixels onto arena half-extents. The shorter screen
//! side always spans 2 world units; the longer side stretches with the aspect
//! ratio so nothing is distorted.

use super::level;
use super::state::{ArenaBounds, GameState};

/// Arena half-extents for a viewport of `width x height` pixels.
///
/// A zero height is treated as 1 so the aspect ratio stays finite.
pub fn bounds_for_viewport(width: u32, height: u32) -> ArenaBounds {
    let height = height.max(1);
    let aspect = width as f32 / height as f32;

    if width >= height {
        ArenaBounds {
            half_width: aspect,
            half_height: 1.0,
        }
    } else if aspect > 0.0 {
        ArenaBounds {
            half_width: 1.0,
            half_height: 1.0 / aspect,
        }
    } else {
        ArenaBounds::default()
    }
}

/// Apply a new viewport size to a running or idle game.
///
/// Bricks are re-laid out in place, the paddle is pulled back inside the
/// new edges and a stuck ball follows it.
pub fn resize(state: &mut GameState, width: u32, height: u32) {
    state.bounds = bounds_for_viewport(width, height);

    if !state.blocks.is_empty() {
        level::relayout(&mut state.blocks, state.bounds.half_width);
    }

    state.paddle.clamp_to(state.bounds);
    if state.ball.is_stuck() {
        state.ball.follow_paddle(&state.paddle);
    }

    log::info!(
        "Viewport resized to {}x{} (half extents {:.3} x {:.3})",
        width,
        height,
        state.bounds.half_width,
        state.bounds.half_height
    );
}
