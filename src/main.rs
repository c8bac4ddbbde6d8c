//! Brick Bounce headless driver
//!
//! Stands in for a windowed platform layer: loads settings, runs the
//! simulation in demo mode at a fixed 60 Hz, builds the render list every
//! frame and logs the HUD.
//!
//! Usage: `brick-bounce [settings.json] [frames]`

use brick_bounce::consts::FRAME_DT;
use brick_bounce::renderer::{draw_list, hud, shapes};
use brick_bounce::sim::{GamePhase, GameState, TickInput, TickStatus, tick};
use brick_bounce::Settings;

/// Frames simulated when no count is given (one minute at 60 Hz)
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Bounce (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed: u64 = rand::random();
    let mut state = GameState::with_tuning(seed, settings.tuning.clone());
    let mut input = TickInput {
        resize: Some((settings.viewport_width, settings.viewport_height)),
        confirm: true,
        idle_mode: true,
        ..Default::default()
    };

    let mut vertex_count = 0usize;
    for frame in 0..frames {
        // Halfway through, flip the window to portrait
        if frame == frames / 2 {
            input.resize = Some((settings.viewport_height, settings.viewport_width));
        }
        if frame + 1 == frames {
            input.quit = true;
        }

        let status = tick(&mut state, &input, FRAME_DT);
        input.resize = None;
        // Keep the demo going: confirm restarts from the menu after game over
        input.confirm = state.phase != GamePhase::Playing;

        vertex_count = shapes::tessellate(&draw_list(&state)).len();
        if frame % 600 == 0 {
            log::debug!("frame {}: {:?}", frame, hud(&state));
        }

        if status == TickStatus::Quit {
            break;
        }
    }

    match serde_json::to_string(&hud(&state)) {
        Ok(json) => log::info!("Final HUD: {} ({} vertices)", json, vertex_count),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
