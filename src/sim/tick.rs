//! Per-tick simulation advance
//!
//! One call per display refresh. The order is load-bearing and must not be
//! reshuffled: input, friction, integrate, wall collision, hazards, drain,
//! evaluate. Per-tick constants assume the nominal refresh rate; a faster
//! display runs a faster game.

use glam::Vec2;

use super::collision;
use super::state::{LevelConfig, SimState};
use crate::consts::{
    CAMERA_DECAY, CAMERA_DRIFT_AMP_X, CAMERA_DRIFT_AMP_Y, CAMERA_DRIFT_PERIOD_X,
    CAMERA_DRIFT_PERIOD_Y, CAMERA_SMOOTHING, GRAZE_DRAIN, IDLE_DRAIN, IDLE_SPEED_SQ,
    NOMINAL_TICK_RATE,
};
use crate::settings::{ContactPolicy, SessionOptions};

/// Held-key snapshot consumed by one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Action-key press edges recorded since the previous tick
    pub action_presses: u32,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session stays live
    Continuing,
    /// Stability exhausted, or lethal hazard contact
    Failed,
    /// Player arrived at the core point
    Reached,
}

/// Advance the simulation by one tick.
///
/// The session layer latches the first terminal outcome; callers must not
/// invoke this again after `Failed` or `Reached`.
pub fn advance(
    state: &mut SimState,
    level: &LevelConfig,
    options: &SessionOptions,
    input: &TickInput,
) -> TickOutcome {
    state.time_ticks += 1;
    let difficulty = options.difficulty;
    let player = &mut state.player;

    // Action key cost, edge-triggered (Hard charges, Easy is free)
    if input.action_presses > 0 {
        player.stability -= difficulty.action_penalty() * input.action_presses as f32;
    }

    // Held directions accelerate additively; diagonals are not normalized
    let accel = difficulty.acceleration();
    if input.up {
        player.vel.y -= accel;
    }
    if input.down {
        player.vel.y += accel;
    }
    if input.left {
        player.vel.x -= accel;
    }
    if input.right {
        player.vel.x += accel;
    }

    player.vel *= difficulty.friction();
    player.pos += player.vel;

    // Standing still bleeds stability on Hard
    if difficulty.idle_penalty() && player.vel.length_squared() < IDLE_SPEED_SQ {
        player.stability -= IDLE_DRAIN;
    }

    collision::resolve_walls(player, &level.walls, options.wall_response);

    // Hazard motion, phase, and contact
    let mut touching = false;
    for hazard in &mut state.hazards {
        hazard.advance();
        if collision::hazard_contact(player, hazard, options.contact_policy) {
            match options.contact_policy {
                ContactPolicy::Lethal => {
                    log::debug!("lethal contact with hazard {} at tick {}", hazard.id, state.time_ticks);
                    return TickOutcome::Failed;
                }
                ContactPolicy::Graze => {
                    player.stability -= GRAZE_DRAIN;
                    touching = true;
                }
            }
        }
    }
    player.distorted = touching;

    player.stability -= difficulty.passive_drain();

    if player.stability <= 0.0 {
        return TickOutcome::Failed;
    }

    if collision::reached_core(player.pos, level.core_point) {
        return TickOutcome::Reached;
    }

    update_camera(state, difficulty.camera_drift());

    TickOutcome::Continuing
}

/// Cosmetic camera sway, fed to the render adapter only. Driven by the tick
/// counter so the simulation never reads a wall clock.
fn update_camera(state: &mut SimState, drift: bool) {
    if drift {
        let t = state.time_ticks as f32 / NOMINAL_TICK_RATE;
        let target = Vec2::new(
            (t / CAMERA_DRIFT_PERIOD_X).sin() * CAMERA_DRIFT_AMP_X,
            (t / CAMERA_DRIFT_PERIOD_Y).cos() * CAMERA_DRIFT_AMP_Y,
        );
        state.camera_offset += (target - state.camera_offset) * CAMERA_SMOOTHING;
    } else {
        state.camera_offset *= CAMERA_DECAY;
    }
}
