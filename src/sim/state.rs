//! Simulation state and core gameplay types
//!
//! The working set a session owns exclusively: one player, a cloned hazard
//! list, and the cosmetic camera offset. Level data stays read-only.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{
    HAZARD_PHASE_STEP, PATROL_MAX_Y, PATROL_MIN_Y, PLAYER_SIZE, PULSE_VISUAL_SWING,
};

/// Hazard behavior kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    /// Bounces vertically between the patrol band bounds
    Patrol,
    /// Stationary, size oscillates with the phase accumulator
    Pulse,
    /// Neither moves nor pulses
    Static,
}

/// A moving or pulsing obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub kind: HazardKind,
    /// Monotonically increasing oscillation driver
    pub phase: f32,
}

impl Hazard {
    /// Advance one tick: patrol movement plus the shared phase accumulator
    pub fn advance(&mut self) {
        if self.kind == HazardKind::Patrol {
            self.pos += self.vel;
            if self.pos.y > PATROL_MAX_Y || self.pos.y < PATROL_MIN_Y {
                self.vel.y = -self.vel.y;
            }
        }
        self.phase += HAZARD_PHASE_STEP;
    }

    /// Current visual size swing (render-side; zero for non-pulse kinds)
    pub fn pulse_amount(&self) -> f32 {
        match self.kind {
            HazardKind::Pulse => self.phase.sin() * PULSE_VISUAL_SWING,
            _ => 0.0,
        }
    }
}

/// The player-controlled dot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub stability: f32,
    /// True while overlapping at least one hazard (cosmetic)
    pub distorted: bool,
    /// Collision diameter
    pub size: f32,
}

impl Player {
    pub fn spawn(at: Vec2, stability: f32) -> Self {
        Self {
            pos: at,
            vel: Vec2::ZERO,
            stability,
            distorted: false,
            size: PLAYER_SIZE,
        }
    }

    /// Collision half-extent
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }

    /// Stability as shown on the HUD, floored at zero
    pub fn display_stability(&self) -> f32 {
        self.stability.max(0.0)
    }
}

/// Axis-aligned wall rectangle; static for the session's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Wall {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Static description of one level; read-only input to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub width: f32,
    pub height: f32,
    pub start: Vec2,
    pub core_point: Vec2,
    pub initial_stability: f32,
    pub walls: Vec<Wall>,
    /// Hazard templates; cloned into each session's working set
    pub hazards: Vec<Hazard>,
}

/// Live simulation state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    pub player: Player,
    /// Working copy of the level's hazard templates
    pub hazards: Vec<Hazard>,
    /// Cosmetic view offset, fed to the render adapter only
    pub camera_offset: Vec2,
    pub time_ticks: u64,
}

impl SimState {
    /// Fresh working set: player at the start point with full stability,
    /// hazards cloned from their templates.
    pub fn new(level: &LevelConfig) -> Self {
        Self {
            player: Player::spawn(level.start, level.initial_stability),
            hazards: level.hazards.clone(),
            camera_offset: Vec2::ZERO,
            time_ticks: 0,
        }
    }

    /// Immutable snapshot for the render adapter
    pub fn frame(&self) -> Frame {
        Frame {
            player: self.player.clone(),
            hazards: self.hazards.clone(),
            stability: self.player.display_stability(),
            camera_offset: self.camera_offset,
            time_ticks: self.time_ticks,
        }
    }
}

/// Per-tick snapshot handed to the render adapter. Reads are side-effect
/// free; building one never mutates the simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub player: Player,
    pub hazards: Vec<Hazard>,
    /// Display-clamped stability (never negative)
    pub stability: f32,
    pub camera_offset: Vec2,
    pub time_ticks: u64,
}
