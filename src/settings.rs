//! Difficulty presets and session policy selection
//!
//! Everything a session needs to know before the first tick: the difficulty
//! tunables and which of the two hazard-contact variants is in force. Both
//! are fixed at construction and never change mid-session.

use serde::{Deserialize, Serialize};

use crate::consts::WALL_BOUNCE_DAMPING;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Acceleration added per held direction key per tick
    pub fn acceleration(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Hard => 0.9,
        }
    }

    /// Velocity retention factor applied each tick (higher is slipperier)
    pub fn friction(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.93,
            Difficulty::Hard => 0.97,
        }
    }

    /// Passive stability drain per tick
    pub fn passive_drain(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.05,
            Difficulty::Hard => 0.15,
        }
    }

    /// Whether the cosmetic camera drift is active
    pub fn camera_drift(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }

    /// Whether standing still bleeds extra stability
    pub fn idle_penalty(&self) -> bool {
        matches!(self, Difficulty::Hard)
    }

    /// Stability cost charged per action-key press edge
    pub fn action_penalty(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Hard => 5.0,
        }
    }
}

/// Which of the two hazard-contact variants a session runs with.
///
/// The two are deliberately distinct designs with their own thresholds;
/// a session picks one at construction and never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactPolicy {
    /// Overlap marks the player distorted and drains stability; non-lethal
    #[default]
    Graze,
    /// Any overlap ends the session immediately
    Lethal,
}

/// Velocity response on the axis a wall hit corrects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WallResponse {
    /// Kill the velocity component
    #[default]
    Stop,
    /// Invert and damp the velocity component
    Bounce,
}

impl WallResponse {
    pub fn apply(&self, axis_vel: f32) -> f32 {
        match self {
            WallResponse::Stop => 0.0,
            WallResponse::Bounce => -axis_vel * WALL_BOUNCE_DAMPING,
        }
    }
}

/// Per-session configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionOptions {
    pub difficulty: Difficulty,
    pub contact_policy: ContactPolicy,
    pub wall_response: WallResponse,
}

impl SessionOptions {
    /// Default policies at the given difficulty
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Default::default()
        }
    }
}
