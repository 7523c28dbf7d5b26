//! Core Drift - a single-screen arena-crossing arcade game
//!
//! A player-controlled dot has to cross a hazard-filled arena and reach the
//! core point before its stability meter runs out.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, hazards, win/fail)
//! - `session`: One gameplay run, terminal callbacks, elapsed clock
//! - `input`: Device-key to held-key-set adapter
//! - `renderer`: Backend-agnostic frame tessellation
//! - `settings`: Difficulty presets and collision-policy selection

pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use input::{InputMap, Key};
pub use session::{Session, TickResult};
pub use settings::{ContactPolicy, Difficulty, SessionOptions, WallResponse};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Player collision diameter
    pub const PLAYER_SIZE: f32 = 24.0;
    /// Stability meter value at session start
    pub const INITIAL_STABILITY: f32 = 100.0;

    /// Arrival radius around the core point
    pub const CORE_RADIUS: f32 = 40.0;

    /// Vertical band patrol hazards bounce between
    pub const PATROL_MIN_Y: f32 = 100.0;
    pub const PATROL_MAX_Y: f32 = 700.0;
    /// Phase accumulator step per tick (every hazard kind)
    pub const HAZARD_PHASE_STEP: f32 = 0.05;
    /// Visual size swing of a pulse hazard at phase peak
    pub const PULSE_VISUAL_SWING: f32 = 10.0;
    /// Collision-radius swing of a pulse hazard under the lethal policy
    pub const PULSE_RADIUS_SWING: f32 = 5.0;

    /// Stability lost per tick per overlapping hazard under the graze policy
    pub const GRAZE_DRAIN: f32 = 2.0;
    /// Divisor turning the combined player+hazard size into the graze range
    pub const GRAZE_RANGE_DIVISOR: f32 = 1.5;

    /// Squared-speed threshold below which Hard mode charges the idle penalty
    pub const IDLE_SPEED_SQ: f32 = 0.1;
    /// Extra stability drain per idle tick (Hard)
    pub const IDLE_DRAIN: f32 = 0.1;

    /// Velocity retention when a wall hit uses the bounce response
    pub const WALL_BOUNCE_DAMPING: f32 = 0.2;

    /// Nominal tick rate the per-tick constants are tuned for
    pub const NOMINAL_TICK_RATE: f32 = 60.0;

    /// Camera drift amplitudes and periods (Hard mode, cosmetic)
    pub const CAMERA_DRIFT_AMP_X: f32 = 10.0;
    pub const CAMERA_DRIFT_AMP_Y: f32 = 8.0;
    pub const CAMERA_DRIFT_PERIOD_X: f32 = 1.0;
    pub const CAMERA_DRIFT_PERIOD_Y: f32 = 1.5;
    /// Exponential smoothing factor toward the drift target
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// Per-tick decay factor while drift is disabled
    pub const CAMERA_DECAY: f32 = 0.9;
}
