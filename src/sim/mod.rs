//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One advance per display refresh, strictly sequential
//! - No RNG (cosmetic randomness belongs to the render adapter)
//! - No rendering, clock, or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use level::breach_arena;
pub use state::{Frame, Hazard, HazardKind, LevelConfig, Player, SimState, Wall};
pub use tick::{TickInput, TickOutcome, advance};
