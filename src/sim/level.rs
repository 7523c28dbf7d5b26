//! Built-in level data
//!
//! Levels are plain data consumed read-only by the simulation. The shipped
//! arena is defined here; nothing stops a shell from supplying its own
//! `LevelConfig`.

use glam::Vec2;
use std::f32::consts::PI;

use super::state::{Hazard, HazardKind, LevelConfig, Wall};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, INITIAL_STABILITY};

/// The shipped single-screen arena: a 20-unit boundary, six interior
/// obstacle columns, two patrol hazards and two pulse hazards. Start on the
/// left edge, core point on the right.
pub fn breach_arena() -> LevelConfig {
    LevelConfig {
        width: ARENA_WIDTH,
        height: ARENA_HEIGHT,
        start: Vec2::new(100.0, 400.0),
        core_point: Vec2::new(1100.0, 400.0),
        initial_stability: INITIAL_STABILITY,
        walls: vec![
            // Outer boundary
            Wall::new(0.0, 0.0, ARENA_WIDTH, 20.0),
            Wall::new(0.0, ARENA_HEIGHT - 20.0, ARENA_WIDTH, 20.0),
            Wall::new(0.0, 0.0, 20.0, ARENA_HEIGHT),
            Wall::new(ARENA_WIDTH - 20.0, 0.0, 20.0, ARENA_HEIGHT),
            // Interior obstacles
            Wall::new(250.0, 20.0, 40.0, 300.0),
            Wall::new(250.0, 480.0, 40.0, 300.0),
            Wall::new(500.0, 200.0, 40.0, 400.0),
            Wall::new(750.0, 20.0, 40.0, 350.0),
            Wall::new(750.0, 450.0, 40.0, 350.0),
            Wall::new(950.0, 250.0, 40.0, 300.0),
        ],
        hazards: vec![
            Hazard {
                id: 1,
                pos: Vec2::new(400.0, 100.0),
                size: Vec2::splat(30.0),
                vel: Vec2::new(0.0, 3.0),
                kind: HazardKind::Patrol,
                phase: 0.0,
            },
            Hazard {
                id: 2,
                pos: Vec2::new(650.0, 500.0),
                size: Vec2::splat(30.0),
                vel: Vec2::new(0.0, -4.0),
                kind: HazardKind::Patrol,
                phase: PI,
            },
            Hazard {
                id: 3,
                pos: Vec2::new(850.0, 150.0),
                size: Vec2::splat(40.0),
                vel: Vec2::ZERO,
                kind: HazardKind::Pulse,
                phase: 0.0,
            },
            Hazard {
                id: 4,
                pos: Vec2::new(850.0, 650.0),
                size: Vec2::splat(40.0),
                vel: Vec2::ZERO,
                kind: HazardKind::Pulse,
                phase: PI,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PATROL_MAX_Y, PATROL_MIN_Y};

    #[test]
    fn test_arena_layout() {
        let level = breach_arena();
        assert_eq!(level.walls.len(), 10);
        assert_eq!(level.hazards.len(), 4);
        // Hazard identities are unique and stable
        let mut ids: Vec<u32> = level.hazards.iter().map(|h| h.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_patrol_templates_start_inside_band() {
        let level = breach_arena();
        for hazard in level.hazards.iter().filter(|h| h.kind == HazardKind::Patrol) {
            assert!(hazard.pos.y >= PATROL_MIN_Y && hazard.pos.y <= PATROL_MAX_Y);
            assert_ne!(hazard.vel.y, 0.0);
        }
    }

    #[test]
    fn test_start_and_core_are_clear_of_walls() {
        let level = breach_arena();
        for wall in &level.walls {
            for p in [level.start, level.core_point] {
                let inside = p.x > wall.x
                    && p.x < wall.x + wall.w
                    && p.y > wall.y
                    && p.y < wall.y + wall.h;
                assert!(!inside);
            }
        }
    }
}
