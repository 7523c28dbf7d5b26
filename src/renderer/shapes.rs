//! Frame tessellation for 2D primitives
//!
//! Turns a simulation `Frame` into flat triangle lists. The gameplay layers
//! (walls, hazards, player, core beacon) are shifted by the camera offset;
//! the HUD is not. The Hard-mode glitch effect draws from a seeded RNG owned
//! here, never by the simulation, so replaying identical inputs still yields
//! identical gameplay.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::vertex::Vertex;
use crate::consts::{INITIAL_STABILITY, NOMINAL_TICK_RATE};
use crate::settings::Difficulty;
use crate::sim::state::{Frame, Player, Wall};

/// Arena palette
pub const COLOR_WALL: [f32; 4] = [0.10, 0.10, 0.10, 1.0];
pub const COLOR_PLAYER: [f32; 4] = [0.0, 0.94, 1.0, 1.0];
pub const COLOR_DISTORTED: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const COLOR_HAZARD: [f32; 4] = [1.0, 0.24, 0.0, 1.0];
pub const COLOR_CORE: [f32; 4] = [1.0, 0.0, 1.0, 0.35];
pub const COLOR_CORE_DOT: [f32; 4] = [0.95, 0.9, 1.0, 1.0];
pub const COLOR_HUD_TRACK: [f32; 4] = [1.0, 1.0, 1.0, 0.05];

/// Probability per hazard per frame of rendering a glitch sliver (Hard only)
const GLITCH_CHANCE: f32 = 0.02;

/// Stability fraction below which the HUD bar shifts to the hazard color
const HUD_WARN_FRACTION: f32 = 0.3;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Triangle fan approximating a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let tau = std::f32::consts::TAU;

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * tau;
        let theta2 = ((i + 1) as f32 / segments as f32) * tau;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Quad for the player dot, stretched along its velocity
fn player_quad(player: &Player, offset: Vec2) -> Vec<Vertex> {
    let speed = player.vel.length();
    let stretch = 1.0 + speed * 0.05;
    let radius = player.size / 2.0;

    // Basis aligned with travel; squashes across it to conserve area
    let dir = if speed > 1e-3 {
        player.vel / speed
    } else {
        Vec2::X
    };
    let perp = Vec2::new(-dir.y, dir.x);
    let along = dir * radius * stretch;
    let across = perp * (radius / stretch);

    let color = if player.distorted {
        COLOR_DISTORTED
    } else {
        COLOR_PLAYER
    };

    let c = player.pos + offset;
    vec![
        Vertex::new(c.x - along.x - across.x, c.y - along.y - across.y, color),
        Vertex::new(c.x + along.x - across.x, c.y + along.y - across.y, color),
        Vertex::new(c.x + along.x + across.x, c.y + along.y + across.y, color),
        Vertex::new(c.x - along.x - across.x, c.y - along.y - across.y, color),
        Vertex::new(c.x + along.x + across.x, c.y + along.y + across.y, color),
        Vertex::new(c.x - along.x + across.x, c.y - along.y + across.y, color),
    ]
}

/// Stateful frame tessellator for one session
pub struct FrameBuilder {
    difficulty: Difficulty,
    glitch_rng: Pcg32,
}

impl FrameBuilder {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            glitch_rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Tessellate one frame: walls, core beacon, hazards, player, HUD bar.
    /// Walls and the core point come from the level config; everything else
    /// from the frame snapshot.
    pub fn build(&mut self, frame: &Frame, walls: &[Wall], core_point: Vec2) -> Vec<Vertex> {
        let offset = frame.camera_offset;
        let mut out = Vec::new();

        for wall in walls {
            out.extend(rect(
                Vec2::new(wall.x, wall.y) + offset,
                Vec2::new(wall.w, wall.h),
                COLOR_WALL,
            ));
        }

        // Core beacon breathes on its own slow clock
        let t = frame.time_ticks as f32 / NOMINAL_TICK_RATE;
        let beacon = 20.0 + (t * 2.0).sin() * 5.0;
        out.extend(circle(core_point + offset, beacon + 15.0, COLOR_CORE, 32));
        out.extend(circle(core_point + offset, 8.0, COLOR_CORE_DOT, 16));

        for hazard in &frame.hazards {
            if self.difficulty == Difficulty::Hard
                && self.glitch_rng.random::<f32>() < GLITCH_CHANCE
            {
                // Misdirection: a thin sliver where the hazard should be
                out.extend(rect(
                    hazard.pos - Vec2::new(20.0, 20.0) + offset,
                    Vec2::new(60.0, 2.0),
                    COLOR_HAZARD,
                ));
                continue;
            }
            let size = hazard.size + Vec2::splat(hazard.pulse_amount());
            out.extend(rect(hazard.pos - size / 2.0 + offset, size, COLOR_HAZARD));
        }

        out.extend(player_quad(&frame.player, offset));

        // HUD stability bar, unshifted by the camera
        out.extend(rect(
            Vec2::new(40.0, 40.0),
            Vec2::new(300.0, 10.0),
            COLOR_HUD_TRACK,
        ));
        let fraction = (frame.stability / INITIAL_STABILITY).clamp(0.0, 1.0);
        let bar_color = if fraction > HUD_WARN_FRACTION {
            COLOR_PLAYER
        } else {
            COLOR_HAZARD
        };
        out.extend(rect(
            Vec2::new(40.0, 40.0),
            Vec2::new(fraction * 300.0, 10.0),
            bar_color,
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Hazard, HazardKind};

    fn test_frame() -> Frame {
        Frame {
            player: Player::spawn(Vec2::new(100.0, 400.0), 100.0),
            hazards: vec![Hazard {
                id: 1,
                pos: Vec2::new(400.0, 100.0),
                size: Vec2::splat(30.0),
                vel: Vec2::ZERO,
                kind: HazardKind::Pulse,
                phase: 0.0,
            }],
            stability: 100.0,
            camera_offset: Vec2::ZERO,
            time_ticks: 0,
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), COLOR_WALL);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_circle_triangle_count() {
        let verts = circle(Vec2::ZERO, 10.0, COLOR_CORE, 16);
        assert_eq!(verts.len(), 16 * 3);
    }

    #[test]
    fn test_distortion_recolors_player() {
        let mut frame = test_frame();
        let walls: [Wall; 0] = [];
        let core = Vec2::new(1100.0, 400.0);

        let mut builder = FrameBuilder::new(Difficulty::Easy, 1);
        let plain = builder.build(&frame, &walls, core);
        assert!(plain.iter().any(|v| v.color == COLOR_PLAYER));
        assert!(!plain.iter().any(|v| v.color == COLOR_DISTORTED));

        frame.player.distorted = true;
        let distorted = builder.build(&frame, &walls, core);
        assert!(distorted.iter().any(|v| v.color == COLOR_DISTORTED));
    }

    #[test]
    fn test_glitch_is_deterministic_per_seed() {
        let frame = test_frame();
        let walls: [Wall; 0] = [];
        let core = Vec2::new(1100.0, 400.0);

        let mut a = FrameBuilder::new(Difficulty::Hard, 42);
        let mut b = FrameBuilder::new(Difficulty::Hard, 42);
        for _ in 0..50 {
            assert_eq!(a.build(&frame, &walls, core), b.build(&frame, &walls, core));
        }
    }

    #[test]
    fn test_easy_never_glitches() {
        // On Easy the hazard silhouette is always the full quad, so vertex
        // counts are stable frame over frame
        let frame = test_frame();
        let walls: [Wall; 0] = [];
        let core = Vec2::new(1100.0, 400.0);

        let mut builder = FrameBuilder::new(Difficulty::Easy, 7);
        let baseline = builder.build(&frame, &walls, core).len();
        for _ in 0..100 {
            assert_eq!(builder.build(&frame, &walls, core).len(), baseline);
        }
    }

    #[test]
    fn test_pulse_swells_the_silhouette() {
        let mut frame = test_frame();
        let walls: [Wall; 0] = [];
        let core = Vec2::new(1100.0, 400.0);
        let mut builder = FrameBuilder::new(Difficulty::Easy, 7);

        frame.hazards[0].phase = std::f32::consts::FRAC_PI_2;
        let swollen = builder.build(&frame, &walls, core);
        // Hazard quad reaches further left at peak pulse: base half 15 + 5
        let min_x = swollen
            .iter()
            .filter(|v| v.color == COLOR_HAZARD)
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        assert!(min_x < 400.0 - 19.0);
    }
}
