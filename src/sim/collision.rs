//! Collision detection and response for the arena
//!
//! Wall collisions are AABB overlap tests resolved by pushing the player out
//! along the axis of smaller penetration. Hazard and core-point checks are
//! squared-distance proximity tests; the hazard threshold depends on which
//! contact policy the session runs with.

use glam::Vec2;

use super::state::{Hazard, HazardKind, Player, Wall};
use crate::consts::{CORE_RADIUS, GRAZE_RANGE_DIVISOR, PULSE_RADIUS_SWING};
use crate::settings::{ContactPolicy, WallResponse};

/// True if the player's AABB (centered on `pos`, side `2 * half`) overlaps
/// the wall rectangle.
pub fn player_overlaps_wall(pos: Vec2, half: f32, wall: &Wall) -> bool {
    pos.x + half > wall.x
        && pos.x - half < wall.x + wall.w
        && pos.y + half > wall.y
        && pos.y - half < wall.y + wall.h
}

/// Push the player out of a single wall.
///
/// Penetration on each axis is the signed distance from the nearer player
/// edge to the nearer wall edge, picked by which side of the wall's center
/// the player sits on. Only the axis with the smaller |penetration| is
/// corrected, and only that axis's velocity receives the wall response.
pub fn resolve_wall(player: &mut Player, wall: &Wall, response: WallResponse) -> bool {
    let half = player.half();
    if !player_overlaps_wall(player.pos, half, wall) {
        return false;
    }

    let p = player.pos;
    let dx = if p.x < wall.x + wall.w / 2.0 {
        wall.x - (p.x + half)
    } else {
        (wall.x + wall.w) - (p.x - half)
    };
    let dy = if p.y < wall.y + wall.h / 2.0 {
        wall.y - (p.y + half)
    } else {
        (wall.y + wall.h) - (p.y - half)
    };

    if dx.abs() < dy.abs() {
        player.pos.x += dx;
        player.vel.x = response.apply(player.vel.x);
    } else {
        player.pos.y += dy;
        player.vel.y = response.apply(player.vel.y);
    }
    true
}

/// Resolve every wall in iteration order. No global solver; the level
/// geometry keeps walls separated by more than the player size, so
/// independent per-wall resolution cannot ping-pong.
pub fn resolve_walls(player: &mut Player, walls: &[Wall], response: WallResponse) {
    for wall in walls {
        resolve_wall(player, wall, response);
    }
}

/// Contact threshold between player and hazard under the given policy.
///
/// Graze uses a forgiving range (combined size over 1.5); lethal uses the
/// sum of half-sizes, with pulse hazards breathing by `sin(phase)`.
pub fn contact_range(player: &Player, hazard: &Hazard, policy: ContactPolicy) -> f32 {
    match policy {
        ContactPolicy::Graze => (player.size + hazard.size.x) / GRAZE_RANGE_DIVISOR,
        ContactPolicy::Lethal => {
            let mut range = (player.size + hazard.size.x) / 2.0;
            if hazard.kind == HazardKind::Pulse {
                range += hazard.phase.sin() * PULSE_RADIUS_SWING;
            }
            range
        }
    }
}

/// True if the player is inside the hazard's contact range
pub fn hazard_contact(player: &Player, hazard: &Hazard, policy: ContactPolicy) -> bool {
    let range = contact_range(player, hazard, policy);
    player.pos.distance_squared(hazard.pos) < range * range
}

/// True once the player is within arrival distance of the core point
pub fn reached_core(pos: Vec2, core_point: Vec2) -> bool {
    pos.distance_squared(core_point) < CORE_RADIUS * CORE_RADIUS
}
