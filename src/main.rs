//! Core Drift entry point
//!
//! Headless reference shell: runs an autopilot session through the built-in
//! arena and reports the outcome. Drives the core exactly the way a
//! rendering shell would: one `advance` per loop iteration, callbacks wired
//! at construction, teardown on the terminal outcome.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use core_drift::renderer::FrameBuilder;
use core_drift::sim::breach_arena;
use core_drift::{Difficulty, InputMap, Key, Session, SessionOptions, TickResult};

/// Waypoints threading the arena's wall gaps, ending on the core point
const ROUTE: [(f32, f32); 8] = [
    (460.0, 400.0),
    (460.0, 150.0),
    (700.0, 150.0),
    (700.0, 400.0),
    (880.0, 400.0),
    (895.0, 200.0),
    (1050.0, 200.0),
    (1100.0, 400.0),
];

/// Distance at which a waypoint counts as passed
const WAYPOINT_RANGE: f32 = 30.0;

/// Safety valve well past the Easy-mode stability budget
const MAX_TICKS: u32 = 4000;

/// Bang-bang steering toward a per-axis target velocity. Returns which of
/// the (positive, negative) direction keys to hold this tick.
fn steer(delta: f32, vel: f32) -> (bool, bool) {
    let desired = (delta * 0.1).clamp(-4.0, 4.0);
    if vel < desired - 0.4 {
        (true, false)
    } else if vel > desired + 0.4 {
        (false, true)
    } else {
        (false, false)
    }
}

/// Feed a steering decision to the input adapter as device events
fn hold(keys: &mut InputMap, key: Key, held: bool) {
    if held {
        keys.key_down(key);
    } else {
        keys.key_up(key);
    }
}

fn main() {
    env_logger::init();

    let level = breach_arena();
    let completed = Rc::new(Cell::new(None::<u64>));
    let failed = Rc::new(Cell::new(false));

    let mut session = Session::new(SessionOptions::new(Difficulty::Easy), level.clone())
        .on_complete({
            let completed = completed.clone();
            move |ms| completed.set(Some(ms))
        })
        .on_fail({
            let failed = failed.clone();
            move || failed.set(true)
        });

    let mut builder = FrameBuilder::new(Difficulty::Easy, 7);
    let mut keys = InputMap::new();
    let mut waypoint = 0usize;

    for _ in 0..MAX_TICKS {
        let frame = session.frame();

        let target = Vec2::from(ROUTE[waypoint]);
        if waypoint + 1 < ROUTE.len()
            && frame.player.pos.distance_squared(target) < WAYPOINT_RANGE * WAYPOINT_RANGE
        {
            waypoint += 1;
            log::debug!("waypoint {waypoint} reached at tick {}", frame.time_ticks);
        }

        let target = Vec2::from(ROUTE[waypoint]);
        let delta = target - frame.player.pos;
        let (right, left) = steer(delta.x, frame.player.vel.x);
        let (down, up) = steer(delta.y, frame.player.vel.y);
        hold(&mut keys, Key::Right, right);
        hold(&mut keys, Key::Left, left);
        hold(&mut keys, Key::Down, down);
        hold(&mut keys, Key::Up, up);
        let input = keys.tick_input();

        match session.advance(&input) {
            TickResult::Continuing => {
                // A rendering shell would upload these; here they only prove
                // the adapter keeps up with the loop
                let _vertices = builder.build(&session.frame(), &level.walls, level.core_point);
            }
            TickResult::Failed | TickResult::Completed(_) => break,
        }
    }

    let frame = session.frame();
    match (completed.get(), failed.get()) {
        (Some(ms), _) => log::info!(
            "run completed in {ms} ms with {:.1} stability left",
            frame.stability,
        ),
        (None, true) => log::info!("run failed after {} ticks", frame.time_ticks),
        _ => log::warn!("autopilot gave up at tick {}", frame.time_ticks),
    }

    match serde_json::to_string(&frame) {
        Ok(json) => log::debug!("final frame: {json}"),
        Err(err) => log::warn!("frame serialization failed: {err}"),
    }

    session.dispose();
}
