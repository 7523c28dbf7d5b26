//! Input adapter
//!
//! Translates raw device key events into the held-key snapshot the
//! simulation consumes each tick. Action presses are edge-counted, so OS
//! key repeat while holding the key never fires twice, and a press-release
//! pair landing between two ticks is still delivered to the next tick.

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Action,
}

impl Key {
    /// Map a device key identifier (`KeyboardEvent.code` style) to a game
    /// key. Unknown identifiers map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Key::Up),
            "ArrowDown" | "KeyS" => Some(Key::Down),
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "Space" => Some(Key::Action),
            _ => None,
        }
    }
}

/// Held-key state between ticks. Last writer wins within a tick.
#[derive(Debug, Default)]
pub struct InputMap {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    action: bool,
    action_presses: u32,
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event. Repeats while already held count as held,
    /// not as new press edges.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Action => {
                if !self.action {
                    self.action_presses += 1;
                }
                self.action = true;
            }
        }
    }

    /// Record a key-up event
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.up = false,
            Key::Down => self.down = false,
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Action => self.action = false,
        }
    }

    /// Convenience for raw device identifiers; unknown codes are ignored
    pub fn code_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.key_down(key);
        }
    }

    pub fn code_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.key_up(key);
        }
    }

    /// Snapshot for one tick, draining the recorded action press edges
    pub fn tick_input(&mut self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            action_presses: std::mem::take(&mut self.action_presses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        assert_eq!(Key::from_code("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_code("KeyW"), Some(Key::Up));
        assert_eq!(Key::from_code("KeyD"), Some(Key::Right));
        assert_eq!(Key::from_code("Space"), Some(Key::Action));
        assert_eq!(Key::from_code("KeyQ"), None);
    }

    #[test]
    fn test_held_keys_snapshot() {
        let mut map = InputMap::new();
        map.code_down("ArrowRight");
        map.code_down("KeyW");
        let input = map.tick_input();
        assert!(input.right && input.up);
        assert!(!input.left && !input.down);

        map.code_up("ArrowRight");
        let input = map.tick_input();
        assert!(!input.right && input.up);
    }

    #[test]
    fn test_key_repeat_is_one_press_edge() {
        let mut map = InputMap::new();
        // OS key repeat delivers key-down over and over while held
        map.key_down(Key::Action);
        map.key_down(Key::Action);
        map.key_down(Key::Action);
        assert_eq!(map.tick_input().action_presses, 1);
        // Still held, no new edge
        assert_eq!(map.tick_input().action_presses, 0);
    }

    #[test]
    fn test_press_release_between_ticks_is_not_dropped() {
        let mut map = InputMap::new();
        map.key_down(Key::Action);
        map.key_up(Key::Action);
        let input = map.tick_input();
        assert_eq!(input.action_presses, 1);
        // A fresh press after release is a second edge
        map.key_down(Key::Action);
        assert_eq!(map.tick_input().action_presses, 1);
    }

    #[test]
    fn test_snapshot_drains_edges_only() {
        let mut map = InputMap::new();
        map.key_down(Key::Left);
        map.key_down(Key::Action);
        assert_eq!(map.tick_input().action_presses, 1);
        // Held state persists across snapshots; edges do not
        let input = map.tick_input();
        assert!(input.left);
        assert_eq!(input.action_presses, 0);
    }
}
