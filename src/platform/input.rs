//! Input snapshots and the sources that produce them
//!
//! The simulation never sees keys. A source reports the instantaneous state of
//! the four logical controls once per tick, and that snapshot becomes a
//! `MovementIntent`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::MovementIntent;

/// Physical keys the classic bindings know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    A,
    D,
    W,
    Space,
    Escape,
}

/// Logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
    Quit,
}

/// Key → control table. Several keys may drive the same control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: Vec<(Key, Control)>,
}

impl KeyBindings {
    /// Arrows or WASD to move, Space/Up/W to jump, Escape to quit
    pub fn classic() -> Self {
        Self {
            bindings: vec![
                (Key::Left, Control::MoveLeft),
                (Key::A, Control::MoveLeft),
                (Key::Right, Control::MoveRight),
                (Key::D, Control::MoveRight),
                (Key::Space, Control::Jump),
                (Key::Up, Control::Jump),
                (Key::W, Control::Jump),
                (Key::Escape, Control::Quit),
            ],
        }
    }

    /// Keys bound to `control`, in table order
    pub fn keys_for(&self, control: Control) -> impl Iterator<Item = Key> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, c)| *c == control)
            .map(|(k, _)| *k)
    }

    pub fn control_for(&self, key: Key) -> Option<Control> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::classic()
    }
}

/// Instantaneous state of the logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub quit: bool,
}

impl Controls {
    /// Fold the currently pressed keys through the bindings
    pub fn from_keys(pressed: &[Key], bindings: &KeyBindings) -> Self {
        let mut controls = Self::default();
        for control in pressed.iter().filter_map(|&k| bindings.control_for(k)) {
            match control {
                Control::MoveLeft => controls.left = true,
                Control::MoveRight => controls.right = true,
                Control::Jump => controls.jump = true,
                Control::Quit => controls.quit = true,
            }
        }
        controls
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }

    pub fn intent(&self) -> MovementIntent {
        MovementIntent::new(self.left, self.right, self.jump)
    }
}

impl From<Controls> for MovementIntent {
    fn from(controls: Controls) -> Self {
        controls.intent()
    }
}

/// Anything that can report the controls once per tick
pub trait InputSource {
    fn poll(&mut self) -> Controls;
}

/// Replays a fixed list of snapshots, then reports quit forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<Controls>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Controls>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Hold the same snapshot for `ticks` ticks
    pub fn hold(mut self, controls: Controls, ticks: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(controls, ticks));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Controls {
        self.frames.pop_front().unwrap_or_else(Controls::quit)
    }
}

/// Headless "player": walks back and forth, hops at random, quits after a
/// fixed number of polls. Seeded so runs are reproducible.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    bindings: KeyBindings,
    walk_key: Key,
    walk_ticks_left: u32,
    polls: u64,
    quit_after: u64,
}

impl Autopilot {
    /// Chance of pressing jump on any tick
    const JUMP_CHANCE: f64 = 1.0 / 45.0;

    pub fn new(seed: u64, quit_after: u64, bindings: KeyBindings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            bindings,
            walk_key: Key::Right,
            walk_ticks_left: 0,
            polls: 0,
            quit_after,
        }
    }

    /// Keys the autopilot is holding this tick
    fn pressed_keys(&mut self) -> Vec<Key> {
        if self.polls >= self.quit_after {
            return vec![Key::Escape];
        }

        if self.walk_ticks_left == 0 {
            self.walk_key = if self.walk_key == Key::Right {
                Key::Left
            } else {
                Key::Right
            };
            self.walk_ticks_left = self.rng.random_range(30..150);
        }
        self.walk_ticks_left -= 1;

        let mut keys = vec![self.walk_key];
        if self.rng.random_bool(Self::JUMP_CHANCE) {
            keys.push(Key::Space);
        }
        keys
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Controls {
        let keys = self.pressed_keys();
        self.polls += 1;
        Controls::from_keys(&keys, &self.bindings)
    }
}
