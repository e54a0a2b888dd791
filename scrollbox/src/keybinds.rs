use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tuiwin::{Key, Modifiers};

use crate::error::ConfigError;
use crate::extent::Axis;

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

/// How far a keyboard action moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    One,
    HalfPage,
}

/// Keyboard scroll actions, each acting on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Scroll toward the start (`backward`) or end of the axis.
    Step {
        axis: Axis,
        step: Step,
        backward: bool,
    },
    /// Jump to offset zero.
    ToStart(Axis),
    /// Jump to the limit.
    ToEnd(Axis),
}

const ACTION_NAMES: &[(&str, ScrollAction)] = &[
    ("scroll_up_one", step(Axis::Vertical, Step::One, true)),
    ("scroll_down_one", step(Axis::Vertical, Step::One, false)),
    ("scroll_left_one", step(Axis::Horizontal, Step::One, true)),
    ("scroll_right_one", step(Axis::Horizontal, Step::One, false)),
    ("scroll_up_halfpage", step(Axis::Vertical, Step::HalfPage, true)),
    ("scroll_down_halfpage", step(Axis::Vertical, Step::HalfPage, false)),
    ("scroll_left_halfpage", step(Axis::Horizontal, Step::HalfPage, true)),
    ("scroll_right_halfpage", step(Axis::Horizontal, Step::HalfPage, false)),
    ("scroll_to_top", ScrollAction::ToStart(Axis::Vertical)),
    ("scroll_to_bottom", ScrollAction::ToEnd(Axis::Vertical)),
    ("scroll_to_leftmost", ScrollAction::ToStart(Axis::Horizontal)),
    ("scroll_to_rightmost", ScrollAction::ToEnd(Axis::Horizontal)),
];

const fn step(axis: Axis, step: Step, backward: bool) -> ScrollAction {
    ScrollAction::Step {
        axis,
        step,
        backward,
    }
}

impl ScrollAction {
    pub fn axis(&self) -> Axis {
        match *self {
            Self::Step { axis, .. } | Self::ToStart(axis) | Self::ToEnd(axis) => axis,
        }
    }

    /// The action's binding name.
    pub fn name(&self) -> &'static str {
        ACTION_NAMES
            .iter()
            .find(|(_, action)| action == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for ScrollAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrollAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTION_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, action)| *action)
            .ok_or_else(|| ConfigError::UnknownAction(s.to_string()))
    }
}

/// Key bindings from key combos to action names.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    binds: HashMap<KeyCombo, String>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard bindings: arrows step by one, PageUp/PageDown and
    /// Ctrl+Left/Ctrl+Right by half a page, Home/End jump vertically and
    /// Ctrl+Home/Ctrl+End horizontally.
    pub fn standard() -> Self {
        let mut keymap = Self::new();
        keymap.bind(KeyCombo::key(Key::Up), "scroll_up_one");
        keymap.bind(KeyCombo::key(Key::Down), "scroll_down_one");
        keymap.bind(KeyCombo::key(Key::Left), "scroll_left_one");
        keymap.bind(KeyCombo::key(Key::Right), "scroll_right_one");
        keymap.bind(KeyCombo::key(Key::PageUp), "scroll_up_halfpage");
        keymap.bind(KeyCombo::key(Key::PageDown), "scroll_down_halfpage");
        keymap.bind(KeyCombo::key(Key::Left).ctrl(), "scroll_left_halfpage");
        keymap.bind(KeyCombo::key(Key::Right).ctrl(), "scroll_right_halfpage");
        keymap.bind(KeyCombo::key(Key::Home), "scroll_to_top");
        keymap.bind(KeyCombo::key(Key::End), "scroll_to_bottom");
        keymap.bind(KeyCombo::key(Key::Home).ctrl(), "scroll_to_leftmost");
        keymap.bind(KeyCombo::key(Key::End).ctrl(), "scroll_to_rightmost");
        keymap
    }

    /// Bind a key to an action name, replacing any previous binding.
    pub fn bind(&mut self, key: KeyCombo, action: impl Into<String>) {
        self.binds.insert(key, action.into());
    }

    pub fn unbind(&mut self, key: &KeyCombo) {
        self.binds.remove(key);
    }

    /// Look up the action name bound to a key
    pub fn get(&self, key: &KeyCombo) -> Option<&str> {
        self.binds.get(key).map(String::as_str)
    }

    /// Resolve a key to its action.
    pub fn resolve(&self, key: &KeyCombo) -> Option<ScrollAction> {
        self.get(key).and_then(|name| name.parse().ok())
    }

    /// Check that every bound name is a known action.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.binds.values() {
            name.parse::<ScrollAction>()?;
        }
        Ok(())
    }

    /// Merge another keymap into this one; its bindings win.
    pub fn merge(&mut self, other: Keymap) {
        self.binds.extend(other.binds);
    }
}
