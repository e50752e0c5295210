//! Control signal store
//!
//! Written by the input layer (joystick buttons, keyboard) whenever an event
//! arrives and read once at the start of every tick. Both sides run on the
//! same thread of control, so a plain struct with no locking is enough: a
//! write is fully visible at the next tick boundary. A host that feeds input
//! from another thread must hand over a snapshot per tick instead.

use serde::{Deserialize, Serialize};

/// One logical control of the on-screen joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Left,
    Right,
    /// "up" on the joystick, moves the claw away from the camera
    Forward,
    /// "down" on the joystick, moves the claw toward the camera
    Backward,
    Grab,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Left,
        Control::Right,
        Control::Forward,
        Control::Backward,
        Control::Grab,
    ];

    /// Parse a joystick signal name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Control::Left),
            "right" => Some(Control::Right),
            "up" => Some(Control::Forward),
            "down" => Some(Control::Backward),
            "grab" => Some(Control::Grab),
            _ => None,
        }
    }

    /// Joystick signal name (inverse of `from_name`)
    pub fn name(&self) -> &'static str {
        match self {
            Control::Left => "left",
            Control::Right => "right",
            Control::Forward => "up",
            Control::Backward => "down",
            Control::Grab => "grab",
        }
    }

    /// Keyboard binding (arrows/WASD to steer, space/enter to grab)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Control::Left),
            "ArrowRight" | "d" | "D" => Some(Control::Right),
            "ArrowUp" | "w" | "W" => Some(Control::Forward),
            "ArrowDown" | "s" | "S" => Some(Control::Backward),
            " " | "Enter" => Some(Control::Grab),
            _ => None,
        }
    }
}

/// Sustained (press/hold/release) control flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSignal {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    pub grab: bool,
}

impl ControlSignal {
    /// Record a control event; repeated identical events are idempotent
    pub fn set(&mut self, control: Control, active: bool) {
        match control {
            Control::Left => self.left = active,
            Control::Right => self.right = active,
            Control::Forward => self.forward = active,
            Control::Backward => self.backward = active,
            Control::Grab => self.grab = active,
        }
    }

    /// Record an event by joystick name, returns false for unknown names
    pub fn apply_named(&mut self, name: &str, active: bool) -> bool {
        match Control::from_name(name) {
            Some(control) => {
                self.set(control, active);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Forward => self.forward,
            Control::Backward => self.backward,
            Control::Grab => self.grab,
        }
    }

    /// Release everything (e.g. when the page loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
