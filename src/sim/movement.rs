//! Control signal to claw motion

use glam::Vec3;

use super::controls::ControlSignal;
use crate::consts::MOVE_STEP;

/// Candidate motion for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Sideways offset, shared with the camera
    pub horizontal: Vec3,
    /// Change of the claw's z coordinate (camera does not follow depth)
    pub depth: f32,
}

impl Motion {
    pub const NONE: Self = Self {
        horizontal: Vec3::ZERO,
        depth: 0.0,
    };

    pub fn is_none(&self) -> bool {
        self.horizontal == Vec3::ZERO && self.depth == 0.0
    }
}

/// Resolve the held controls into a motion of `step` units
///
/// Right overrides left when both are held. Forward and backward each apply
/// on their own, so holding both cancels out.
pub fn resolve_motion(signal: &ControlSignal, step: f32) -> Motion {
    let mut horizontal = Vec3::ZERO;
    if signal.left {
        horizontal = Vec3::new(-step, 0.0, 0.0);
    }
    if signal.right {
        horizontal = Vec3::new(step, 0.0, 0.0);
    }

    let mut depth = 0.0;
    if signal.forward {
        depth -= step;
    }
    if signal.backward {
        depth += step;
    }

    Motion { horizontal, depth }
}

/// Resolve with the default per-tick step
pub fn resolve(signal: &ControlSignal) -> Motion {
    resolve_motion(signal, MOVE_STEP)
}
