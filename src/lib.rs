//! Claw Machine - A 3D arcade claw game
//!
//! Core modules:
//! - `sim`: Frame-tick simulation (movement, AABB collisions, grab cycle, camera)
//! - `renderer`: WebGPU rendering pipeline
//! - `reward`: Reward reveal overlay and gift catalog
//! - `settings`: Player preferences and scene configuration

pub mod renderer;
pub mod reward;
pub mod settings;
pub mod sim;

pub use reward::{GiftCatalog, RewardOverlay};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Horizontal/depth step per tick while a direction is held (world units)
    pub const MOVE_STEP: f32 = 0.1;
    /// Vertical step per tick while the claw descends (negative = down)
    pub const DESCEND_STEP: f32 = -0.1;
    /// Vertical step per tick while the claw ascends (slower than descent)
    pub const ASCEND_STEP: f32 = 0.05;
    /// Claw height at which descent turns into ascent
    pub const GRAB_FLOOR_Y: f32 = 0.5;

    /// Claw defaults
    pub const CLAW_START_Y: f32 = 5.0;
    pub const CLAW_HALF_EXTENT: f32 = 0.5;

    /// Arena dimensions - square play field centered on the origin
    pub const ARENA_HALF_WIDTH: f32 = 5.0;
    pub const WALL_THICKNESS: f32 = 1.0;
    pub const WALL_HEIGHT: f32 = 7.0;

    /// Gift defaults
    pub const DEFAULT_GIFT_COUNT: usize = 20;
    pub const GIFT_HALF_EXTENT: f32 = 0.4;
    /// Minimum clearance between a gift and the arena walls
    pub const GIFT_WALL_MARGIN: f32 = 0.2;

    /// Reveal index at which the special (terminal) reward appears
    pub const SPECIAL_REWARD_INDEX: usize = 3;
}
