//! Simulation module
//!
//! All gameplay logic lives here and runs once per frame:
//! - Controls are read once at the start of the tick
//! - Collision is discrete AABB overlap, no continuous sweeps
//! - Gifts are scanned in stable collection order
//! - No rendering or platform dependencies

pub mod aabb;
pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod controls;
pub mod grab;
pub mod movement;
pub mod scene;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, BoxBody};
pub use camera::Camera;
pub use collision::{first_gift_hit, first_wall_hit, overlaps};
pub use controls::{Control, ControlSignal};
pub use movement::{Motion, resolve, resolve_motion};
pub use state::{Claw, GameEvent, GameState, Gift, GiftId, GrabPhase, Wall};
pub use tick::{TickReport, tick};
