//! WebGPU rendering module
//!
//! Draws the arena as shaded boxes from the camera rig's view.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
