//! Game state and core simulation types
//!
//! Everything the frame tick mutates lives in `GameState`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::BoxBody;
use super::camera::Camera;
use super::controls::ControlSignal;
use crate::consts::*;

/// Stable handle of a gift in the scene
pub type GiftId = u32;

/// Phase of the claw's scripted vertical motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrabPhase {
    /// Claw parked at its original height, free to start a cycle
    #[default]
    Idle,
    /// Dropping toward the gift bed
    Descending,
    /// Returning to the original height
    Ascending,
}

/// The player's claw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claw {
    pub body: BoxBody,
    /// Parking height, captured once when the scene is built
    pub original_y: f32,
    pub phase: GrabPhase,
    /// Gift taken during the current cycle (cleared when a new cycle starts)
    pub held: Option<GiftId>,
}

impl Claw {
    pub fn new(position: Vec3, half_extent: f32) -> Self {
        Self {
            body: BoxBody::cube(position, half_extent),
            original_y: position.y,
            phase: GrabPhase::Idle,
            held: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// True strictly between a grab trigger and the return to `original_y`
    pub fn grabbing(&self) -> bool {
        self.phase != GrabPhase::Idle
    }

    /// Signed vertical step applied per tick in the current phase
    pub fn vertical_direction(&self) -> f32 {
        match self.phase {
            GrabPhase::Idle => 0.0,
            GrabPhase::Descending => DESCEND_STEP,
            GrabPhase::Ascending => ASCEND_STEP,
        }
    }
}

/// A static arena wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub body: BoxBody,
}

impl Wall {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            body: BoxBody::new(center, half_extents),
        }
    }
}

/// A gift resting in the bed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gift {
    pub id: GiftId,
    pub body: BoxBody,
    /// Palette slot for rendering
    pub color: u32,
}

/// Notifications produced by the tick for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A grab cycle started
    GrabStarted,
    /// The claw took a gift out of the bed
    GiftCaptured { gift: GiftId },
    /// A grab cycle finished and the claw is parked again
    GrabFinished,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the gift bed was scattered with
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub claw: Claw,
    pub walls: Vec<Wall>,
    /// Active gifts in stable scan order
    pub gifts: Vec<Gift>,
    /// Gift count the bed started with
    pub initial_gift_count: usize,
    pub camera: Camera,
    /// Held controls, written by the input layer between ticks
    pub controls: ControlSignal,
    /// Starts at 1, advanced once per capture
    pub reward_counter: u32,
    /// Events produced since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Assemble a state from already-positioned scene parts
    pub fn new(seed: u64, claw: Claw, walls: Vec<Wall>, gifts: Vec<Gift>, camera: Camera) -> Self {
        let initial_gift_count = gifts.len();
        Self {
            seed,
            time_ticks: 0,
            claw,
            walls,
            gifts,
            initial_gift_count,
            camera,
            controls: ControlSignal::default(),
            reward_counter: 1,
            events: Vec::new(),
        }
    }

    /// Number of gifts captured so far
    pub fn captured_count(&self) -> usize {
        self.initial_gift_count - self.gifts.len()
    }

    /// Take the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
