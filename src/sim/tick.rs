//! Frame tick
//!
//! Core game loop, run once per display refresh. The ordering below matters:
//! the vertical grab motion (and any capture it causes) is applied before the
//! wall test, and a wall rollback only ever reverts the sideways and depth
//! axes.

use glam::Vec3;

use super::collision::{first_wall_hit, refresh_walls};
use super::grab;
use super::movement::resolve;
use super::state::{GameEvent, GameState};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Offset actually applied to the camera (zero when blocked)
    pub camera_offset: Vec3,
    /// The tentative move hit a wall and was rolled back
    pub blocked: bool,
    /// Gift captured this tick, if any
    pub captured: Option<u32>,
}

/// Advance the simulation by one frame using the held controls in `state`
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    // Rollback candidate
    let previous = state.claw.body.position;

    let controls = state.controls;
    let motion = resolve(&controls);
    state.claw.body.position.z += motion.depth;
    state.claw.body.position += motion.horizontal;
    let mut offset = motion.horizontal;

    if controls.grab && grab::try_start(&mut state.claw) {
        log::debug!(
            "Grab started at ({:.2}, {:.2})",
            state.claw.body.position.x,
            state.claw.body.position.z
        );
        state.events.push(GameEvent::GrabStarted);
    }

    if state.claw.grabbing() {
        let step = grab::step(&mut state.claw, &mut state.gifts);
        if let Some(gift) = step.captured {
            state.reward_counter += 1;
            log::info!(
                "Captured gift {} ({} left, reward #{})",
                gift.id,
                state.gifts.len(),
                state.reward_counter
            );
            state.events.push(GameEvent::GiftCaptured { gift: gift.id });
            report.captured = Some(gift.id);
        }
        if step.finished {
            log::debug!("Grab finished, claw parked at y={}", state.claw.original_y);
            state.events.push(GameEvent::GrabFinished);
        }
    }

    state.claw.body.refresh();
    refresh_walls(&mut state.walls);

    if let Some(wall) = first_wall_hit(&state.claw.body, &state.walls) {
        log::debug!("Claw blocked by wall {}", wall);
        let pos = &mut state.claw.body.position;
        pos.x = previous.x;
        pos.z = previous.z;
        state.claw.body.refresh();
        offset = Vec3::ZERO;
        report.blocked = true;
    }

    state.camera.follow(offset);
    report.camera_offset = offset;

    report
}
