//! Idle/demo mode - steers the claw over the nearest gift and grabs

use glam::Vec3;

use super::controls::ControlSignal;
use super::state::GameState;
use crate::consts::MOVE_STEP;

/// Nearest gift to the claw in the horizontal plane
pub fn nearest_gift(state: &GameState) -> Option<Vec3> {
    let claw = state.claw.position();
    state
        .gifts
        .iter()
        .map(|g| g.body.position)
        .min_by(|a, b| {
            let da = (a.x - claw.x).hypot(a.z - claw.z);
            let db = (b.x - claw.x).hypot(b.z - claw.z);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Controls that move the claw one step closer to `target`, or grab when
/// the claw is above it. Everything is released while a cycle runs.
pub fn steer(state: &GameState, target: Vec3) -> ControlSignal {
    let mut signal = ControlSignal::default();
    if state.claw.grabbing() {
        return signal;
    }

    let claw = state.claw.position();
    let dx = target.x - claw.x;
    let dz = target.z - claw.z;
    let tolerance = MOVE_STEP * 0.5;

    signal.left = dx < -tolerance;
    signal.right = dx > tolerance;
    signal.forward = dz < -tolerance;
    signal.backward = dz > tolerance;
    signal.grab = !(signal.left || signal.right || signal.forward || signal.backward);
    signal
}

/// Controls for demo mode: chase the nearest gift, idle when the bed is empty
pub fn demo_controls(state: &GameState) -> ControlSignal {
    match nearest_gift(state) {
        Some(target) => steer(state, target),
        None => ControlSignal::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::scene;
    use crate::sim::state::GameEvent;
    use crate::sim::tick::tick;

    #[test]
    fn test_demo_mode_captures_gifts() {
        let settings = Settings {
            gift_count: 3,
            ..Default::default()
        };
        let mut state = scene::build(&settings, 2024);
        let mut captures = 0;

        for _ in 0..20_000 {
            state.controls = demo_controls(&state);
            tick(&mut state);
            captures += state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::GiftCaptured { .. }))
                .count();
            if state.gifts.is_empty() {
                break;
            }
        }

        assert_eq!(captures, 3);
        assert!(state.gifts.is_empty());
        assert!(!demo_controls(&state).grab);
    }

    #[test]
    fn test_steer_releases_during_cycle() {
        let mut state = scene::build(&Settings::default(), 1);
        state.claw.phase = crate::sim::GrabPhase::Descending;
        assert_eq!(steer(&state, Vec3::new(3.0, 0.0, 3.0)), ControlSignal::default());
    }
}
