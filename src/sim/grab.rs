//! Grab cycle state machine
//!
//! Idle -> Descending on a grab request, Descending -> Ascending once the
//! claw reaches the floor threshold, Ascending -> Idle once it is back at its
//! parking height. A cycle always runs to completion once started.

use super::collision::first_gift_hit;
use super::state::{Claw, Gift, GrabPhase};
use crate::consts::GRAB_FLOOR_Y;

/// Outcome of one grab step
#[derive(Debug, Default)]
pub struct GrabStep {
    /// Gift removed from the bed this step
    pub captured: Option<Gift>,
    /// The claw parked again this step
    pub finished: bool,
}

/// Start a cycle if the claw is idle
///
/// Returns false (and changes nothing) while a cycle is already running.
pub fn try_start(claw: &mut Claw) -> bool {
    if claw.phase != GrabPhase::Idle {
        return false;
    }
    claw.phase = GrabPhase::Descending;
    claw.held = None;
    true
}

/// Advance the running cycle by one tick
///
/// Moves the claw vertically, then scans the bed in collection order. The
/// first overlapping gift is removed once the scan is done; a claw that
/// already holds a gift does not scan again until the next cycle.
pub fn step(claw: &mut Claw, gifts: &mut Vec<Gift>) -> GrabStep {
    let mut out = GrabStep::default();
    if claw.phase == GrabPhase::Idle {
        return out;
    }

    claw.body.position.y += claw.vertical_direction();
    claw.body.refresh();

    if claw.held.is_none() {
        if let Some(index) = first_gift_hit(&claw.body, gifts) {
            let gift = gifts.remove(index);
            claw.held = Some(gift.id);
            out.captured = Some(gift);
        }
    }

    let y = claw.body.position.y;
    if claw.phase == GrabPhase::Descending && y <= GRAB_FLOOR_Y {
        claw.phase = GrabPhase::Ascending;
    }
    if claw.phase == GrabPhase::Ascending && y >= claw.original_y {
        claw.body.position.y = claw.original_y;
        claw.body.refresh();
        claw.phase = GrabPhase::Idle;
        out.finished = true;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::aabb::BoxBody;
    use glam::Vec3;

    fn claw() -> Claw {
        Claw::new(Vec3::new(0.0, CLAW_START_Y, 0.0), CLAW_HALF_EXTENT)
    }

    fn gift(id: u32, x: f32) -> Gift {
        Gift {
            id,
            body: BoxBody::cube(Vec3::new(x, GIFT_HALF_EXTENT, 0.0), GIFT_HALF_EXTENT),
            color: 0,
        }
    }

    #[test]
    fn test_start_is_guarded() {
        let mut claw = claw();
        assert!(try_start(&mut claw));
        assert_eq!(claw.phase, GrabPhase::Descending);
        assert_eq!(claw.vertical_direction(), DESCEND_STEP);

        step(&mut claw, &mut Vec::new());
        let y = claw.position().y;
        assert!(!try_start(&mut claw));
        assert_eq!(claw.phase, GrabPhase::Descending);
        assert_eq!(claw.position().y, y);
    }

    #[test]
    fn test_idle_step_does_nothing() {
        let mut claw = claw();
        let out = step(&mut claw, &mut Vec::new());
        assert!(out.captured.is_none() && !out.finished);
        assert_eq!(claw.position().y, CLAW_START_Y);
    }

    #[test]
    fn test_turns_around_at_floor_threshold() {
        let mut claw = claw();
        try_start(&mut claw);
        claw.body.position.y = GRAB_FLOOR_Y;

        step(&mut claw, &mut Vec::new());
        assert_eq!(claw.phase, GrabPhase::Ascending);
        assert_eq!(claw.vertical_direction(), ASCEND_STEP);
    }

    #[test]
    fn test_full_cycle_snaps_to_original_height() {
        let mut claw = claw();
        let mut gifts = Vec::new();
        try_start(&mut claw);

        let mut saw_ascent = false;
        let mut ticks = 0;
        loop {
            let before = claw.phase;
            let out = step(&mut claw, &mut gifts);
            ticks += 1;
            match before {
                GrabPhase::Descending if claw.phase == GrabPhase::Descending => {
                    assert!(claw.position().y > GRAB_FLOOR_Y)
                }
                GrabPhase::Ascending => saw_ascent = true,
                _ => {}
            }
            if out.finished {
                break;
            }
            assert!(ticks < 1000, "grab cycle never finished");
        }

        assert!(saw_ascent);
        assert_eq!(claw.position().y, claw.original_y);
        assert!(!claw.grabbing());
        assert_eq!(claw.body.bounds().center().y, claw.original_y);
    }

    #[test]
    fn test_one_gift_per_cycle() {
        let mut claw = claw();
        // Two gifts under the claw, both reachable
        let mut gifts = vec![gift(1, 0.2), gift(2, -0.2), gift(3, 4.0)];
        try_start(&mut claw);

        let mut captured = Vec::new();
        loop {
            let out = step(&mut claw, &mut gifts);
            if let Some(g) = out.captured {
                captured.push(g.id);
            }
            if out.finished {
                break;
            }
        }

        assert_eq!(captured, vec![1]);
        assert_eq!(gifts.iter().map(|g| g.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(claw.held, Some(1));

        // The next cycle picks up the remaining gift under the claw
        try_start(&mut claw);
        assert_eq!(claw.held, None);
        let mut second = None;
        while second.is_none() {
            second = step(&mut claw, &mut gifts).captured;
        }
        assert_eq!(second.map(|g| g.id), Some(2));
    }
}
