//! Collision world: bounds refresh and overlap queries
//!
//! Everything is a discrete per-tick AABB test. Bodies are refreshed from
//! their current positions right before they are tested.

use super::aabb::BoxBody;
use super::state::{Gift, Wall};

/// Overlap test between two bodies as of their last refresh
#[inline]
pub fn overlaps(a: &BoxBody, b: &BoxBody) -> bool {
    a.bounds().intersects(b.bounds())
}

/// Refresh every wall's bounds
///
/// Walls never move, but they go through the same refresh as dynamic bodies
/// so a wall repositioned by the host is picked up on the next tick.
pub fn refresh_walls(walls: &mut [Wall]) {
    for wall in walls {
        wall.body.refresh();
    }
}

/// Index of the first wall the body overlaps
pub fn first_wall_hit(body: &BoxBody, walls: &[Wall]) -> Option<usize> {
    walls.iter().position(|wall| overlaps(body, &wall.body))
}

/// Index of the first gift (in collection order) the body overlaps
///
/// Read-only scan; the caller removes at most the returned entry afterwards.
pub fn first_gift_hit(body: &BoxBody, gifts: &[Gift]) -> Option<usize> {
    gifts.iter().position(|gift| overlaps(body, &gift.body))
}
