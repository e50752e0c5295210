//! Scene construction
//!
//! Builds the arena walls, the claw, the gift bed and the camera. Gift
//! placement is seeded so the same seed always produces the same bed.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::aabb::BoxBody;
use super::camera::Camera;
use super::state::{Claw, GameState, Gift, Wall};
use crate::consts::*;
use crate::settings::Settings;

/// Number of gift colors in the renderer palette
pub const GIFT_PALETTE_SIZE: u32 = 6;

/// Placement attempts per gift before giving up on a crowded bed
const MAX_PLACEMENT_ATTEMPTS: u32 = 200;

/// Camera starting position (above and in front of the arena)
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 9.0, 11.0);
/// Point the camera initially looks at
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// Four walls enclosing the square play field
pub fn build_walls() -> Vec<Wall> {
    let half_h = WALL_HEIGHT / 2.0;
    let half_t = WALL_THICKNESS / 2.0;
    let offset = ARENA_HALF_WIDTH + half_t;
    let span = ARENA_HALF_WIDTH + WALL_THICKNESS;

    vec![
        // Left / right
        Wall::new(Vec3::new(-offset, half_h, 0.0), Vec3::new(half_t, half_h, span)),
        Wall::new(Vec3::new(offset, half_h, 0.0), Vec3::new(half_t, half_h, span)),
        // Back / front (front is the glass pane facing the camera)
        Wall::new(Vec3::new(0.0, half_h, -offset), Vec3::new(span, half_h, half_t)),
        Wall::new(Vec3::new(0.0, half_h, offset), Vec3::new(span, half_h, half_t)),
    ]
}

/// Decorative floor slab (rendered, never collided with)
pub fn floor() -> BoxBody {
    BoxBody::new(
        Vec3::new(0.0, -0.05, 0.0),
        Vec3::new(ARENA_HALF_WIDTH, 0.05, ARENA_HALF_WIDTH),
    )
}

/// Scatter `count` gifts on the floor without overlaps
///
/// A crowded bed may end up with fewer gifts than requested.
pub fn scatter_gifts(count: usize, seed: u64) -> Vec<Gift> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let limit = ARENA_HALF_WIDTH - GIFT_HALF_EXTENT - GIFT_WALL_MARGIN;
    let mut gifts: Vec<Gift> = Vec::with_capacity(count);

    for id in 1..=count as u32 {
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = Vec3::new(
                rng.random_range(-limit..=limit),
                GIFT_HALF_EXTENT,
                rng.random_range(-limit..=limit),
            );
            let body = BoxBody::cube(pos, GIFT_HALF_EXTENT);
            if gifts.iter().all(|g| !body.bounds().intersects(g.body.bounds())) {
                gifts.push(Gift {
                    id,
                    body,
                    color: rng.random_range(0..GIFT_PALETTE_SIZE),
                });
                placed = true;
                break;
            }
        }
        if !placed {
            log::warn!("Gift bed full, placed {} of {} gifts", gifts.len(), count);
            break;
        }
    }

    gifts
}

/// Build the full starting state
pub fn build(settings: &Settings, seed: u64) -> GameState {
    let claw = Claw::new(Vec3::new(0.0, CLAW_START_Y, 0.0), CLAW_HALF_EXTENT);
    let walls = build_walls();
    let gifts = scatter_gifts(settings.gift_count, seed);
    let camera = Camera::looking_at(
        CAMERA_START,
        CAMERA_LOOK_AT,
        settings.camera_fov_degrees.to_radians(),
    );

    log::info!(
        "Scene built: {} walls, {} gifts (seed {})",
        walls.len(),
        gifts.len(),
        seed
    );

    GameState::new(seed, claw, walls, gifts, camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::{first_wall_hit, overlaps};

    #[test]
    fn test_default_bed_has_twenty_gifts() {
        let state = build(&Settings::default(), 1234);
        assert_eq!(state.gifts.len(), DEFAULT_GIFT_COUNT);
        assert_eq!(state.initial_gift_count, DEFAULT_GIFT_COUNT);
        assert_eq!(state.reward_counter, 1);
        assert_eq!(state.claw.original_y, CLAW_START_Y);
    }

    #[test]
    fn test_gifts_are_unique_and_apart() {
        let gifts = scatter_gifts(DEFAULT_GIFT_COUNT, 99);
        let walls = build_walls();
        for (i, a) in gifts.iter().enumerate() {
            assert!(first_wall_hit(&a.body, &walls).is_none());
            for b in &gifts[i + 1..] {
                assert_ne!(a.id, b.id);
                assert!(!overlaps(&a.body, &b.body));
            }
        }
    }

    #[test]
    fn test_same_seed_same_bed() {
        let a = scatter_gifts(10, 5);
        let b = scatter_gifts(10, 5);
        let pa: Vec<_> = a.iter().map(|g| g.body.position).collect();
        let pb: Vec<_> = b.iter().map(|g| g.body.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_claw_starts_clear_of_walls() {
        let state = build(&Settings::default(), 0);
        assert!(first_wall_hit(&state.claw.body, &state.walls).is_none());
    }

    #[test]
    fn test_overfull_bed_is_truncated() {
        let gifts = scatter_gifts(10_000, 3);
        assert!(gifts.len() < 10_000);
        assert!(!gifts.is_empty());
    }
}
