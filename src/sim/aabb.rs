//! Axis-aligned bounding boxes and box-shaped bodies
//!
//! Every collidable thing in the arena (claw, walls, gifts) is a box whose
//! bounds are derived from its world position.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Empty box (min > max on every axis, overlaps nothing)
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half_extents` along each axis
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive interval overlap on all three axes
    ///
    /// Boxes that merely touch on a face count as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// A box-shaped body with a cached world-space bounding box
///
/// `bounds` is only as fresh as the last `refresh()`; callers that move the
/// body must refresh before testing overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxBody {
    pub position: Vec3,
    pub half_extents: Vec3,
    bounds: Aabb,
}

impl BoxBody {
    pub fn new(position: Vec3, half_extents: Vec3) -> Self {
        let mut body = Self {
            position,
            half_extents,
            bounds: Aabb::EMPTY,
        };
        body.refresh();
        body
    }

    /// Cube-shaped body
    pub fn cube(position: Vec3, half_extent: f32) -> Self {
        Self::new(position, Vec3::splat(half_extent))
    }

    /// Recompute the cached bounds from the current position
    pub fn refresh(&mut self) {
        self.bounds = Aabb::from_center(self.position, self.half_extents);
    }

    /// Bounds as of the last refresh
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_faces_overlap() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&b));

        let c = Aabb::from_center(Vec3::new(1.01, 0.0, 0.0), Vec3::splat(0.5));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_overlap_requires_all_axes() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        // Overlaps on x and z, separated on y
        let b = Aabb::from_center(Vec3::new(0.5, 3.0, 0.5), Vec3::splat(1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_empty_overlaps_nothing() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(100.0));
        assert!(Aabb::EMPTY.is_empty());
        assert!(!Aabb::EMPTY.intersects(&a));
        assert!(!a.intersects(&Aabb::EMPTY));
    }

    #[test]
    fn test_body_bounds_stale_until_refresh() {
        let mut body = BoxBody::cube(Vec3::ZERO, 0.5);
        body.position.x = 10.0;
        assert_eq!(body.bounds().center(), Vec3::ZERO);

        body.refresh();
        assert_eq!(body.bounds().center(), Vec3::new(10.0, 0.0, 0.0));
        assert!(body.bounds().contains_point(Vec3::new(10.4, 0.4, -0.4)));
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (
            -10.0f32..10.0,
            -10.0f32..10.0,
            -10.0f32..10.0,
            0.01f32..5.0,
            0.01f32..5.0,
            0.01f32..5.0,
        )
            .prop_map(|(x, y, z, hx, hy, hz)| {
                Aabb::from_center(Vec3::new(x, y, z), Vec3::new(hx, hy, hz))
            })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn box_overlaps_itself_and_its_center(a in arb_box()) {
            prop_assert!(a.intersects(&a));
            prop_assert!(a.contains_point(a.center()));
        }
    }
}
