//! Mesh generation for the arena scene

use glam::Vec3;

use super::vertex::{Vertex, colors};
use crate::consts::{ARENA_HALF_WIDTH, WALL_HEIGHT};
use crate::sim::{Aabb, GameState, Wall};
use crate::sim::scene;

/// Vertices per box (6 faces, 2 triangles each)
pub const VERTICES_PER_BOX: usize = 36;

/// Cable radius from the gantry down to the claw
const CABLE_HALF_WIDTH: f32 = 0.05;

/// Generate a solid box for an AABB, counter-clockwise faces
pub fn cuboid(bounds: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(VERTICES_PER_BOX);
    push_cuboid(&mut vertices, bounds, color);
    vertices
}

fn push_cuboid(out: &mut Vec<Vertex>, bounds: &Aabb, color: [f32; 4]) {
    if bounds.is_empty() {
        return;
    }
    let (lo, hi) = (bounds.min, bounds.max);
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { hi.x } else { lo.x },
            if y { hi.y } else { lo.y },
            if z { hi.z } else { lo.z },
        )
    };

    // (normal, four corners counter-clockwise seen from outside)
    let faces = [
        (Vec3::X, [corner(true, false, true), corner(true, false, false), corner(true, true, false), corner(true, true, true)]),
        (Vec3::NEG_X, [corner(false, false, false), corner(false, false, true), corner(false, true, true), corner(false, true, false)]),
        (Vec3::Y, [corner(false, true, true), corner(true, true, true), corner(true, true, false), corner(false, true, false)]),
        (Vec3::NEG_Y, [corner(false, false, false), corner(true, false, false), corner(true, false, true), corner(false, false, true)]),
        (Vec3::Z, [corner(false, false, true), corner(true, false, true), corner(true, true, true), corner(false, true, true)]),
        (Vec3::NEG_Z, [corner(true, false, false), corner(false, false, false), corner(false, true, false), corner(true, true, false)]),
    ];

    for (normal, [a, b, c, d]) in faces {
        let n = normal.to_array();
        for p in [a, b, c, a, c, d] {
            out.push(Vertex::new(p.to_array(), n, color));
        }
    }
}

/// The front pane faces the camera and is drawn see-through
pub fn is_glass(wall: &Wall) -> bool {
    wall.body.position.z > ARENA_HALF_WIDTH
}

/// All triangles for the current frame
///
/// Opaque geometry first, translucent glass last so it blends over
/// whatever it covers.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let boxes = 3 + state.walls.len() + state.gifts.len();
    let mut vertices = Vec::with_capacity(boxes * VERTICES_PER_BOX);

    push_cuboid(&mut vertices, scene::floor().bounds(), colors::FLOOR);

    for wall in state.walls.iter().filter(|w| !is_glass(w)) {
        push_cuboid(&mut vertices, wall.body.bounds(), colors::WALL);
    }

    for gift in &state.gifts {
        let color = colors::GIFTS[gift.color as usize % colors::GIFTS.len()];
        push_cuboid(&mut vertices, gift.body.bounds(), color);
    }

    let claw = state.claw.body.bounds();
    let center = claw.center();
    let cable = Aabb::new(
        Vec3::new(center.x - CABLE_HALF_WIDTH, claw.max.y, center.z - CABLE_HALF_WIDTH),
        Vec3::new(center.x + CABLE_HALF_WIDTH, WALL_HEIGHT, center.z + CABLE_HALF_WIDTH),
    );
    push_cuboid(&mut vertices, &cable, colors::CABLE);
    push_cuboid(&mut vertices, claw, colors::CLAW);

    for wall in state.walls.iter().filter(|w| is_glass(w)) {
        push_cuboid(&mut vertices, wall.body.bounds(), colors::GLASS);
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_cuboid_normals_point_outward() {
        let bounds = Aabb::from_center(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        let vertices = cuboid(&bounds, colors::CLAW);
        assert_eq!(vertices.len(), VERTICES_PER_BOX);

        for tri in vertices.chunks(3) {
            let a = Vec3::from(tri[0].position);
            let b = Vec3::from(tri[1].position);
            let c = Vec3::from(tri[2].position);
            let winding = (b - a).cross(c - a).normalize();
            let normal = Vec3::from(tri[0].normal);
            assert!(winding.dot(normal) > 0.99);
            // Face normal points away from the box center
            assert!((a - bounds.center()).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_empty_box_has_no_triangles() {
        assert!(cuboid(&Aabb::EMPTY, colors::CLAW).is_empty());
    }

    #[test]
    fn test_captured_gift_leaves_the_mesh() {
        let mut state = scene::build(&Settings::default(), 11);
        let before = scene_vertices(&state).len();
        assert_eq!(before, (3 + state.walls.len() + state.gifts.len()) * VERTICES_PER_BOX);

        state.gifts.remove(0);
        assert_eq!(scene_vertices(&state).len(), before - VERTICES_PER_BOX);
    }

    #[test]
    fn test_glass_is_drawn_last() {
        let state = scene::build(&Settings::default(), 11);
        let vertices = scene_vertices(&state);
        let last = vertices.last().unwrap();
        assert_eq!(last.color, colors::GLASS);
        assert_eq!(state.walls.iter().filter(|w| is_glass(w)).count(), 1);
    }
}
