//! Camera rig
//!
//! The camera copies the claw's sideways offset each tick and keeps looking
//! along its own forward direction. It never looks at the claw itself.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    /// Unit look direction
    forward: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera at `position` looking at `target`
    pub fn looking_at(position: Vec3, target: Vec3, fov_y: f32) -> Self {
        let forward = (target - position).normalize_or(Vec3::NEG_Z);
        Self {
            position,
            forward,
            up: Vec3::Y,
            fov_y,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Translate by `offset` and re-aim along the current forward direction
    pub fn follow(&mut self, offset: Vec3) {
        self.position += offset;
        self.reorient();
    }

    /// Look at `position + forward`, keeping the viewing direction fixed
    pub fn reorient(&mut self) {
        let target = self.position + self.forward;
        self.look_at(target);
    }

    pub fn look_at(&mut self, target: Vec3) {
        if let Some(dir) = (target - self.position).try_normalize() {
            self.forward = dir;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, self.up)
    }

    /// Combined view-projection for a viewport of the given aspect ratio
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, aspect.max(0.01), self.near, self.far);
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_keeps_direction() {
        let mut camera = Camera::looking_at(Vec3::new(0.0, 8.0, 10.0), Vec3::ZERO, 1.0);
        let before = camera.forward();

        camera.follow(Vec3::new(0.1, 0.0, 0.0));
        assert_eq!(camera.position, Vec3::new(0.1, 8.0, 10.0));
        assert!((camera.forward() - before).length() < 1e-6);
    }

    #[test]
    fn test_zero_offset_is_noop() {
        let mut camera = Camera::looking_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.0, 0.0), 1.0);
        let pos = camera.position;
        let fwd = camera.forward();
        camera.follow(Vec3::ZERO);
        assert_eq!(camera.position, pos);
        assert!((camera.forward() - fwd).length() < 1e-6);
    }

    #[test]
    fn test_view_proj_puts_target_in_front() {
        let camera = Camera::looking_at(Vec3::new(0.0, 8.0, 10.0), Vec3::ZERO, 1.0);
        let clip = camera.view_proj(16.0 / 9.0) * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    }
}
