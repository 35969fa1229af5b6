use glam::{Mat4, Vec2, Vec3};

use crate::options::CameraOptions;
use crate::scene::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the origin from the configured eye position.
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Projection matrix alone.
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh uses a [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (x right, y up, both in `[-1, 1]`).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.build_matrix().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(near, far - near)
    }
}
