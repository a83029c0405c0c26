use glam::{Mat4, Vec3};

use crate::config::ViewConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn from_config(view: &ViewConfig) -> Self {
        Self {
            eye: view.eye,
            target: view.target,
            up: view.up,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Perspective parameters. Only the aspect ratio changes after startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_y_degrees: f32,
    near: f32,
    far: f32,
    aspect: f32,
}

impl Projection {
    pub fn new(view: &ViewConfig, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y_degrees: view.fov_y_degrees,
            near: view.near,
            far: view.far,
            aspect: 1.0,
        };
        projection.resize(width, height);
        projection
    }

    /// Recomputes the aspect ratio for a new viewport.
    ///
    /// Zero-sized viewports (minimized windows) are ignored and `false` is
    /// returned.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }

        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

pub fn view_projection(camera: &Camera, projection: &Projection) -> Mat4 {
    projection.matrix() * camera.view_matrix()
}
