use glam::{Mat4, Vec3};

use crate::render_surface::RenderSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Cylinder {
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    Sphere {
        radius: f32,
        slices: u32,
        stacks: u32,
    },
    Cone {
        base_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    /// Flat faces given directly in the part's local frame.
    Polygons {
        quads: Vec<[Vec3; 4]>,
        triangles: Vec<[Vec3; 3]>,
    },
}

/// A shape plus a scale that applies to the shape only, not to child parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub scale: Vec3,
}

impl Primitive {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            scale: Vec3::ONE,
        }
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn emit<S: RenderSurface>(&self, surface: &mut S, transform: &Mat4) {
        let transform = if self.scale == Vec3::ONE {
            *transform
        } else {
            *transform * Mat4::from_scale(self.scale)
        };

        match &self.shape {
            Shape::Cylinder {
                top_radius,
                bottom_radius,
                height,
                slices,
                stacks,
            } => surface.cylinder(
                &transform,
                *top_radius,
                *bottom_radius,
                *height,
                *slices,
                *stacks,
            ),
            Shape::Sphere {
                radius,
                slices,
                stacks,
            } => surface.sphere(&transform, *radius, *slices, *stacks),
            Shape::Cone {
                base_radius,
                height,
                slices,
                stacks,
            } => surface.cone(&transform, *base_radius, *height, *slices, *stacks),
            Shape::Polygons { quads, triangles } => {
                for quad in quads {
                    surface.quad(&transform, quad);
                }
                for triangle in triangles {
                    surface.triangle(&transform, triangle);
                }
            }
        }
    }
}
