use glam::{Mat4, Vec3};

use crate::camera::Projection;

/// Immediate-mode drawing target.
///
/// Every primitive call is placed by `transform`, the model matrix that is
/// current on the transform stack when the primitive is emitted. Curved
/// solids use the quadric conventions: cylinders and cones extend from
/// `z = 0` to `z = height`, spheres are centered on the origin with their
/// poles on the Z axis.
pub trait RenderSurface {
    type Error;

    fn clear_frame(&mut self);

    fn set_projection(&mut self, projection: &Projection);

    fn set_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3);

    /// Open tube, `bottom_radius` at `z = 0` and `top_radius` at `z = height`.
    fn cylinder(
        &mut self,
        transform: &Mat4,
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    );

    fn sphere(&mut self, transform: &Mat4, radius: f32, slices: u32, stacks: u32);

    /// Solid cone with a closed base at `z = 0` and its apex at `z = height`.
    fn cone(&mut self, transform: &Mat4, base_radius: f32, height: f32, slices: u32, stacks: u32);

    fn quad(&mut self, transform: &Mat4, vertices: &[Vec3; 4]);

    fn triangle(&mut self, transform: &Mat4, vertices: &[Vec3; 3]);

    fn present_frame(&mut self) -> Result<(), Self::Error>;
}
