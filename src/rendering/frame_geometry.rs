use std::mem::offset_of;

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

use crate::rendering::tessellate::{QuadricCache, QuadricKey};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            offset: offset_of!(Vertex, position) as wgpu::BufferAddress,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: offset_of!(Vertex, normal) as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
    ],
};

/// World-space triangles collected for one frame.
///
/// Primitives are transformed on the CPU as they are emitted, the way a
/// fixed-function pipeline applies the current modelview matrix, so the
/// whole frame uploads and draws as a single indexed mesh.
#[derive(Debug, Default)]
pub struct FrameGeometry {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    quadrics: QuadricCache,
}

impl FrameGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops this frame's triangles. Tessellated quadrics are kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn cached_quadrics(&self) -> usize {
        self.quadrics.len()
    }

    pub fn add_quadric(&mut self, key: QuadricKey, transform: &Mat4) {
        let normal_matrix = normal_matrix(transform);
        let mesh = self.quadrics.get(key);
        let first = self.vertices.len() as u32;

        self.vertices.extend(mesh.vertices.iter().map(|vertex| Vertex {
            position: transform.transform_point3(vertex.position).to_array(),
            normal: (normal_matrix * vertex.normal).normalize_or_zero().to_array(),
        }));
        self.indices
            .extend(mesh.indices.iter().map(|index| first + index));
    }

    /// Adds a flat convex polygon as a triangle fan.
    ///
    /// The face normal follows the vertex order; faces are lit from both
    /// sides so the winding does not have to be consistent.
    pub fn add_polygon(&mut self, transform: &Mat4, points: &[Vec3]) {
        if points.len() < 3 {
            return;
        }

        let world: Vec<Vec3> = points
            .iter()
            .map(|point| transform.transform_point3(*point))
            .collect();
        let normal = (world[1] - world[0])
            .cross(world[2] - world[0])
            .normalize_or_zero()
            .to_array();

        let first = self.vertices.len() as u32;
        self.vertices.extend(world.iter().map(|position| Vertex {
            position: position.to_array(),
            normal,
        }));
        for corner in 1..world.len() as u32 - 1 {
            self.indices
                .extend_from_slice(&[first, first + corner, first + corner + 1]);
        }
    }
}

fn normal_matrix(transform: &Mat4) -> Mat3 {
    Mat3::from_mat4(*transform).inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrics_are_moved_into_world_space() {
        let mut geometry = FrameGeometry::new();
        let transform = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        geometry.add_quadric(QuadricKey::sphere(1.0, 8, 8), &transform);

        for vertex in geometry.vertices() {
            let position = Vec3::from_array(vertex.position);
            assert!(((position - Vec3::new(5.0, 0.0, 0.0)).length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn normals_survive_non_uniform_scale() {
        let mut geometry = FrameGeometry::new();
        // Squash a sphere into a flat disk along Z.
        let transform = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.1));
        geometry.add_quadric(QuadricKey::sphere(1.0, 16, 16), &transform);

        for vertex in geometry.vertices() {
            let position = Vec3::from_array(vertex.position);
            let normal = Vec3::from_array(vertex.normal);
            assert!((normal.length() - 1.0).abs() < 1e-4);

            // Gradient of the ellipsoid x^2 + y^2 + (z / 0.1)^2 = 1.
            let gradient = Vec3::new(position.x, position.y, position.z / 0.01).normalize();
            assert!(normal.abs_diff_eq(gradient, 1e-3));
        }
    }

    #[test]
    fn indices_are_offset_per_primitive() {
        let mut geometry = FrameGeometry::new();
        geometry.add_quadric(QuadricKey::cylinder(1.0, 1.0, 1.0, 4, 1), &Mat4::IDENTITY);
        let first_count = geometry.vertices().len() as u32;
        geometry.add_quadric(QuadricKey::cylinder(1.0, 1.0, 1.0, 4, 1), &Mat4::IDENTITY);

        let max_index = geometry.indices().iter().copied().max().unwrap();
        assert_eq!(max_index, 2 * first_count - 1);
        assert_eq!(geometry.triangle_count(), 2 * 4 * 2);
    }

    #[test]
    fn quads_become_two_triangles_with_a_face_normal() {
        let mut geometry = FrameGeometry::new();
        let quad = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
        geometry.add_polygon(&Mat4::from_rotation_x(90f32.to_radians()), &quad);

        assert_eq!(geometry.triangle_count(), 2);
        assert_eq!(geometry.indices(), &[0, 1, 2, 0, 2, 3]);
        // Counter-clockwise in XY faces +Z; a quarter turn about X takes +Z to -Y.
        for vertex in geometry.vertices() {
            assert!(Vec3::from_array(vertex.normal).abs_diff_eq(-Vec3::Y, 1e-5));
        }
    }

    #[test]
    fn clear_keeps_nothing_from_the_previous_frame() {
        let mut geometry = FrameGeometry::new();
        geometry.add_polygon(&Mat4::IDENTITY, &[Vec3::ZERO, Vec3::X, Vec3::Y]);
        geometry.clear();

        assert!(geometry.vertices().is_empty());
        assert_eq!(geometry.triangle_count(), 0);
    }
}
