//! Triangle meshes for the curved primitives.
//!
//! Meshes follow the quadric conventions of the render surface: cylinders
//! and cones stand on `z = 0` and extend up to `z = height`, spheres are
//! centered on the origin with their poles on the Z axis. Outward faces wind
//! counter-clockwise.

use std::collections::HashMap;
use std::f32::consts::PI;

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Adds `(stacks + 1) x (slices + 1)` grid indices. `flip` reverses the
    /// winding for grids whose rows run against the outward direction.
    fn push_grid_indices(&mut self, first: u32, slices: u32, stacks: u32, flip: bool) {
        let row = slices + 1;
        for stack in 0..stacks {
            for slice in 0..slices {
                let a = first + stack * row + slice;
                let b = a + 1;
                let c = a + row;
                let d = c + 1;

                if flip {
                    self.indices.extend_from_slice(&[a, c, b, b, c, d]);
                } else {
                    self.indices.extend_from_slice(&[a, b, c, b, d, c]);
                }
            }
        }
    }
}

/// Open tube, optionally tapered, with no end caps.
pub fn generate_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slices: u32,
    stacks: u32,
) -> TriangleMesh {
    let slices = slices.max(3);
    let stacks = stacks.max(1);
    let mut mesh = TriangleMesh::default();

    for stack in 0..=stacks {
        let t = stack as f32 / stacks as f32;
        let z = height * t;
        let radius = bottom_radius + (top_radius - bottom_radius) * t;

        for slice in 0..=slices {
            let angle = slice as f32 * 2.0 * PI / slices as f32;
            let (sin, cos) = angle.sin_cos();

            mesh.vertices.push(MeshVertex {
                position: Vec3::new(radius * cos, radius * sin, z),
                normal: Vec3::new(height * cos, height * sin, bottom_radius - top_radius)
                    .normalize_or_zero(),
            });
        }
    }

    mesh.push_grid_indices(0, slices, stacks, false);
    mesh
}

pub fn generate_sphere(radius: f32, slices: u32, stacks: u32) -> TriangleMesh {
    let slices = slices.max(3);
    let stacks = stacks.max(2);
    let mut mesh = TriangleMesh::default();

    // Rows run from the +Z pole down to the -Z pole.
    for stack in 0..=stacks {
        let polar = stack as f32 * PI / stacks as f32;
        let (ring, z) = polar.sin_cos();

        for slice in 0..=slices {
            let angle = slice as f32 * 2.0 * PI / slices as f32;
            let (sin, cos) = angle.sin_cos();
            let normal = Vec3::new(ring * cos, ring * sin, z);

            mesh.vertices.push(MeshVertex {
                position: normal * radius,
                normal,
            });
        }
    }

    mesh.push_grid_indices(0, slices, stacks, true);
    mesh
}

/// Tapered tube closing to a point at `z = height`, with a flat base disk.
pub fn generate_cone(base_radius: f32, height: f32, slices: u32, stacks: u32) -> TriangleMesh {
    let slices = slices.max(3);
    let mut mesh = generate_cylinder(base_radius, 0.0, height, slices, stacks);

    let center = mesh.vertices.len() as u32;
    mesh.vertices.push(MeshVertex {
        position: Vec3::ZERO,
        normal: -Vec3::Z,
    });

    for slice in 0..=slices {
        let angle = slice as f32 * 2.0 * PI / slices as f32;
        let (sin, cos) = angle.sin_cos();
        mesh.vertices.push(MeshVertex {
            position: Vec3::new(base_radius * cos, base_radius * sin, 0.0),
            normal: -Vec3::Z,
        });
    }

    for slice in 0..slices {
        let current = center + 1 + slice;
        mesh.indices.extend_from_slice(&[center, current + 1, current]);
    }

    mesh
}

/// Identifies a tessellated quadric. Float parameters are keyed by their bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadricKey {
    Cylinder {
        top_radius: u32,
        bottom_radius: u32,
        height: u32,
        slices: u32,
        stacks: u32,
    },
    Sphere {
        radius: u32,
        slices: u32,
        stacks: u32,
    },
    Cone {
        base_radius: u32,
        height: u32,
        slices: u32,
        stacks: u32,
    },
}

impl QuadricKey {
    pub fn cylinder(top_radius: f32, bottom_radius: f32, height: f32, slices: u32, stacks: u32) -> Self {
        QuadricKey::Cylinder {
            top_radius: top_radius.to_bits(),
            bottom_radius: bottom_radius.to_bits(),
            height: height.to_bits(),
            slices,
            stacks,
        }
    }

    pub fn sphere(radius: f32, slices: u32, stacks: u32) -> Self {
        QuadricKey::Sphere {
            radius: radius.to_bits(),
            slices,
            stacks,
        }
    }

    pub fn cone(base_radius: f32, height: f32, slices: u32, stacks: u32) -> Self {
        QuadricKey::Cone {
            base_radius: base_radius.to_bits(),
            height: height.to_bits(),
            slices,
            stacks,
        }
    }

    fn tessellate(&self) -> TriangleMesh {
        match *self {
            QuadricKey::Cylinder {
                top_radius,
                bottom_radius,
                height,
                slices,
                stacks,
            } => generate_cylinder(
                f32::from_bits(bottom_radius),
                f32::from_bits(top_radius),
                f32::from_bits(height),
                slices,
                stacks,
            ),
            QuadricKey::Sphere {
                radius,
                slices,
                stacks,
            } => generate_sphere(f32::from_bits(radius), slices, stacks),
            QuadricKey::Cone {
                base_radius,
                height,
                slices,
                stacks,
            } => generate_cone(
                f32::from_bits(base_radius),
                f32::from_bits(height),
                slices,
                stacks,
            ),
        }
    }
}

/// Tessellates each distinct quadric once and keeps it for reuse.
#[derive(Debug, Default)]
pub struct QuadricCache {
    meshes: HashMap<QuadricKey, TriangleMesh>,
}

impl QuadricCache {
    pub fn get(&mut self, key: QuadricKey) -> &TriangleMesh {
        self.meshes.entry(key).or_insert_with(|| {
            let mesh = key.tessellate();
            log::trace!("Tessellated {:?} into {} triangles", key, mesh.triangle_count());
            mesh
        })
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(mesh: &TriangleMesh) {
        for vertex in &mesh.vertices {
            assert!(
                (vertex.normal.length() - 1.0).abs() < 1e-4,
                "normal {:?} is not unit length",
                vertex.normal
            );
        }
    }

    fn assert_outward_winding(mesh: &TriangleMesh, center: Vec3) {
        for triangle in mesh.indices.chunks(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]]
                .map(|index| mesh.vertices[index as usize].position);
            let face_normal = (b - a).cross(c - a);
            if face_normal.length_squared() < 1e-10 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(face_normal.dot(centroid - center) > 0.0);
        }
    }

    #[test]
    fn cylinder_spans_zero_to_height() {
        let mesh = generate_cylinder(1.0, 1.0, 2.0, 20, 10);

        assert_eq!(mesh.vertices.len(), 21 * 11);
        assert_eq!(mesh.triangle_count(), 20 * 10 * 2);
        assert_unit_normals(&mesh);

        let (min_z, max_z) = mesh
            .vertices
            .iter()
            .fold((f32::MAX, f32::MIN), |(min, max), v| {
                (min.min(v.position.z), max.max(v.position.z))
            });
        assert_eq!(min_z, 0.0);
        assert!((max_z - 2.0).abs() < 1e-6);

        for vertex in &mesh.vertices {
            assert!(vertex.normal.z.abs() < 1e-6);
        }
    }

    #[test]
    fn cylinder_faces_point_away_from_the_axis() {
        let mesh = generate_cylinder(1.0, 1.0, 1.0, 12, 1);
        for triangle in mesh.indices.chunks(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]]
                .map(|index| mesh.vertices[index as usize].position);
            let face_normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            let radial = Vec3::new(centroid.x, centroid.y, 0.0);
            assert!(face_normal.dot(radial) > 0.0);
        }
    }

    #[test]
    fn sphere_vertices_lie_on_the_surface() {
        let mesh = generate_sphere(2.5, 30, 30);

        assert_eq!(mesh.vertices.len(), 31 * 31);
        assert_unit_normals(&mesh);
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - 2.5).abs() < 1e-4);
        }
        assert_outward_winding(&mesh, Vec3::ZERO);
    }

    #[test]
    fn cone_closes_at_the_apex_and_has_a_base() {
        let mesh = generate_cone(1.0, 1.0, 10, 10);
        assert_unit_normals(&mesh);

        let apex_ring = &mesh.vertices[10 * 11..11 * 11];
        for vertex in apex_ring {
            assert!(vertex.position.abs_diff_eq(Vec3::Z, 1e-6));
        }

        let base_normals = mesh
            .vertices
            .iter()
            .filter(|vertex| vertex.normal == -Vec3::Z)
            .count();
        assert_eq!(base_normals, 12);
        assert_outward_winding(&mesh, Vec3::new(0.0, 0.0, 0.25));
    }

    #[test]
    fn degenerate_resolution_is_clamped() {
        let mesh = generate_sphere(1.0, 0, 0);
        assert_eq!(mesh.vertices.len(), 4 * 3);
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn cache_tessellates_each_key_once() {
        let mut cache = QuadricCache::default();
        let key = QuadricKey::sphere(1.0, 30, 30);

        let first = cache.get(key).vertices.len();
        let second = cache.get(key).vertices.len();
        cache.get(QuadricKey::cylinder(1.0, 1.0, 1.0, 20, 10));

        assert_eq!(first, second);
        assert_eq!(cache.len(), 2);
    }
}
