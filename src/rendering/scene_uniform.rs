use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::{self, Camera, Projection};
use crate::rendering::lighting::Lighting;

/// Per-frame shader inputs. Vectors are padded to `vec4` for WGSL uniform
/// layout; the material specular `w` carries the shininess.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SceneUniformState {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub light_positions: [[f32; 4]; 2],
    pub light_ambient: [[f32; 4]; 2],
    pub light_diffuse: [[f32; 4]; 2],
    pub light_specular: [[f32; 4]; 2],
    pub material_ambient: [f32; 4],
    pub material_diffuse: [f32; 4],
    pub material_specular: [f32; 4],
}

fn padded(v: Vec3, w: f32) -> [f32; 4] {
    v.extend(w).to_array()
}

impl SceneUniformState {
    /// Light positions are given relative to the eye and are moved into
    /// world space here, so they follow the camera.
    pub fn new(camera: &Camera, projection: &Projection, lighting: &Lighting) -> Self {
        let [first, second] = &lighting.lights;
        let material = &lighting.material;
        let eye_to_world = camera.view_matrix().inverse();

        Self {
            view_proj: camera::view_projection(camera, projection).to_cols_array_2d(),
            eye: padded(camera.eye, 1.0),
            light_positions: [
                padded(eye_to_world.transform_point3(first.position), 1.0),
                padded(eye_to_world.transform_point3(second.position), 1.0),
            ],
            light_ambient: [padded(first.ambient, 0.0), padded(second.ambient, 0.0)],
            light_diffuse: [padded(first.diffuse, 0.0), padded(second.diffuse, 0.0)],
            light_specular: [padded(first.specular, 0.0), padded(second.specular, 0.0)],
            material_ambient: padded(material.ambient, 0.0),
            material_diffuse: padded(material.diffuse, 0.0),
            material_specular: padded(material.specular, material.shininess),
        }
    }
}

pub struct SceneUniform {
    buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl SceneUniform {
    pub fn new(device: &wgpu::Device, initial_state: SceneUniformState) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene uniform buffer"),
            contents: bytemuck::cast_slice(&[initial_state]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene uniform bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene uniform bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, state: SceneUniformState) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[state]));
    }
}
