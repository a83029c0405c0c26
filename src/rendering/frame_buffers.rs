use crate::rendering::frame_geometry::{FrameGeometry, Vertex};

/// Vertex and index buffers refilled every frame. They only ever grow.
pub struct FrameBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    vertex_capacity: u64,
    index_capacity: u64,
    index_count: u32,
}

const INITIAL_VERTICES: u64 = 4096;
const INITIAL_INDICES: u64 = 16384;

fn create_buffer(
    device: &wgpu::Device,
    label: &str,
    size: u64,
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl FrameBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertex_capacity = INITIAL_VERTICES * std::mem::size_of::<Vertex>() as u64;
        let index_capacity = INITIAL_INDICES * std::mem::size_of::<u32>() as u64;

        Self {
            vertices: create_buffer(
                device,
                "Frame vertex buffer",
                vertex_capacity,
                wgpu::BufferUsages::VERTEX,
            ),
            indices: create_buffer(
                device,
                "Frame index buffer",
                index_capacity,
                wgpu::BufferUsages::INDEX,
            ),
            vertex_capacity,
            index_capacity,
            index_count: 0,
        }
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, geometry: &FrameGeometry) {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(geometry.vertices());
        let index_bytes: &[u8] = bytemuck::cast_slice(geometry.indices());

        if vertex_bytes.len() as u64 > self.vertex_capacity {
            self.vertex_capacity = (vertex_bytes.len() as u64).next_power_of_two();
            log::debug!("Growing frame vertex buffer to {} bytes", self.vertex_capacity);
            self.vertices = create_buffer(
                device,
                "Frame vertex buffer",
                self.vertex_capacity,
                wgpu::BufferUsages::VERTEX,
            );
        }

        if index_bytes.len() as u64 > self.index_capacity {
            self.index_capacity = (index_bytes.len() as u64).next_power_of_two();
            log::debug!("Growing frame index buffer to {} bytes", self.index_capacity);
            self.indices = create_buffer(
                device,
                "Frame index buffer",
                self.index_capacity,
                wgpu::BufferUsages::INDEX,
            );
        }

        queue.write_buffer(&self.vertices, 0, vertex_bytes);
        queue.write_buffer(&self.indices, 0, index_bytes);
        self.index_count = geometry.indices().len() as u32;
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        if self.index_count == 0 {
            return;
        }

        render_pass.set_vertex_buffer(0, self.vertices.slice(..));
        render_pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
