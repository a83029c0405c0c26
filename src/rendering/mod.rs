pub mod config;
pub mod frame_buffers;
pub mod frame_geometry;
pub mod lighting;
pub mod renderer;
pub mod scene_uniform;
pub mod shaded_pass;
pub mod tessellate;
pub mod texture;
