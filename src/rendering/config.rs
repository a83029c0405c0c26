use crate::rendering::lighting::Lighting;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub clear_color: wgpu::Color,
    pub lighting: Lighting,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: wgpu::Color {
                r: 0.4,
                g: 0.4,
                b: 0.4,
                a: 0.0,
            },
            lighting: Lighting::default(),
        }
    }
}
