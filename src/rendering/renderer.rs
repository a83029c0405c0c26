use std::sync::Arc;

use anyhow::Context;
use glam::{Mat4, Vec3};
use wgpu::CommandEncoderDescriptor;
use winit::{dpi::PhysicalSize, window::Window};

use crate::{
    camera::{Camera, Projection},
    config::AppConfig,
    render_surface::RenderSurface,
    rendering::{
        config::RenderConfig,
        frame_buffers::FrameBuffers,
        frame_geometry::FrameGeometry,
        scene_uniform::{SceneUniform, SceneUniformState},
        shaded_pass::{ShadedPass, ShadedPassTextureViews},
        tessellate::QuadricKey,
        texture::DepthTexture,
    },
};

/// wgpu implementation of the immediate-mode render surface.
///
/// Primitive calls only collect geometry; everything is uploaded and drawn
/// in a single pass when the frame is presented.
pub struct Renderer {
    pub window: Arc<Window>,

    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    depth_texture: DepthTexture,
    scene_uniform: SceneUniform,
    frame_buffers: FrameBuffers,
    shaded_pass: ShadedPass,

    render_config: RenderConfig,
    geometry: FrameGeometry,
    camera: Camera,
    projection: Projection,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &AppConfig) -> anyhow::Result<Renderer> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No compatible graphics adapter")?;

        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Lighting is computed for a linear framebuffer, as in classic GL.
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("Surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .context("Surface reports no alpha modes")?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let depth_texture = DepthTexture::new(&device, &surface_config, "Depth texture");

        let render_config = config.render.clone();
        let camera = Camera::from_config(&config.view);
        let projection = Projection::new(&config.view, surface_config.width, surface_config.height);
        let scene_uniform = SceneUniform::new(
            &device,
            SceneUniformState::new(&camera, &projection, &render_config.lighting),
        );
        let frame_buffers = FrameBuffers::new(&device);
        let shaded_pass = ShadedPass::create(&device, surface_format, &scene_uniform);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            surface_config,
            depth_texture,
            scene_uniform,
            frame_buffers,
            shaded_pass,
            render_config,
            geometry: FrameGeometry::new(),
            camera,
            projection,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.reconfigure();
    }

    /// Reapplies the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_texture
            .resize(&self.device, &self.surface_config);
    }
}

impl RenderSurface for Renderer {
    type Error = wgpu::SurfaceError;

    fn clear_frame(&mut self) {
        self.geometry.clear();
    }

    fn set_projection(&mut self, projection: &Projection) {
        self.projection = *projection;
    }

    fn set_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.camera = Camera { eye, target, up };
    }

    fn cylinder(
        &mut self,
        transform: &Mat4,
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    ) {
        self.geometry.add_quadric(
            QuadricKey::cylinder(top_radius, bottom_radius, height, slices, stacks),
            transform,
        );
    }

    fn sphere(&mut self, transform: &Mat4, radius: f32, slices: u32, stacks: u32) {
        self.geometry
            .add_quadric(QuadricKey::sphere(radius, slices, stacks), transform);
    }

    fn cone(&mut self, transform: &Mat4, base_radius: f32, height: f32, slices: u32, stacks: u32) {
        self.geometry.add_quadric(
            QuadricKey::cone(base_radius, height, slices, stacks),
            transform,
        );
    }

    fn quad(&mut self, transform: &Mat4, vertices: &[Vec3; 4]) {
        self.geometry.add_polygon(transform, vertices);
    }

    fn triangle(&mut self, transform: &Mat4, vertices: &[Vec3; 3]) {
        self.geometry.add_polygon(transform, vertices);
    }

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        self.scene_uniform.update(
            &self.queue,
            SceneUniformState::new(&self.camera, &self.projection, &self.render_config.lighting),
        );
        log::trace!(
            "Drawing {} triangles, {} cached quadrics",
            self.geometry.triangle_count(),
            self.geometry.cached_quadrics()
        );
        self.frame_buffers
            .upload(&self.device, &self.queue, &self.geometry);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.shaded_pass.render(
            &ShadedPassTextureViews {
                color: &view,
                depth: self.depth_texture.view(),
            },
            &mut encoder,
            self.render_config.clear_color,
            &self.scene_uniform,
            &self.frame_buffers,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        output.present();

        Ok(())
    }
}
