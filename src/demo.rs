use crate::{
    camera::{Camera, Projection},
    config::AppConfig,
    engine,
    math::TransformStack,
    render_surface::RenderSurface,
    scene_graph::Scene,
    world::{Command, WorldState},
    zeppelin::{self, ZeppelinDimensions},
};

pub struct ZeppelinDemo {
    pub config: AppConfig,
    pub camera: Camera,
    pub projection: Projection,
    pub world: WorldState,
    pub dimensions: ZeppelinDimensions,
    pub scene: Scene,
    pub(crate) stack: TransformStack,
}

impl ZeppelinDemo {
    pub fn new(config: AppConfig) -> Self {
        let dimensions = ZeppelinDimensions::from_body_length(config.body_length);
        let scene = zeppelin::build_scene(&dimensions);
        let stack = TransformStack::with_capacity(scene.depth() + 1);

        log::info!(
            "Built zeppelin with {} parts, body length {}",
            scene.len(),
            dimensions.body_length
        );

        Self {
            camera: Camera::from_config(&config.view),
            projection: Projection::new(&config.view, config.window.width, config.window.height),
            world: WorldState::new(config.motion),
            dimensions,
            scene,
            stack,
            config,
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        self.world.apply(command);
    }

    /// Returns `false` when the new size was ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let resized = self.projection.resize(width, height);
        if resized {
            log::debug!("Resized to {width}x{height}");
        }
        resized
    }

    pub fn render<S: RenderSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        engine::render_frame(self, surface)
    }
}
