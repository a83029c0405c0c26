use clap::Parser;
use glam::Vec3;

use crate::rendering::config::RenderConfig;

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D Hierarchical Example".to_string(),
            width: 650,
            height: 500,
        }
    }
}

/// Fixed camera placement and perspective parameters.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 6.0, 22.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 60.0,
            near: 0.2,
            far: 40.0,
        }
    }
}

/// Per-keystroke step sizes. Movement is not time-integrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub forward_step: f32,
    pub spin_step: f32,
    pub turn_step: f32,
    pub climb_step: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            forward_step: 0.1,
            spin_step: 25.0,
            turn_step: 2.0,
            climb_step: 0.05,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub motion: MotionConfig,
    pub render: RenderConfig,
    /// Base parameter every zeppelin part dimension is derived from.
    pub body_length: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            view: ViewConfig::default(),
            motion: MotionConfig::default(),
            render: RenderConfig::default(),
            body_length: 3.0,
        }
    }
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self::default();

        if let Some(width) = args.width {
            config.window.width = width;
        }
        if let Some(height) = args.height {
            config.window.height = height;
        }
        if let Some(body_length) = args.body_length {
            config.body_length = body_length;
        }

        config
    }
}

/// Hierarchical zeppelin model viewer.
///
/// Keys: `w` moves forward, left/right arrows turn, up/down arrows change
/// altitude, Escape quits.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Length of the zeppelin body; all other dimensions scale with it
    #[arg(long, value_parser = parse_body_length)]
    pub body_length: Option<f32>,
}

fn parse_body_length(value: &str) -> Result<f32, String> {
    let length: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;

    if length.is_finite() && length > 0.0 {
        Ok(length)
    } else {
        Err(format!("body length must be positive, got {length}"))
    }
}
