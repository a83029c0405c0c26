use anyhow::Result;
use clap::Parser;

mod camera;
mod config;
mod demo;
mod engine;
mod input;
mod math;
mod render_surface;
mod rendering;
mod scene_graph;
mod window;
mod world;
mod zeppelin;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = config::Args::parse();
    let config = config::AppConfig::from_args(&args);

    window::run(config)?;

    Ok(())
}
