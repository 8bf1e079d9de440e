use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use scene_playground::app::{run_headless, App};
use scene_playground::cli::Cli;
use scene_playground::config::PlaygroundConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlaygroundConfig::resolve(&cli).context("invalid configuration")?;

    if let Some(frames) = cli.headless {
        println!("Scene Playground - {} (headless, {} frames)", config.chapter.title(), frames);
        run_headless(&config, frames)?;
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    println!("Scene Playground - {} - Escape to quit", config.chapter.title());
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
