pub mod app;
pub mod camera;
pub mod chapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod panel;
pub mod render;
pub mod scene;

pub use chapters::{Chapter, ChapterId};
pub use config::PlaygroundConfig;
