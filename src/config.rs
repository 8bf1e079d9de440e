use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chapters::ChapterId;
use crate::cli::Cli;
use crate::error::SetupError;

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// Settings for a playground session, loaded from JSON and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub chapter: ChapterId,
    pub window_width: u32,
    pub window_height: u32,
    pub render_scale: f32,
    pub rotation_speed: f32,
    pub bouncing_speed: f32,
    pub initial_cubes: usize,
    pub seed: Option<u64>,
    pub show_panel: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            chapter: ChapterId::Two,
            window_width: INITIAL_WINDOW_WIDTH,
            window_height: INITIAL_WINDOW_HEIGHT,
            render_scale: 0.35,
            rotation_speed: 0.02,
            bouncing_speed: 0.03,
            initial_cubes: 0,
            seed: None,
            show_panel: true,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Config file (if any) with CLI flags applied on top
    pub fn resolve(cli: &Cli) -> Result<Self, SetupError> {
        let mut config = match &cli.config {
            Some(path) => {
                log::info!("Loading config: {}", path.display());
                Self::load(path)?
            }
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(chapter) = cli.chapter {
            self.chapter = chapter;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(cubes) = cli.cubes {
            self.initial_cubes = cubes;
        }
        if let Some(scale) = cli.render_scale {
            self.render_scale = scale;
        }
        if cli.no_ui {
            self.show_panel = false;
        }
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.render_scale > 0.0 && self.render_scale <= 1.0) {
            return Err(SetupError::InvalidRenderScale(self.render_scale));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SetupError::ZeroViewport {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PlaygroundConfig::from_json(r#"{ "chapter": "one", "seed": 9 }"#).unwrap();
        assert_eq!(config.chapter, ChapterId::One);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rotation_speed, 0.02);
        assert_eq!(config.window_width, INITIAL_WINDOW_WIDTH);
    }

    #[test]
    fn invalid_json_is_parse_error() {
        assert!(matches!(
            PlaygroundConfig::from_json("{ nope"),
            Err(SetupError::Parse(_))
        ));
    }

    #[test]
    fn zero_window_rejected() {
        let result = PlaygroundConfig::from_json(r#"{ "window_width": 0 }"#);
        assert!(matches!(result, Err(SetupError::ZeroViewport { width: 0, .. })));
    }

    #[test]
    fn bad_render_scale_rejected() {
        let result = PlaygroundConfig::from_json(r#"{ "render_scale": 2.0 }"#);
        assert!(matches!(result, Err(SetupError::InvalidRenderScale(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PlaygroundConfig::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(SetupError::Io(_))));
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut config = PlaygroundConfig::default();
        let cli = Cli {
            chapter: Some(ChapterId::One),
            cubes: Some(3),
            seed: Some(1),
            no_ui: true,
            ..Cli::default()
        };

        config.apply_cli(&cli);

        assert_eq!(config.chapter, ChapterId::One);
        assert_eq!(config.initial_cubes, 3);
        assert_eq!(config.seed, Some(1));
        assert!(!config.show_panel);
    }
}
