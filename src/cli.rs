// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::chapters::ChapterId;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scene-playground")]
#[command(about = "Animated scene chapters with a live control panel", long_about = None)]
pub struct Cli {
    /// Chapter to open
    #[arg(long, value_enum)]
    pub chapter: Option<ChapterId>,

    /// JSON config file; CLI flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for cube placement and colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cubes to add before the first frame
    #[arg(long)]
    pub cubes: Option<usize>,

    /// Fraction of the window resolution the ray caster renders at
    #[arg(long = "render-scale")]
    pub render_scale: Option<f32>,

    /// Disable UI elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Run this many frames without a window, then exit
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "scene-playground",
            "--chapter",
            "two",
            "--seed",
            "7",
            "--cubes",
            "5",
            "--render-scale",
            "0.5",
            "--no-ui",
        ]);

        assert_eq!(cli.chapter, Some(ChapterId::Two));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.cubes, Some(5));
        assert_eq!(cli.render_scale, Some(0.5));
        assert!(cli.no_ui);
        assert!(cli.headless.is_none());
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::parse_from(["scene-playground"]);
        assert!(cli.chapter.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_ui);
    }

    #[test]
    fn rejects_unknown_chapter() {
        assert!(Cli::try_parse_from(["scene-playground", "--chapter", "nine"]).is_err());
    }
}
