use scene_playground::app::run_headless;
use scene_playground::chapters::ChapterId;
use scene_playground::config::PlaygroundConfig;
use scene_playground::error::SetupError;

fn small_config(chapter: ChapterId) -> PlaygroundConfig {
    PlaygroundConfig {
        chapter,
        window_width: 64,
        window_height: 48,
        render_scale: 0.5,
        initial_cubes: 3,
        seed: Some(8),
        ..PlaygroundConfig::default()
    }
}

#[cfg(test)]
mod headless_tests {
    use super::*;

    #[test]
    fn test_headless_run_renders_and_tears_down() {
        let chapter = run_headless(&small_config(ChapterId::Two), 4).unwrap();

        assert_eq!(chapter.scheduler().frames(), 4);
        assert!(chapter.is_torn_down());
        assert!(chapter.stage().registry.is_empty());
    }

    #[test]
    fn test_headless_first_scene() {
        let chapter = run_headless(&small_config(ChapterId::One), 2).unwrap();
        assert_eq!(chapter.scheduler().frames(), 2);
    }

    #[test]
    fn test_headless_rejects_bad_scale() {
        let config = PlaygroundConfig {
            render_scale: 0.0,
            ..small_config(ChapterId::Two)
        };
        let err = run_headless(&config, 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::InvalidRenderScale(_))
        ));
    }

    #[test]
    fn test_config_file_round_trip_through_disk() {
        let path = std::env::temp_dir().join(format!("scene-playground-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "chapter": "one", "initial_cubes": 2, "render_scale": 0.25 }"#)
            .unwrap();

        let config = PlaygroundConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.chapter, ChapterId::One);
        assert_eq!(config.initial_cubes, 2);
        assert_eq!(config.render_scale, 0.25);
        assert!(config.show_panel);
    }
}
