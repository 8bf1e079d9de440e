//! Chapter pages: each owns a stage, its control parameters and the frame loop

mod basic_scene;
mod first_scene;

use serde::{Deserialize, Serialize};

use crate::config::PlaygroundConfig;
use crate::core::{
    ControlEvent, ControlParameters, ControlSurface, FrameScheduler, FrameSink, TickOutcome, Viewport,
};
use crate::error::RenderError;
use crate::render::RenderEngine;
use crate::scene::{ObjectRegistry, ObjectSnapshot, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterId {
    /// Spinning cube and bouncing sphere
    One,
    /// Cubes added and removed from the panel
    #[default]
    Two,
}

impl ChapterId {
    pub fn title(&self) -> &'static str {
        match self {
            ChapterId::One => "First Scene",
            ChapterId::Two => "Basic Scene",
        }
    }
}

/// What a chapter builder hands back
pub(crate) struct Parts {
    stage: Stage,
    params: ControlParameters,
    controls: ControlSurface,
}

/// A live chapter page
#[derive(Debug)]
pub struct Chapter {
    id: ChapterId,
    stage: Stage,
    params: ControlParameters,
    controls: ControlSurface,
    scheduler: FrameScheduler,
    torn_down: bool,
}

impl Chapter {
    pub fn build(config: &PlaygroundConfig, viewport: Viewport) -> Self {
        let registry = match config.seed {
            Some(seed) => ObjectRegistry::with_seed(seed),
            None => ObjectRegistry::new(),
        };

        let Parts {
            stage,
            mut params,
            controls,
        } = match config.chapter {
            ChapterId::One => first_scene::build(config, viewport, registry),
            ChapterId::Two => basic_scene::build(config, viewport, registry),
        };
        controls.sync(&mut params, &stage);

        log::info!(
            "Built chapter '{}' with {} tracked objects",
            config.chapter.title(),
            stage.registry.count()
        );

        Self {
            id: config.chapter,
            stage,
            params,
            controls,
            scheduler: FrameScheduler::new(),
            torn_down: false,
        }
    }

    pub fn id(&self) -> ChapterId {
        self.id
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn params(&self) -> &ControlParameters {
        &self.params
    }

    pub fn controls(&self) -> &ControlSurface {
        &self.controls
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn start(&mut self, sink: &dyn FrameSink) -> bool {
        self.scheduler.start(sink)
    }

    pub fn tick<E: RenderEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        sink: &dyn FrameSink,
        delta: f32,
    ) -> Result<TickOutcome, RenderError> {
        self.scheduler
            .tick(&mut self.stage, &self.params, engine, sink, delta)
    }

    /// Apply queued panel edits; must run between ticks
    pub fn apply_events(&mut self, events: impl IntoIterator<Item = ControlEvent>) {
        if self.torn_down {
            return;
        }
        for event in events {
            if let Some(dump) = self.controls.apply(event, &mut self.params, &mut self.stage) {
                log::info!("{}", format_dump(&dump));
            }
        }
    }

    /// Current registry contents, as `outputObjects` would log them
    pub fn dump(&self) -> Vec<ObjectSnapshot> {
        self.stage.registry.dump().collect()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.stage.resize(viewport);
    }

    /// Stop the loop and drop every tracked object; false if already torn down
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        self.scheduler.stop();
        self.stage.registry.clear();
        self.controls.sync(&mut self.params, &self.stage);
        log::info!(
            "Tore down chapter '{}' after {} frames",
            self.id.title(),
            self.scheduler.frames()
        );
        true
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

/// Timestamped JSON rendering of a registry dump
pub fn format_dump(snapshots: &[ObjectSnapshot]) -> String {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    match serde_json::to_string_pretty(snapshots) {
        Ok(json) => format!("[{}] {} objects\n{}", stamp, snapshots.len(), json),
        Err(e) => {
            log::warn!("failed to serialize dump: {}", e);
            let lines: Vec<String> = snapshots.iter().map(|s| s.to_string()).collect();
            format!("[{}] {} objects\n{}", stamp, snapshots.len(), lines.join("\n"))
        }
    }
}
