// app.rs - winit host for a chapter: window, engine and event routing
use anyhow::{Context, Result};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::PerspectiveCamera;
use crate::chapters::{format_dump, Chapter};
use crate::config::PlaygroundConfig;
use crate::core::{Clock, FrameSink, SurfaceRenderer, Viewport};
use crate::error::RenderError;
use crate::panel::{DebugPanel, PanelModel};
use crate::render::{RenderEngine, Raycaster};
use crate::scene::Stage;

impl FrameSink for Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}

/// Ray caster presented on a window with the debug panel on top
pub struct WindowEngine {
    window: Arc<Window>,
    raycaster: Raycaster,
    presenter: SurfaceRenderer,
    panel: DebugPanel,
}

impl WindowEngine {
    async fn new(window: Arc<Window>, viewport: Viewport, config: &PlaygroundConfig) -> Result<Self> {
        let raycaster = Raycaster::new(viewport, config.render_scale)?;
        let presenter = SurfaceRenderer::new(window.clone(), raycaster.frame().viewport()).await?;
        Ok(Self {
            window,
            raycaster,
            presenter,
            panel: DebugPanel::new(config.show_panel),
        })
    }

    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        self.presenter.handle_event(&self.window, event)
    }
}

impl RenderEngine for WindowEngine {
    fn render(&mut self, stage: &Stage, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        self.raycaster.render(stage, camera)?;
        let panel = &mut self.panel;
        self.presenter
            .present(&self.window, self.raycaster.frame(), |ctx| panel.show(ctx))
    }

    fn resize(&mut self, viewport: Viewport) {
        self.raycaster.resize(viewport);
        self.presenter.resize(viewport);
    }
}

pub struct App {
    config: PlaygroundConfig,
    window: Option<Arc<Window>>,
    engine: Option<WindowEngine>,
    chapter: Option<Chapter>,
    clock: Clock,
}

impl App {
    pub fn new(config: PlaygroundConfig) -> Self {
        Self {
            config,
            window: None,
            engine: None,
            chapter: None,
            clock: Clock::new(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(format!("Scene Playground - {}", self.config.chapter.title()))
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            self.config.window_width,
                            self.config.window_height,
                        )),
                )
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height)
            .or_else(|_| Viewport::new(self.config.window_width, self.config.window_height))?;

        let engine = pollster::block_on(WindowEngine::new(window.clone(), viewport, &self.config))
            .context("failed to initialize renderer")?;
        let mut chapter = Chapter::build(&self.config, viewport);
        chapter.start(&*window);

        self.window = Some(window);
        self.engine = Some(engine);
        self.chapter = Some(chapter);
        self.clock = Clock::new();
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(window), Some(engine), Some(chapter)) =
            (&self.window, &mut self.engine, &mut self.chapter)
        else {
            return;
        };

        let delta = self.clock.tick();
        engine
            .panel
            .set_model(PanelModel::capture(chapter, engine.raycaster.frame().dimensions()));

        if let Err(e) = chapter.tick(engine, &**window, delta) {
            log::warn!("Render error: {}", e);
        }

        // Panel edits from this frame land before the next tick
        chapter.apply_events(engine.panel.take_events());
    }

    fn resize(&mut self, width: u32, height: u32) {
        let Ok(viewport) = Viewport::new(width, height) else {
            log::debug!("ignoring resize to {}x{}", width, height);
            return;
        };
        if let Some(chapter) = &mut self.chapter {
            chapter.resize(viewport);
        }
        if let Some(engine) = &mut self.engine {
            engine.resize(viewport);
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(chapter) = &mut self.chapter {
            chapter.teardown();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let Some(engine) = &mut self.engine {
            if engine.handle_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Sink for runs without a window; the loop drives ticks itself
#[derive(Debug, Default)]
pub struct HeadlessSink;

impl FrameSink for HeadlessSink {
    fn request_frame(&self) {}
}

/// Tick a chapter `frames` times against the ray caster, then log FPS and a dump
pub fn run_headless(config: &PlaygroundConfig, frames: u64) -> Result<Chapter> {
    let viewport = Viewport::new(config.window_width, config.window_height)?;
    let mut engine = Raycaster::new(viewport, config.render_scale)?;
    let mut chapter = Chapter::build(config, viewport);
    let sink = HeadlessSink;
    let mut clock = Clock::new();

    chapter.start(&sink);
    for _ in 0..frames {
        chapter
            .tick(&mut engine, &sink, clock.tick())
            .context("headless render failed")?;
    }

    let rendered = chapter.scheduler().frames();
    let elapsed = clock.elapsed();
    log::info!(
        "Rendered {} frames in {:.2}s ({:.1} FPS)",
        rendered,
        elapsed,
        rendered as f32 / elapsed.max(f32::EPSILON)
    );
    log::info!("{}", format_dump(&chapter.dump()));

    chapter.teardown();
    Ok(chapter)
}
