use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_demos::cli::Cli;
use cube_demos::config::DemoConfig;
use cube_demos::core::{Clock, FrameLoop, WinitController};
use cube_demos::demos::{create_demo, Demo};
use cube_demos::mesh::load_obj_file;
use cube_demos::renderer::Renderer;

const FALLING_OBJ_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    demo: Box<dyn Demo>,
    config: DemoConfig,
    controller: WinitController,
    clock: Clock,
    frame_loop: FrameLoop,
    show_ui: bool,
}

impl App {
    fn new(demo: Box<dyn Demo>, config: DemoConfig, show_ui: bool) -> Self {
        Self {
            window: None,
            renderer: None,
            demo,
            config,
            controller: WinitController::new(),
            clock: Clock::new(),
            frame_loop: FrameLoop::new(),
            show_ui,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let show_ui = self.show_ui;
        let delta = self.clock.tick();
        let controller = &self.controller;

        let result = self.frame_loop.tick_with(
            self.demo.as_mut(),
            delta,
            |demo, frame| demo.update(frame, controller),
            |demo, _| {
                for (id, mesh) in demo.take_mesh_updates() {
                    renderer.update_mesh(id, &mesh);
                }
                let description = demo.frame(renderer.aspect());
                if show_ui {
                    let mut ui = |ctx: &egui::Context| demo.ui(ctx);
                    renderer.render(window, &description, Some(&mut ui))
                } else {
                    renderer.render(window, &description, None)
                }
            },
        );

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.demo.title())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.demo.meshes()))
        {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.clock.reset();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if self.show_ui {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window, &event) {
                    if let Some(input) = self.controller.process_consumed_event(&event) {
                        self.demo.handle_key(input);
                    }
                    return;
                }
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
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => {
                if let Some(input) = self.controller.process_event(&event) {
                    self.demo.handle_key(input);
                }
            }
            WindowEvent::Focused(false) => self.controller.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let falling_mesh = cli
        .mesh
        .as_ref()
        .map(|path| load_obj_file(path, FALLING_OBJ_COLOR))
        .transpose()?;

    let demo = create_demo(cli.demo, &config, falling_mesh);
    log::info!("{} - Escape to quit", demo.title());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(demo, config, !cli.no_ui);
    event_loop.run_app(&mut app)?;

    Ok(())
}
