use anyhow::{Context, Result};
use clap::Parser;
use gallery_common::GalleryConfig;
use gallery_input::{InputAggregator, platform};
use gallery_layout::SceneLayout;
use gallery_locomotion::LocomotionController;
use gallery_session::{DisplayProbe, HoverTracker, SessionState, pick_frame};
use glam::Vec2;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "gallery-desktop", about = "Walk the art gallery in a desktop window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Core state driven by window events.
struct Gallery {
    scene: SceneLayout,
    input: InputAggregator,
    controller: LocomotionController,
    session: SessionState,
    hover: HoverTracker,
    /// Set once a touch arrives; the window has no other way to tell.
    coarse_pointer: bool,
    last_frame: Instant,
}

impl Gallery {
    fn new(config: &GalleryConfig, viewport: Vec2) -> Result<Self> {
        let scene = SceneLayout::build(config).context("building scene layout")?;
        let mut session = SessionState::new(config.input.mobile_width_threshold);
        session.probe(DisplayProbe {
            viewport_width: viewport.x,
            coarse_pointer: false,
        });
        Ok(Self {
            scene,
            input: InputAggregator::new(&config.input, viewport),
            controller: LocomotionController::new(&config.camera),
            session,
            hover: HoverTracker::new(),
            coarse_pointer: false,
            last_frame: Instant::now(),
        })
    }

    fn probe(&mut self) {
        self.session.probe(DisplayProbe {
            viewport_width: self.input.viewport().x,
            coarse_pointer: self.coarse_pointer,
        });
    }

    fn update(&mut self, dt: f32) {
        let frame = self.input.frame_input();
        let pose = *self.controller.step(frame, dt);
        let picked = pick_frame(&pose, &self.scene.frames).map(|frame| &frame.id);
        for event in self.hover.update(picked) {
            self.session.apply(event);
        }
    }

    fn title(&self) -> String {
        if !self.controller.is_active() {
            return "Art Gallery | Click to Enter".into();
        }
        let pose = self.controller.pose();
        let hovered = self
            .session
            .hovered()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        format!(
            "Art Gallery | pos=({:.1}, {:.1}) yaw={:.2} | hover={} | {}",
            pose.position.x,
            pose.position.z,
            pose.yaw,
            hovered,
            self.session.affordance()
        )
    }
}

struct App {
    config: GalleryConfig,
    gallery: Option<Gallery>,
    window: Option<Window>,
    title: String,
}

impl App {
    fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            gallery: None,
            window: None,
            title: String::new(),
        }
    }

    fn capture_pointer(&mut self) {
        let (Some(window), Some(gallery)) = (&self.window, &mut self.gallery) else {
            return;
        };
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                gallery.input.set_pointer_locked(true);
            }
            Err(err) => tracing::warn!(%err, "pointer lock unavailable"),
        }
    }

    fn release_pointer(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        if let Some(gallery) = &mut self.gallery {
            gallery.input.set_pointer_locked(false);
        }
    }

    fn enter(&mut self) {
        if let Some(gallery) = &mut self.gallery {
            gallery.controller.start();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Art Gallery")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let viewport = Vec2::new(size.width as f32, size.height as f32);
        match Gallery::new(&self.config, viewport) {
            Ok(gallery) => self.gallery = Some(gallery),
            Err(err) => {
                tracing::error!("{err:#}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
        tracing::info!(width = size.width, height = size.height, "window created");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gallery) = &mut self.gallery {
                    gallery
                        .input
                        .resize(Vec2::new(new_size.width as f32, new_size.height as f32));
                    gallery.probe();
                }
            }
            WindowEvent::Focused(false) => {
                if let Some(gallery) = &mut self.gallery {
                    gallery.input.focus_lost();
                }
                self.release_pointer();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                match key {
                    KeyCode::Escape if pressed => self.release_pointer(),
                    KeyCode::Enter if pressed => self.enter(),
                    _ => {
                        let (Some(gallery), Some(name)) =
                            (&mut self.gallery, platform::key_name(key))
                        else {
                            return;
                        };
                        if pressed {
                            gallery.input.key_down(name);
                        } else {
                            gallery.input.key_up(name);
                        }
                    }
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                self.enter();
                self.capture_pointer();
            }
            WindowEvent::Touch(touch) => {
                let Some(gallery) = &mut self.gallery else {
                    return;
                };
                if !gallery.coarse_pointer {
                    gallery.coarse_pointer = true;
                    gallery.probe();
                }
                let event = platform::touch_event(&touch);
                if !gallery.controller.is_active() {
                    // The first tap only enters the gallery.
                    gallery.controller.start();
                    return;
                }
                gallery.input.touch(event);
            }
            WindowEvent::RedrawRequested => {
                let Some(gallery) = &mut self.gallery else {
                    return;
                };
                let now = Instant::now();
                let dt = (now - gallery.last_frame).as_secs_f32().min(0.1);
                gallery.last_frame = now;
                gallery.update(dt);

                let title = gallery.title();
                if title != self.title {
                    if let Some(window) = &self.window {
                        window.set_title(&title);
                    }
                    self.title = title;
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let (DeviceEvent::MouseMotion { delta }, Some(gallery)) = (event, &mut self.gallery) {
            gallery.input.mouse_moved(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => GalleryConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GalleryConfig::default(),
    };

    tracing::info!("gallery-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
