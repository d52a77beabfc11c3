use anyhow::Context;
use clap::{Parser, Subcommand};
use gallery_common::GalleryConfig;
use gallery_input::{LookDelta, MotionIntent};
use gallery_layout::SceneLayout;
use gallery_locomotion::LocomotionController;
use gallery_render::{DebugTextRenderer, RenderView, Renderer, TextureCache};
use gallery_session::{HoverTracker, SessionState, pick_frame};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery-cli", about = "CLI tool for the art gallery core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML configuration file; defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the configured constants
    Info,
    /// Build the scene layout and print it
    Layout {
        /// Fixed forest seed
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate held input from the start pose and print where the camera ends up
    Walk {
        /// Simulated duration in seconds
        #[arg(long, default_value = "1.0")]
        seconds: f32,
        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
        #[arg(long)]
        forward: bool,
        #[arg(long)]
        backward: bool,
        #[arg(long)]
        left: bool,
        #[arg(long)]
        right: bool,
        /// Joystick deflection on x, in [-1, 1]
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        stick_x: f32,
        /// Joystick deflection on y, in [-1, 1]; negative is forward
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        stick_y: f32,
        /// Horizontal look delta applied on the first frame
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        look_dx: f32,
        /// Vertical look delta applied on the first frame
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        look_dy: f32,
    },
    /// Print the debug text rendering from the start pose
    Render {
        /// Fixed forest seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GalleryConfig> {
    match path {
        Some(path) => GalleryConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GalleryConfig::default()),
    }
}

/// Longest simulated walk, in frames.
const MAX_WALK_FRAMES: u32 = 1_000_000;

fn walk_frames(seconds: f32, fps: u32) -> anyhow::Result<u32> {
    anyhow::ensure!(fps > 0, "fps must be positive");
    anyhow::ensure!(
        seconds.is_finite() && seconds >= 0.0,
        "seconds must be a non-negative number"
    );
    let frames = (f64::from(seconds) * f64::from(fps)).round();
    anyhow::ensure!(
        frames <= f64::from(MAX_WALK_FRAMES),
        "walk of {frames} frames exceeds the limit of {MAX_WALK_FRAMES}"
    );
    Ok(frames as u32)
}

fn build_scene(config: &GalleryConfig) -> anyhow::Result<SceneLayout> {
    SceneLayout::build(config).context("building scene layout")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = load_config(cli.config.as_ref())?;
    tracing::debug!(config = ?cli.config, "configuration loaded");

    match cli.command {
        Commands::Info => {
            println!("gallery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", gallery_common::crate_info());
            println!("input: {}", gallery_input::crate_info());
            println!("locomotion: {}", gallery_locomotion::crate_info());
            println!("layout: {}", gallery_layout::crate_info());
            println!("session: {}", gallery_session::crate_info());
            println!("render: {}", gallery_render::crate_info());
            println!();
            print!("{}", config.to_yaml_string()?);
        }
        Commands::Layout { seed, json } => {
            if seed.is_some() {
                config.forest.seed = seed;
            }
            let scene = build_scene(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&scene)?);
                return Ok(());
            }
            println!(
                "Layout: {} frames, {} pillars, {} forest props (seed={})",
                scene.frames.len(),
                scene.pillars.len(),
                scene.forest.len(),
                scene.seed.map_or_else(|| "random".into(), |s| s.to_string())
            );
            for frame in &scene.frames {
                let p = frame.position;
                println!(
                    "  {} pos=({:.2}, {:.2}, {:.2}) yaw={:.3} image={}",
                    frame.id, p.x, p.y, p.z, frame.yaw, frame.image_ref
                );
            }
            for pillar in &scene.pillars {
                let p = pillar.position;
                println!(
                    "  pillar {:>2} angle={:.3} pos=({:.2}, {:.2})",
                    pillar.index, pillar.angle, p.x, p.z
                );
            }
        }
        Commands::Walk {
            seconds,
            fps,
            forward,
            backward,
            left,
            right,
            stick_x,
            stick_y,
            look_dx,
            look_dy,
        } => {
            let frames = walk_frames(seconds, fps)?;
            let scene = build_scene(&config)?;
            let mut controller = LocomotionController::new(&config.camera);
            let mut session = SessionState::new(config.input.mobile_width_threshold);
            let mut hover = HoverTracker::new();
            controller.start();

            let intent = MotionIntent {
                move_forward: forward,
                move_backward: backward,
                move_left: left,
                move_right: right,
                joystick_x: stick_x.clamp(-1.0, 1.0),
                joystick_y: stick_y.clamp(-1.0, 1.0),
            };
            let dt = 1.0 / fps as f32;
            let mut look = LookDelta::new(look_dx, look_dy);
            for _ in 0..frames {
                let pose = *controller.update(&intent, std::mem::take(&mut look), dt);
                let picked = pick_frame(&pose, &scene.frames).map(|frame| &frame.id);
                for event in hover.update(picked) {
                    session.apply(event);
                }
            }
            tracing::debug!(frames, hovered = ?session.hovered(), "walk finished");

            let pose = controller.pose();
            println!("Walked {frames} frames at {fps} fps");
            println!(
                "Pose: pos=({:.3}, {:.3}, {:.3}) yaw={:.3} pitch={:.3}",
                pose.position.x, pose.position.y, pose.position.z, pose.yaw, pose.pitch
            );
            match session.hovered() {
                Some(id) => println!("Hovering: {id}"),
                None => println!("Hovering: nothing"),
            }
        }
        Commands::Render { seed } => {
            if seed.is_some() {
                config.forest.seed = seed;
            }
            let scene = build_scene(&config)?;
            let controller = LocomotionController::new(&config.camera);
            let mut session = SessionState::new(config.input.mobile_width_threshold);
            let mut hover = HoverTracker::new();
            let picked = pick_frame(controller.pose(), &scene.frames).map(|frame| &frame.id);
            for event in hover.update(picked) {
                session.apply(event);
            }
            let mut textures = TextureCache::new();
            for frame in &scene.frames {
                textures.request(session.texture_ref(frame));
            }
            let view = RenderView::from_pose(controller.pose());
            let renderer = DebugTextRenderer::with_textures(textures);
            print!("{}", renderer.render(&scene, &view, &session));
        }
    }

    Ok(())
}
