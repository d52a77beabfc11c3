use gallery_layout::SceneLayout;
use gallery_locomotion::CameraPose;
use gallery_session::SessionState;
use glam::{Mat4, Vec3};
use std::fmt::Write;

use crate::texture::{SurfaceMaterial, TextureCache, frame_material};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// World-to-camera transform.
    pub view: Mat4,
}

impl RenderView {
    /// View through the camera pose, one unit along its look direction.
    pub fn from_pose(pose: &CameraPose) -> Self {
        Self {
            eye: pose.position,
            target: pose.position + pose.forward(),
            fov_degrees: 60.0,
            view: pose.view_matrix(),
        }
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_pose(&CameraPose::new(Vec3::new(0.0, 1.7, 28.0), 0.0, 0.0))
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene, the view and the session, then produces output.
/// It never writes back: the pose belongs to locomotion and hover to the session.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, scene: &SceneLayout, view: &RenderView, session: &SessionState)
    -> Self::Output;
}

/// Human-readable dump of what a frame would draw.
///
/// Used by the CLI and in tests to exercise the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    textures: TextureCache,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_textures(textures: TextureCache) -> Self {
        Self { textures }
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &SceneLayout, view: &RenderView, session: &SessionState) -> String {
        let mut out = String::new();
        let seed = scene
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string());
        let _ = writeln!(out, "=== Gallery (seed={seed}) ===");
        let _ = writeln!(
            out,
            "Frames: {}  Pillars: {}  Forest: {}",
            scene.frames.len(),
            scene.pillars.len(),
            scene.forest.len()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        );
        let (pending, loaded, failed) = self.textures.counts();
        let _ = writeln!(
            out,
            "Textures: {pending} pending, {loaded} loaded, {failed} failed"
        );

        for frame in &scene.frames {
            let p = frame.position;
            let material = frame_material(frame, session, &self.textures);
            let picture = match &material.picture {
                SurfaceMaterial::Image(reference) => reference.as_str(),
                SurfaceMaterial::Color(color) => color,
            };
            let marker = if session.is_hovered(&frame.id) { "*" } else { " " };
            let _ = writeln!(
                out,
                " {marker}[{}] pos=({:.2}, {:.2}, {:.2}) yaw={:.2} border={} picture={}",
                frame.id, p.x, p.y, p.z, frame.yaw, material.border, picture
            );
        }
        let _ = writeln!(out, "{}", session.affordance());
        out
    }
}
