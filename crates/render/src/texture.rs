use gallery_layout::FramePlacement;
use gallery_session::SessionState;
use std::collections::BTreeMap;

/// Shown on a frame until its image arrives, and forever if it fails.
pub const PLACEHOLDER_COLOR: &str = "#222222";
/// Ground color when the ground texture is unavailable.
pub const GROUND_FALLBACK: &str = "#050a05";

const BORDER: &str = "#111111";
const BORDER_HOVERED: &str = "#333333";
const MAT: &str = "#eeeeee";
const MAT_HOVERED: &str = "#ffffff";

/// Load outcome for one texture reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// Load status per texture reference. Loading itself is the host's job.
#[derive(Debug, Clone, Default)]
pub struct TextureCache {
    entries: BTreeMap<String, TextureStatus>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `reference`. Returns true if it was not known yet.
    pub fn request(&mut self, reference: &str) -> bool {
        if self.entries.contains_key(reference) {
            return false;
        }
        self.entries
            .insert(reference.to_string(), TextureStatus::Pending);
        true
    }

    pub fn mark_loaded(&mut self, reference: &str) {
        self.entries
            .insert(reference.to_string(), TextureStatus::Loaded);
    }

    /// Record a failed load. The surface keeps its placeholder.
    pub fn mark_failed(&mut self, reference: &str, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(reference, %reason, "texture failed to load");
        self.entries
            .insert(reference.to_string(), TextureStatus::Failed(reason));
    }

    /// Status of `reference`; unknown references count as pending.
    pub fn status(&self, reference: &str) -> &TextureStatus {
        self.entries.get(reference).unwrap_or(&TextureStatus::Pending)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of references in each state: (pending, loaded, failed).
    pub fn counts(&self) -> (usize, usize, usize) {
        self.entries
            .values()
            .fold((0, 0, 0), |(p, l, f), status| match status {
                TextureStatus::Pending => (p + 1, l, f),
                TextureStatus::Loaded => (p, l + 1, f),
                TextureStatus::Failed(_) => (p, l, f + 1),
            })
    }
}

/// What a surface is painted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceMaterial {
    Image(String),
    Color(&'static str),
}

/// Materials for the three layers of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMaterial {
    pub picture: SurfaceMaterial,
    pub border: &'static str,
    pub mat: &'static str,
}

/// Resolve a frame's materials from its texture status and hover state.
pub fn frame_material(
    frame: &FramePlacement,
    session: &SessionState,
    cache: &TextureCache,
) -> FrameMaterial {
    let reference = session.texture_ref(frame);
    let picture = match cache.status(reference) {
        TextureStatus::Loaded => SurfaceMaterial::Image(reference.to_string()),
        TextureStatus::Pending | TextureStatus::Failed(_) => {
            SurfaceMaterial::Color(PLACEHOLDER_COLOR)
        }
    };
    let (border, mat) = if session.is_hovered(&frame.id) {
        (BORDER_HOVERED, MAT_HOVERED)
    } else {
        (BORDER, MAT)
    };
    FrameMaterial {
        picture,
        border,
        mat,
    }
}

pub fn ground_material(reference: &str, cache: &TextureCache) -> SurfaceMaterial {
    match cache.status(reference) {
        TextureStatus::Loaded => SurfaceMaterial::Image(reference.to_string()),
        _ => SurfaceMaterial::Color(GROUND_FALLBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_common::FrameId;
    use gallery_session::HoverEvent;
    use glam::Vec3;

    fn frame() -> FramePlacement {
        FramePlacement {
            id: FrameId::indexed(0),
            position: Vec3::ZERO,
            yaw: 0.0,
            scale: Vec3::ONE,
            image_ref: "a.jpg".into(),
        }
    }

    #[test]
    fn pending_and_failed_show_placeholder() {
        let session = SessionState::new(1024.0);
        let mut cache = TextureCache::new();
        assert!(cache.request("a.jpg"));
        assert!(!cache.request("a.jpg"));
        assert_eq!(
            frame_material(&frame(), &session, &cache).picture,
            SurfaceMaterial::Color(PLACEHOLDER_COLOR)
        );
        cache.mark_failed("a.jpg", "404");
        assert_eq!(
            frame_material(&frame(), &session, &cache).picture,
            SurfaceMaterial::Color(PLACEHOLDER_COLOR)
        );
    }

    #[test]
    fn loaded_shows_image() {
        let session = SessionState::new(1024.0);
        let mut cache = TextureCache::new();
        cache.mark_loaded("a.jpg");
        assert_eq!(
            frame_material(&frame(), &session, &cache).picture,
            SurfaceMaterial::Image("a.jpg".into())
        );
    }

    #[test]
    fn hovered_frame_is_highlighted() {
        let mut session = SessionState::new(1024.0);
        let cache = TextureCache::new();
        let plain = frame_material(&frame(), &session, &cache);
        assert_eq!((plain.border, plain.mat), ("#111111", "#eeeeee"));

        session.apply(HoverEvent::Entered(FrameId::indexed(0)));
        let lit = frame_material(&frame(), &session, &cache);
        assert_eq!((lit.border, lit.mat), ("#333333", "#ffffff"));
    }

    #[test]
    fn ground_falls_back_to_color() {
        let mut cache = TextureCache::new();
        assert_eq!(
            ground_material("ground.jpg", &cache),
            SurfaceMaterial::Color(GROUND_FALLBACK)
        );
        cache.mark_loaded("ground.jpg");
        assert_eq!(
            ground_material("ground.jpg", &cache),
            SurfaceMaterial::Image("ground.jpg".into())
        );
    }

    #[test]
    fn counts_by_status() {
        let mut cache = TextureCache::new();
        cache.request("a");
        cache.mark_loaded("b");
        cache.mark_failed("c", "timeout");
        assert_eq!(cache.counts(), (1, 1, 1));
        assert_eq!(cache.len(), 3);
    }
}
