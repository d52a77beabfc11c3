use gallery_common::{FrameId, GalleryConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::arc::ArcSpec;
use crate::error::LayoutError;
use crate::forest::{ForestProp, ForestSpec, scatter_forest};
use crate::frames::{FramePlacement, place_frames};
use crate::pillars::{PillarPlacement, PillarRingSpec, pillar_ring};

/// Every static placement in the gallery, built once at scene construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub frames: Vec<FramePlacement>,
    pub pillars: Vec<PillarPlacement>,
    pub forest: Vec<ForestProp>,
    /// Seed the forest was drawn with, when it was fixed.
    pub seed: Option<u64>,
}

impl SceneLayout {
    /// Build the layout described by `config`.
    ///
    /// The forest is reproducible when `forest.seed` is set; otherwise it is
    /// drawn from an OS-seeded generator and differs per run.
    pub fn build(config: &GalleryConfig) -> Result<Self, LayoutError> {
        let seed = config.forest.seed;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut layout = Self::build_with_rng(config, &mut rng)?;
        layout.seed = seed;
        Ok(layout)
    }

    /// Build the layout drawing the forest from a caller-supplied generator.
    pub fn build_with_rng<R: Rng + ?Sized>(
        config: &GalleryConfig,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        let _span = tracing::info_span!("scene_layout").entered();
        let pavilion = &config.pavilion;

        let arc = ArcSpec {
            count: config.frames.count,
            radius: pavilion.radius - pavilion.frame_inset,
            start_angle: pavilion.arc_start,
            end_angle: pavilion.arc_end,
            height: pavilion.frame_height,
        };
        let frames = place_frames(
            &arc,
            pavilion.frame_scale,
            &config.frames.images,
            &config.frames.fallback_image,
        )?;

        let pillars = pillar_ring(&PillarRingSpec {
            count: pavilion.pillar_count,
            radius: pavilion.radius,
            entrance_gap: pavilion.entrance_gap,
        })?;

        let forest_config = &config.forest;
        let forest = scatter_forest(
            &ForestSpec {
                count: forest_config.count,
                clearing_radius: forest_config.clearing_radius,
                forest_radius: forest_config.forest_radius,
                base_scale: forest_config.base_scale,
                scale_range: forest_config.scale_range,
                palette: forest_config.palette.clone(),
            },
            rng,
        )?;

        tracing::info!(
            frames = frames.len(),
            pillars = pillars.len(),
            props = forest.len(),
            "scene layout built"
        );

        Ok(Self {
            frames,
            pillars,
            forest,
            seed: None,
        })
    }

    pub fn frame(&self, id: &FrameId) -> Option<&FramePlacement> {
        self.frames.iter().find(|f| &f.id == id)
    }
}
