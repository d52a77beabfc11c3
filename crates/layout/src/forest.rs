use glam::Vec3;
use rand::Rng;
use serde::Serialize;
use std::f32::consts::TAU;

use crate::error::{LayoutError, non_negative};

/// Parameters for scattering props in the annulus around the clearing.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestSpec {
    pub count: usize,
    pub clearing_radius: f32,
    pub forest_radius: f32,
    pub base_scale: f32,
    pub scale_range: f32,
    pub palette: Vec<String>,
}

/// A single scattered prop (a tree). Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestProp {
    pub position: Vec3,
    pub scale: f32,
    pub color_ref: String,
}

impl ForestProp {
    /// Horizontal distance from the pavilion center.
    pub fn radial_distance(&self) -> f32 {
        Vec3::new(self.position.x, 0.0, self.position.z).length()
    }
}

/// Draw `count` independent props from `rng`.
///
/// Each prop takes a uniform angle, a radius uniform in
/// `[clearing_radius, forest_radius]`, a scale of
/// `base_scale + u * scale_range` and a uniformly picked palette color.
/// Props may overlap.
pub fn scatter_forest<R: Rng + ?Sized>(
    spec: &ForestSpec,
    rng: &mut R,
) -> Result<Vec<ForestProp>, LayoutError> {
    let clearing = non_negative("forest.clearing_radius", spec.clearing_radius)?;
    let forest = non_negative("forest.forest_radius", spec.forest_radius)?;
    if forest < clearing {
        return Err(LayoutError::InvalidRadii { clearing, forest });
    }
    let base_scale = non_negative("forest.base_scale", spec.base_scale)?;
    let scale_range = non_negative("forest.scale_range", spec.scale_range)?;
    if spec.palette.is_empty() {
        return Err(LayoutError::EmptyPalette);
    }

    let band = forest - clearing;
    let props = (0..spec.count)
        .map(|_| {
            let angle = rng.random::<f32>() * TAU;
            // `min` guards the upper bound against rounding in the multiply-add.
            let radius = (clearing + rng.random::<f32>() * band).min(forest);
            let scale = base_scale + rng.random::<f32>() * scale_range;
            let color = &spec.palette[rng.random_range(0..spec.palette.len())];
            ForestProp {
                position: Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius),
                scale,
                color_ref: color.clone(),
            }
        })
        .collect();
    Ok(props)
}
