use glam::Vec3;
use serde::Serialize;
use std::f32::consts::PI;

use crate::error::{LayoutError, finite, non_negative};

/// Even angular distribution over a bounded span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub count: usize,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Height of every slot above the ground.
    pub height: f32,
}

/// One slot on the arc, facing the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSlot {
    pub index: usize,
    pub angle: f32,
    pub position: Vec3,
    pub yaw: f32,
}

/// Place `count` slots from `start_angle` to `end_angle` inclusive.
///
/// Slot `i` sits at `t = i / (count - 1)` along the span, at
/// `(sin(angle) * r, height, cos(angle) * r)`, turned by `angle + π` to face
/// inward. Fewer than two slots has no defined spacing and is rejected.
pub fn arc_slots(spec: &ArcSpec) -> Result<Vec<ArcSlot>, LayoutError> {
    if spec.count < 2 {
        return Err(LayoutError::DegenerateArc { count: spec.count });
    }
    let radius = non_negative("arc.radius", spec.radius)?;
    let start = finite("arc.start_angle", spec.start_angle)?;
    let end = finite("arc.end_angle", spec.end_angle)?;
    let height = finite("arc.height", spec.height)?;
    if end <= start {
        return Err(LayoutError::EmptyArcSpan { start, end });
    }

    let span = end - start;
    let last = (spec.count - 1) as f32;
    let slots = (0..spec.count)
        .map(|index| {
            let t = index as f32 / last;
            let angle = start + t * span;
            ArcSlot {
                index,
                angle,
                position: Vec3::new(angle.sin() * radius, height, angle.cos() * radius),
                yaw: angle + PI,
            }
        })
        .collect();
    Ok(slots)
}
