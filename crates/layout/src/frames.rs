use gallery_common::FrameId;
use glam::Vec3;
use serde::Serialize;

use crate::arc::{ArcSpec, arc_slots};
use crate::error::{LayoutError, non_negative};

/// Side length of a frame's outer border at unit scale.
pub const FRAME_OUTER_SIZE: f32 = 3.2;

/// A picture frame hung on the pavilion arc. Immutable once laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramePlacement {
    pub id: FrameId,
    pub position: Vec3,
    /// Rotation about world Y; the picture faces local +Z.
    pub yaw: f32,
    pub scale: Vec3,
    pub image_ref: String,
}

impl FramePlacement {
    /// Unit normal of the picture side.
    pub fn facing(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Unit vector along the picture's horizontal edge, left to right as seen
    /// by a viewer in front of it.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Half width and half height of the outer border in world units.
    pub fn half_extents(&self) -> (f32, f32) {
        let half = FRAME_OUTER_SIZE * 0.5;
        (half * self.scale.x, half * self.scale.y)
    }
}

/// Lay frames out on an arc, one per slot.
///
/// Slot `i` shows `images[i]`; slots past the end of the list show
/// `fallback_image`.
pub fn place_frames(
    arc: &ArcSpec,
    scale: f32,
    images: &[String],
    fallback_image: &str,
) -> Result<Vec<FramePlacement>, LayoutError> {
    let scale = non_negative("frames.scale", scale)?;
    let frames = arc_slots(arc)?
        .into_iter()
        .map(|slot| FramePlacement {
            id: FrameId::indexed(slot.index),
            position: slot.position,
            yaw: slot.yaw,
            scale: Vec3::splat(scale),
            image_ref: images
                .get(slot.index)
                .cloned()
                .unwrap_or_else(|| fallback_image.to_string()),
        })
        .collect();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f32::consts::TAU;

    fn arc(count: usize) -> ArcSpec {
        ArcSpec {
            count,
            radius: 14.5,
            start_angle: 0.5,
            end_angle: TAU - 0.5,
            height: 5.0,
        }
    }

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img-{i}")).collect()
    }

    #[test]
    fn ids_are_unique() {
        let frames = place_frames(&arc(10), 2.0, &images(10), "fallback").unwrap();
        let ids: HashSet<_> = frames.iter().map(|f| f.id.clone()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(frames[3].id, FrameId::indexed(3));
    }

    #[test]
    fn images_follow_slot_order_then_fallback() {
        let frames = place_frames(&arc(4), 2.0, &images(2), "fallback").unwrap();
        assert_eq!(frames[0].image_ref, "img-0");
        assert_eq!(frames[1].image_ref, "img-1");
        assert_eq!(frames[2].image_ref, "fallback");
        assert_eq!(frames[3].image_ref, "fallback");
    }

    #[test]
    fn scale_sets_extents() {
        let frames = place_frames(&arc(2), 2.0, &[], "fallback").unwrap();
        assert_eq!(frames[0].scale, Vec3::splat(2.0));
        assert_eq!(frames[0].half_extents(), (3.2, 3.2));
    }

    #[test]
    fn right_is_perpendicular_to_facing() {
        for frame in place_frames(&arc(5), 1.0, &[], "fallback").unwrap() {
            assert!(frame.right().dot(frame.facing()).abs() < 1e-6);
            // Viewer looks along -facing, so right is (-facing) × up.
            let expected = frame.facing().cross(Vec3::Y) * -1.0;
            assert!((frame.right() - expected).length() < 1e-5);
        }
    }

    #[test]
    fn single_frame_fails_fast() {
        let err = place_frames(&arc(1), 2.0, &images(1), "fallback").unwrap_err();
        assert_eq!(err, LayoutError::DegenerateArc { count: 1 });
    }

    #[test]
    fn negative_scale_is_rejected() {
        assert!(matches!(
            place_frames(&arc(3), -1.0, &[], "fallback"),
            Err(LayoutError::Negative { .. })
        ));
    }
}
