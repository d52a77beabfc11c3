use glam::Vec3;
use serde::Serialize;
use std::f32::consts::{PI, TAU};

use crate::error::{LayoutError, finite, non_negative};

/// A full ring of evenly spaced angles with an entrance cut out around angle 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarRingSpec {
    pub count: usize,
    pub radius: f32,
    pub entrance_gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarPlacement {
    /// Position of this pillar on the full ring, before the entrance cut.
    pub index: usize,
    pub angle: f32,
    pub position: Vec3,
}

/// Place pillars at `i / count * 2π`, skipping angles in `[0, gap)` and
/// `(2π - gap, 2π]`.
pub fn pillar_ring(spec: &PillarRingSpec) -> Result<Vec<PillarPlacement>, LayoutError> {
    let radius = non_negative("pillars.radius", spec.radius)?;
    let gap = finite("pillars.entrance_gap", spec.entrance_gap)?;
    if !(0.0..PI).contains(&gap) {
        return Err(LayoutError::InvalidGap { gap });
    }

    let pillars = (0..spec.count)
        .filter_map(|index| {
            let angle = index as f32 / spec.count as f32 * TAU;
            let in_entrance = angle < gap || angle > TAU - gap;
            (!in_entrance).then(|| PillarPlacement {
                index,
                angle,
                position: Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius),
            })
        })
        .collect();
    Ok(pillars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(count: usize, gap: f32) -> PillarRingSpec {
        PillarRingSpec {
            count,
            radius: 16.0,
            entrance_gap: gap,
        }
    }

    #[test]
    fn sixteen_pillars_leave_an_entrance() {
        let pillars = pillar_ring(&ring(16, 0.6)).unwrap();
        // Slots 0, 1 and 15 fall inside the entrance.
        let indices: Vec<usize> = pillars.iter().map(|p| p.index).collect();
        assert_eq!(indices, (2..=14).collect::<Vec<_>>());
        for p in &pillars {
            assert!(p.angle >= 0.6 && p.angle <= TAU - 0.6);
        }
    }

    #[test]
    fn boundary_angles_are_excluded() {
        let pillars = pillar_ring(&ring(16, 0.6)).unwrap();
        assert!(pillars.iter().all(|p| p.angle != 0.0 && p.angle != TAU));
    }

    #[test]
    fn zero_gap_keeps_full_ring() {
        assert_eq!(pillar_ring(&ring(8, 0.0)).unwrap().len(), 8);
    }

    #[test]
    fn pillars_sit_on_the_ring() {
        for p in pillar_ring(&ring(12, 0.4)).unwrap() {
            assert!((p.position.length() - 16.0).abs() < 1e-4);
            assert_eq!(p.position.y, 0.0);
        }
    }

    #[test]
    fn no_pillars_is_fine() {
        assert!(pillar_ring(&ring(0, 0.6)).unwrap().is_empty());
    }

    #[test]
    fn gap_must_be_below_half_turn() {
        assert_eq!(
            pillar_ring(&ring(16, PI)),
            Err(LayoutError::InvalidGap { gap: PI })
        );
        assert!(pillar_ring(&ring(16, -0.1)).is_err());
    }
}
