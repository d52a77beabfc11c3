use gallery_layout::FramePlacement;
use gallery_locomotion::CameraPose;
use glam::Vec3;

/// Distance along the ray to the frame's picture side, if the ray hits it.
///
/// Only the front face counts: rays arriving from behind the frame or
/// parallel to it miss.
pub fn ray_hits_frame(origin: Vec3, dir: Vec3, frame: &FramePlacement) -> Option<f32> {
    let normal = frame.facing();
    let denom = dir.dot(normal);
    if denom > -1e-6 {
        return None;
    }
    let t = (frame.position - origin).dot(normal) / denom;
    if t <= 0.0 {
        return None;
    }
    let local = origin + dir * t - frame.position;
    let (half_w, half_h) = frame.half_extents();
    let inside = local.dot(frame.right()).abs() <= half_w && local.y.abs() <= half_h;
    inside.then_some(t)
}

/// Nearest frame under the crosshair (the center of the view).
pub fn pick_frame<'a>(
    pose: &CameraPose,
    frames: &'a [FramePlacement],
) -> Option<&'a FramePlacement> {
    let dir = pose.forward();
    frames
        .iter()
        .filter_map(|frame| ray_hits_frame(pose.position, dir, frame).map(|t| (t, frame)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, frame)| frame)
}
