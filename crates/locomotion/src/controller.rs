use gallery_common::CameraConfig;
use gallery_input::{FrameInput, LookDelta, MotionIntent};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::pose::CameraPose;

/// Session lifecycle as seen by locomotion.
///
/// `Idle -> Active` is one-way: the session never pauses or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Before the visitor enters; the camera holds its start pose.
    #[default]
    Idle,
    /// Every frame integrates input into the pose.
    Active,
}

/// Sole owner and writer of the camera pose.
///
/// Each active frame applies look, then translates on the horizontal plane
/// along the updated yaw, then re-imposes the eye height and the square
/// boundary.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: CameraConfig,
    pose: CameraPose,
    phase: SessionPhase,
}

impl LocomotionController {
    pub fn new(config: &CameraConfig) -> Self {
        let mut controller = Self {
            pose: CameraPose::new(config.start_position, config.start_yaw, 0.0),
            config: config.clone(),
            phase: SessionPhase::Idle,
        };
        controller.constrain();
        controller
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Enter the session. Returns false if it was already active.
    pub fn start(&mut self) -> bool {
        if self.phase == SessionPhase::Active {
            return false;
        }
        self.phase = SessionPhase::Active;
        tracing::info!(position = ?self.pose.position, "session started");
        true
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// `look` must already be drained from its source; the controller applies
    /// it once and keeps nothing. While idle the pose is left untouched.
    pub fn update(&mut self, motion: &MotionIntent, look: LookDelta, dt: f32) -> &CameraPose {
        if self.phase == SessionPhase::Idle {
            return &self.pose;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.apply_look(look);

        let planar = motion.planar();
        if planar.exceeds(self.config.dead_zone) {
            let step = self.config.move_speed * dt;
            let translation = self.pose.planar_forward() * (-planar.z * step)
                + self.pose.planar_right() * (planar.x * step);
            self.pose.position += translation;
        }

        self.constrain();
        tracing::trace!(pose = ?self.pose, "locomotion step");
        &self.pose
    }

    /// [`LocomotionController::update`] with a bundled frame of input.
    pub fn step(&mut self, input: FrameInput, dt: f32) -> &CameraPose {
        self.update(&input.motion, input.look, dt)
    }

    fn apply_look(&mut self, look: LookDelta) {
        if look.is_zero() {
            return;
        }
        let sensitivity = self.config.look_sensitivity;
        let yaw = self.pose.yaw - look.dx * sensitivity;
        let pitch = self.pose.pitch - look.dy * sensitivity;
        // Yaw and pitch are written only when finite; a NaN angle cannot be clamped back.
        if yaw.is_finite() {
            self.pose.yaw = yaw;
        }
        if pitch.is_finite() {
            self.pose.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
        }
    }

    fn constrain(&mut self) {
        let limit = self.config.boundary_limit;
        let p = self.pose.position;
        self.pose.position = Vec3::new(
            p.x.clamp(-limit, limit),
            self.config.eye_height,
            p.z.clamp(-limit, limit),
        );
        self.pose.pitch = self.pose.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> LocomotionController {
        let mut c = LocomotionController::new(&CameraConfig::default());
        c.start();
        c
    }

    fn forward() -> MotionIntent {
        MotionIntent {
            move_forward: true,
            ..MotionIntent::default()
        }
    }

    #[test]
    fn starts_idle_at_start_pose() {
        let c = LocomotionController::new(&CameraConfig::default());
        assert_eq!(c.phase(), SessionPhase::Idle);
        assert_eq!(c.pose().position, Vec3::new(0.0, 1.7, 28.0));
    }

    #[test]
    fn idle_ignores_input() {
        let mut c = LocomotionController::new(&CameraConfig::default());
        let before = *c.pose();
        c.update(&forward(), LookDelta::new(100.0, 100.0), 1.0);
        assert_eq!(*c.pose(), before);
    }

    #[test]
    fn start_is_one_way() {
        let mut c = LocomotionController::new(&CameraConfig::default());
        assert!(c.start());
        assert!(!c.start());
        assert!(c.is_active());
    }

    #[test]
    fn walking_forward_one_second_covers_move_speed() {
        let mut c = active();
        let pose = *c.update(&forward(), LookDelta::ZERO, 1.0);
        assert!((pose.position.z - 20.0).abs() < 1e-4);
        assert!(pose.position.x.abs() < 1e-4);
        assert_eq!(pose.position.y, 1.7);
    }

    #[test]
    fn joystick_below_dead_zone_does_not_move() {
        let mut c = active();
        let intent = MotionIntent {
            joystick_x: 0.05,
            joystick_y: -0.1,
            ..MotionIntent::default()
        };
        let before = c.pose().position;
        c.update(&intent, LookDelta::ZERO, 1.0);
        assert_eq!(c.pose().position, before);
    }

    #[test]
    fn strafe_right_at_yaw_zero_moves_positive_x() {
        let mut c = active();
        let intent = MotionIntent {
            move_right: true,
            ..MotionIntent::default()
        };
        c.update(&intent, LookDelta::ZERO, 0.5);
        assert!((c.pose().position.x - 4.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_clamps_under_extreme_look() {
        let mut c = active();
        for _ in 0..50 {
            c.update(&MotionIntent::default(), LookDelta::new(0.0, -10_000.0), 0.016);
            assert!(c.pose().pitch <= FRAC_PI_2);
        }
        assert_eq!(c.pose().pitch, FRAC_PI_2);
        c.update(&MotionIntent::default(), LookDelta::new(0.0, 1e9), 0.016);
        assert_eq!(c.pose().pitch, -FRAC_PI_2);
    }

    #[test]
    fn look_applies_before_translation() {
        let mut c = active();
        // Turn a quarter right (yaw -> -π/2), then walk forward in the same frame.
        let dx = FRAC_PI_2 / c.config().look_sensitivity;
        c.update(&forward(), LookDelta::new(dx, 0.0), 1.0);
        let p = c.pose().position;
        assert!((p.x - 8.0).abs() < 1e-3);
        assert!((p.z - 28.0).abs() < 1e-3);
    }

    #[test]
    fn looking_up_does_not_slow_walking() {
        let mut c = active();
        c.update(&MotionIntent::default(), LookDelta::new(0.0, -250.0), 0.0);
        assert!(c.pose().pitch > 1.0);
        c.update(&forward(), LookDelta::ZERO, 1.0);
        assert!((c.pose().position.z - 20.0).abs() < 1e-4);
        assert_eq!(c.pose().position.y, 1.7);
    }

    #[test]
    fn square_boundary_clamps_each_axis() {
        let mut c = active();
        let intent = MotionIntent {
            move_forward: true,
            move_left: true,
            ..MotionIntent::default()
        };
        for _ in 0..100 {
            c.update(&intent, LookDelta::ZERO, 0.5);
            let p = c.pose().position;
            assert!((-80.0..=80.0).contains(&p.x));
            assert!((-80.0..=80.0).contains(&p.z));
            assert_eq!(p.y, 1.7);
        }
        // Corner of the square, not a circle.
        assert_eq!(c.pose().position.x, -80.0);
        assert_eq!(c.pose().position.z, -80.0);
    }

    #[test]
    fn start_pose_outside_bounds_is_constrained() {
        let config = CameraConfig {
            start_position: Vec3::new(500.0, 40.0, -500.0),
            ..CameraConfig::default()
        };
        let c = LocomotionController::new(&config);
        assert_eq!(c.pose().position, Vec3::new(80.0, 1.7, -80.0));
    }

    #[test]
    fn huge_look_delta_keeps_pose_finite() {
        let mut c = active();
        c.update(&forward(), LookDelta::new(f32::MAX, f32::MAX), 0.5);
        c.update(&forward(), LookDelta::new(f32::INFINITY, f32::NAN), 0.5);
        let pose = c.pose();
        assert!(pose.yaw.is_finite());
        assert!(pose.pitch.is_finite());
        assert!((-80.0..=80.0).contains(&pose.position.x));
        assert!((-80.0..=80.0).contains(&pose.position.z));
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let mut c = active();
        let before = c.pose().position;
        c.update(&forward(), LookDelta::ZERO, f32::NAN);
        c.update(&forward(), LookDelta::ZERO, -1.0);
        assert_eq!(c.pose().position, before);
    }
}
