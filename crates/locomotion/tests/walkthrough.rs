//! Raw input events through the aggregator into the controller, frame by frame.

use gallery_common::GalleryConfig;
use gallery_input::{InputAggregator, LookDelta, TouchEvent, TouchId, TouchPhase};
use gallery_locomotion::LocomotionController;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(390.0, 844.0);
const DT: f32 = 1.0 / 60.0;

fn setup() -> (InputAggregator, LocomotionController) {
    let config = GalleryConfig::default();
    let input = InputAggregator::new(&config.input, VIEWPORT);
    let mut controller = LocomotionController::new(&config.camera);
    controller.start();
    (input, controller)
}

fn touch(id: u64, phase: TouchPhase, point: Vec2) -> TouchEvent {
    TouchEvent {
        id: TouchId(id),
        phase,
        position: point,
    }
}

#[test]
fn held_key_walks_forward_over_sixty_frames() {
    let (mut input, mut controller) = setup();
    input.key_down("KeyW");
    for _ in 0..60 {
        controller.step(input.frame_input(), DT);
    }
    let pose = controller.pose();
    assert!((pose.position.z - 20.0).abs() < 1e-3);
    assert_eq!(pose.position.y, 1.7);
}

#[test]
fn touch_look_is_applied_once() {
    let (mut input, mut controller) = setup();
    input.touch(touch(1, TouchPhase::Started, Vec2::new(300.0, 400.0)));
    input.touch(touch(1, TouchPhase::Moved, Vec2::new(320.0, 400.0)));

    controller.step(input.frame_input(), DT);
    let yaw_after_first = controller.pose().yaw;
    assert!((yaw_after_first + 20.0 * 0.005).abs() < 1e-6);

    // No new movement: the next frame must not turn again.
    controller.step(input.frame_input(), DT);
    assert_eq!(controller.pose().yaw, yaw_after_first);
    assert_eq!(input.take_look_delta(), LookDelta::ZERO);
}

#[test]
fn joystick_release_stops_motion_immediately() {
    let (mut input, mut controller) = setup();
    let center = input.joystick().center();
    input.touch(touch(5, TouchPhase::Started, center));
    input.touch(touch(5, TouchPhase::Moved, center - Vec2::new(0.0, 80.0)));
    for _ in 0..30 {
        controller.step(input.frame_input(), DT);
    }
    let moved_to = controller.pose().position;
    assert!(moved_to.z < 28.0);

    input.touch(touch(5, TouchPhase::Ended, center - Vec2::new(0.0, 80.0)));
    for _ in 0..30 {
        controller.step(input.frame_input(), DT);
    }
    assert_eq!(controller.pose().position, moved_to);
}

#[test]
fn keyboard_and_joystick_stack() {
    let (mut input, mut controller) = setup();
    let center = input.joystick().center();
    input.key_down("ArrowUp");
    input.touch(touch(9, TouchPhase::Started, center - Vec2::new(0.0, 200.0)));
    controller.step(input.frame_input(), 0.5);
    // Keyboard (1.0) plus full joystick (1.0) at 8 u/s for half a second.
    assert!((controller.pose().position.z - 20.0).abs() < 1e-3);
}

#[test]
fn runaway_mouse_look_never_breaks_the_boundary() {
    let (mut input, mut controller) = setup();
    input.set_pointer_locked(true);
    for _ in 0..3 {
        input.mouse_moved(3.0e38, 0.0);
    }
    input.key_down("KeyW");
    for _ in 0..10 {
        controller.step(input.frame_input(), DT);
    }
    let pose = controller.pose();
    assert!(pose.yaw.is_finite());
    assert!((-80.0..=80.0).contains(&pose.position.x), "x = {}", pose.position.x);
    assert!((-80.0..=80.0).contains(&pose.position.z), "z = {}", pose.position.z);
}
