/// Movement intent for one frame.
///
/// Recomputed every frame from live input sources. Keyboard flags and the
/// joystick vector are independent; both may contribute at once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionIntent {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Joystick deflection in `[-1, 1]`; positive is screen-right.
    pub joystick_x: f32,
    /// Joystick deflection in `[-1, 1]`; positive is screen-down (backward).
    pub joystick_y: f32,
}

/// Combined planar input: `x` strafes right, `z` moves backward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarInput {
    pub x: f32,
    pub z: f32,
}

impl PlanarInput {
    /// True when either axis exceeds the dead zone.
    pub fn exceeds(&self, dead_zone: f32) -> bool {
        self.x.abs() > dead_zone || self.z.abs() > dead_zone
    }
}

impl MotionIntent {
    /// Sum the keyboard and joystick contributions per axis.
    pub fn planar(&self) -> PlanarInput {
        let axis = |pos: bool, neg: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        PlanarInput {
            x: axis(self.move_right, self.move_left) + self.joystick_x,
            z: axis(self.move_backward, self.move_forward) + self.joystick_y,
        }
    }
}

/// Look movement accumulated since the last read, in look units
/// (touch pixels, or mouse pixels after pointer-lock scaling).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookDelta {
    pub dx: f32,
    pub dy: f32,
}

impl LookDelta {
    pub const ZERO: LookDelta = LookDelta { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    pub(crate) fn accumulate(&mut self, dx: f32, dy: f32) {
        // A non-finite sum would poison the camera forever, so the event is dropped.
        let (sum_x, sum_y) = (self.dx + dx, self.dy + dy);
        if sum_x.is_finite() && sum_y.is_finite() {
            self.dx = sum_x;
            self.dy = sum_y;
        }
    }
}
