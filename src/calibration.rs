use crate::{
    config::{
        SCREEN_HEIGHT, SCREEN_WIDTH, TOUCH_RAW_X_AT_LEFT, TOUCH_RAW_X_AT_RIGHT,
        TOUCH_RAW_Y_AT_BOTTOM, TOUCH_RAW_Y_AT_TOP,
    },
    types::{Axis, RawPoint, ScreenPoint},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    /// Both raw endpoints of the axis are equal, so the map has no slope.
    DegenerateAxis(Axis),
}

/// Linear map from one raw axis onto one pixel axis.
///
/// `raw_from` lands on `px_from` and `raw_to` on `px_to`. Swapping the raw
/// endpoints relative to the pixel ones inverts the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisMap {
    pub raw_from: i32,
    pub raw_to: i32,
    pub px_from: i32,
    pub px_to: i32,
}

impl AxisMap {
    pub const fn new(raw_from: i32, raw_to: i32, px_from: i32, px_to: i32) -> Self {
        Self {
            raw_from,
            raw_to,
            px_from,
            px_to,
        }
    }

    pub const fn is_degenerate(&self) -> bool {
        self.raw_from == self.raw_to
    }

    /// `px_from + (raw - raw_from) * (px_to - px_from) / (raw_to - raw_from)`.
    ///
    /// Integer division truncates toward zero. Readings outside the raw
    /// window extrapolate instead of clamping; only a result beyond `i32`
    /// saturates.
    pub fn map(&self, raw: i32) -> i32 {
        // Differences of two i32 need 33 bits and their product 66.
        let span = i128::from(self.raw_to) - i128::from(self.raw_from);
        if span == 0 {
            return self.px_from;
        }
        let offset = i128::from(raw) - i128::from(self.raw_from);
        let extent = i128::from(self.px_to) - i128::from(self.px_from);
        let mapped = i128::from(self.px_from) + offset * extent / span;
        mapped.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calibration {
    pub x: AxisMap,
    pub y: AxisMap,
}

impl Calibration {
    /// Corner readings of the mounted panel, both axes inverted.
    pub const DEFAULT: Self = Self {
        x: AxisMap::new(
            TOUCH_RAW_X_AT_LEFT,
            TOUCH_RAW_X_AT_RIGHT,
            0,
            SCREEN_WIDTH as i32,
        ),
        y: AxisMap::new(
            TOUCH_RAW_Y_AT_TOP,
            TOUCH_RAW_Y_AT_BOTTOM,
            0,
            SCREEN_HEIGHT as i32,
        ),
    };

    pub fn new(x: AxisMap, y: AxisMap) -> Result<Self, CalibrationError> {
        if x.is_degenerate() {
            return Err(CalibrationError::DegenerateAxis(Axis::X));
        }
        if y.is_degenerate() {
            return Err(CalibrationError::DegenerateAxis(Axis::Y));
        }
        Ok(Self { x, y })
    }

    pub fn map(&self, raw: RawPoint) -> ScreenPoint {
        ScreenPoint {
            x: self.x.map(i32::from(raw.x)),
            y: self.y.map(i32::from(raw.y)),
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
