use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One reading straight from the controller, in 12-bit ADC counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawPoint {
    pub x: u16,
    pub y: u16,
    /// Pressure estimate; larger means firmer contact.
    pub z: u16,
}

impl RawPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y, z: 0 }
    }
}

/// Display pixel coordinate.
///
/// Values are not clamped. A raw reading outside the calibrated window
/// extrapolates past the panel edges, so either component may be negative
/// or beyond the display extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn on_screen(&self) -> bool {
        (0..SCREEN_WIDTH as i32).contains(&self.x) && (0..SCREEN_HEIGHT as i32).contains(&self.y)
    }

    /// Pulls the point onto the last visible row/column.
    pub fn clamp_to_screen(self) -> Self {
        Self {
            x: self.x.clamp(0, SCREEN_WIDTH as i32 - 1),
            y: self.y.clamp(0, SCREEN_HEIGHT as i32 - 1),
        }
    }

    /// Pixel pair as `u16`, or `None` when the point lies off the panel.
    pub fn to_pixel(self) -> Option<(u16, u16)> {
        if self.on_screen() {
            Some((self.x as u16, self.y as u16))
        } else {
            None
        }
    }
}

#[cfg(feature = "graphics")]
impl From<ScreenPoint> for embedded_graphics::prelude::Point {
    fn from(value: ScreenPoint) -> Self {
        Self::new(value.x, value.y)
    }
}

#[cfg(test)]
mod tests;
