//! Turns touch controller readings into display pixels.

use crate::{
    calibration::Calibration,
    platform::TouchSensor,
    types::{RawPoint, ScreenPoint},
};

#[derive(Debug, PartialEq, Eq)]
pub enum TouchError<E> {
    Sensor(E),
}

impl<E> From<E> for TouchError<E> {
    fn from(value: E) -> Self {
        Self::Sensor(value)
    }
}

pub struct TouchReader<S> {
    sensor: S,
    calibration: Calibration,
}

impl<S> TouchReader<S>
where
    S: TouchSensor,
{
    pub fn new(sensor: S) -> Self {
        Self::with_calibration(sensor, Calibration::DEFAULT)
    }

    pub fn with_calibration(sensor: S, calibration: Calibration) -> Self {
        Self {
            sensor,
            calibration,
        }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn release(self) -> S {
        self.sensor
    }

    /// Current touch in screen pixels, `None` when the panel is idle.
    ///
    /// A failed bus transaction is reported as no touch.
    pub fn poll(&mut self) -> Option<ScreenPoint> {
        self.try_poll().ok().flatten()
    }

    pub fn try_poll(&mut self) -> Result<Option<ScreenPoint>, TouchError<S::Error>> {
        Ok(self.try_poll_raw()?.map(|raw| self.calibration.map(raw)))
    }

    /// Same as [`Self::try_poll`] but keeps the controller's raw counts.
    pub fn try_poll_raw(&mut self) -> Result<Option<RawPoint>, TouchError<S::Error>> {
        if !self.sensor.touched()? {
            return Ok(None);
        }
        Ok(Some(self.sensor.read_point()?))
    }
}

/// Transition between two consecutive polls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEdge {
    Down(ScreenPoint),
    Move(ScreenPoint),
    /// Carries the last point seen before the release.
    Up(ScreenPoint),
}

impl TouchEdge {
    /// `None` while idle or while the touch holds the same pixel.
    pub fn between(last: Option<ScreenPoint>, now: Option<ScreenPoint>) -> Option<Self> {
        match (last, now) {
            (None, Some(point)) => Some(Self::Down(point)),
            (Some(prev), Some(point)) if prev != point => Some(Self::Move(point)),
            (Some(prev), None) => Some(Self::Up(prev)),
            _ => None,
        }
    }

    pub fn point(&self) -> ScreenPoint {
        match *self {
            Self::Down(point) | Self::Move(point) | Self::Up(point) => point,
        }
    }
}
