//! Resistive touch input for an ILI9488 + XPT2046 480x320 TFT.
//!
//! The library is platform agnostic: the XPT2046 driver speaks
//! `embedded-hal` 1.0, and [`touch::TouchReader`] turns whatever
//! [`platform::TouchSensor`] it is given into screen pixels. The ESP32
//! firmware lives behind the `esp-hal-runtime` feature.

#![cfg_attr(not(test), no_std)]

pub mod calibration;
pub mod config;
pub mod drivers;
pub mod platform;
pub mod touch;
pub mod types;

pub use calibration::{AxisMap, Calibration, CalibrationError};
pub use drivers::xpt2046::{NoIrq, Xpt2046, Xpt2046Error};
pub use platform::TouchSensor;
pub use touch::{TouchEdge, TouchError, TouchReader};
pub use types::{Axis, RawPoint, ScreenPoint};
