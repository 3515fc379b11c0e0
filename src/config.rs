//! Board wiring and panel calibration for the ILI9488 + XPT2046 module.

/// XPT2046 chip select.
pub const TOUCH_CS_GPIO: u8 = 15;
/// XPT2046 PENIRQ, active low.
pub const TOUCH_IRQ_GPIO: u8 = 13;

// VSPI defaults on the ESP32 DevKit.
pub const TOUCH_SCK_GPIO: u8 = 18;
pub const TOUCH_MOSI_GPIO: u8 = 23;
pub const TOUCH_MISO_GPIO: u8 = 19;

// XPT2046 tops out at 2.5 MHz DCLK; stay under it.
pub const TOUCH_SPI_FREQ_KHZ: u32 = 2_000;

pub const SCREEN_WIDTH: u16 = 480;
pub const SCREEN_HEIGHT: u16 = 320;

// Raw ADC counts measured at the panel corners. The sensor is mounted
// mirrored on both axes, so the large reading sits at pixel 0.
pub const TOUCH_RAW_X_AT_LEFT: i32 = 3930;
pub const TOUCH_RAW_X_AT_RIGHT: i32 = 372;
pub const TOUCH_RAW_Y_AT_TOP: i32 = 3760;
pub const TOUCH_RAW_Y_AT_BOTTOM: i32 = 237;

/// Minimum `z1 + 4095 - z2` reading accepted as a press.
pub const TOUCH_PRESSURE_THRESHOLD: u16 = 400;
