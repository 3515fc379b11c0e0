// 50 Hz is enough to follow a finger without hogging the SPI bus.
pub(crate) const TOUCH_POLL_MS: u64 = 20;
