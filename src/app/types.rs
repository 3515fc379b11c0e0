use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    delay::Delay,
    gpio::{Input, Output},
    spi::master::Spi,
    Blocking,
};
use resistouch::{TouchReader, Xpt2046};

pub(crate) type TouchSpi = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, Delay>;
pub(crate) type TouchIrqPin = Input<'static>;
pub(crate) type TouchDriver = TouchReader<Xpt2046<TouchSpi, TouchIrqPin>>;
