//! XPT2046 resistive touch controller over `embedded-hal` SPI.
//!
//! Every conversion is a three byte transfer: the control byte goes out
//! first, the 12-bit result comes back left aligned in the next two bytes
//! behind one busy bit.

use core::convert::Infallible;

use embedded_hal::{
    digital::{ErrorType, InputPin},
    spi::SpiDevice,
};

use crate::{config::TOUCH_PRESSURE_THRESHOLD, platform::TouchSensor, types::RawPoint};

// Start bit, channel, 12-bit mode, differential, PD=00 so PENIRQ stays armed.
const CMD_READ_X: u8 = 0xD0;
const CMD_READ_Y: u8 = 0x90;
const CMD_READ_Z1: u8 = 0xB0;
const CMD_READ_Z2: u8 = 0xC0;

const ADC_MAX: u16 = 0x0FFF;
const SAMPLES_PER_AXIS: usize = 3;

#[derive(Debug)]
pub enum Xpt2046Error<SpiE, PinE> {
    Spi(SpiE),
    Irq(PinE),
}

/// Stand-in PENIRQ for boards that leave the line unconnected. It always
/// reads low, so presence falls back to the pressure measurement.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIrq;

impl ErrorType for NoIrq {
    type Error = Infallible;
}

impl InputPin for NoIrq {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(true)
    }
}

pub type Result<T, SpiE, PinE> = core::result::Result<T, Xpt2046Error<SpiE, PinE>>;

pub struct Xpt2046<SPI, IRQ> {
    spi: SPI,
    irq: IRQ,
    pressure_threshold: u16,
}

impl<SPI> Xpt2046<SPI, NoIrq>
where
    SPI: SpiDevice,
{
    pub fn without_irq(spi: SPI) -> Self {
        Self::new(spi, NoIrq)
    }
}

impl<SPI, IRQ> Xpt2046<SPI, IRQ>
where
    SPI: SpiDevice,
    IRQ: InputPin,
{
    pub fn new(spi: SPI, irq: IRQ) -> Self {
        Self {
            spi,
            irq,
            pressure_threshold: TOUCH_PRESSURE_THRESHOLD,
        }
    }

    pub fn with_pressure_threshold(mut self, threshold: u16) -> Self {
        self.pressure_threshold = threshold;
        self
    }

    pub fn pressure_threshold(&self) -> u16 {
        self.pressure_threshold
    }

    pub fn release(self) -> (SPI, IRQ) {
        (self.spi, self.irq)
    }

    pub fn read_pressure(&mut self) -> Result<u16, SPI::Error, IRQ::Error> {
        let z1 = self.convert(CMD_READ_Z1)?;
        let z2 = self.convert(CMD_READ_Z2)?;
        Ok(pressure_from(z1, z2))
    }

    fn irq_idle(&mut self) -> Result<bool, SPI::Error, IRQ::Error> {
        self.irq.is_high().map_err(Xpt2046Error::Irq)
    }

    fn convert(&mut self, cmd: u8) -> Result<u16, SPI::Error, IRQ::Error> {
        let mut frame = [cmd, 0, 0];
        self.spi
            .transfer_in_place(&mut frame)
            .map_err(Xpt2046Error::Spi)?;
        Ok(decode_frame(&frame))
    }

    fn sample_axis(&mut self, cmd: u8) -> Result<u16, SPI::Error, IRQ::Error> {
        let mut samples = [0u16; SAMPLES_PER_AXIS];
        for slot in samples.iter_mut() {
            *slot = self.convert(cmd)?;
        }
        Ok(closest_pair_average(samples[0], samples[1], samples[2]))
    }
}

impl<SPI, IRQ> TouchSensor for Xpt2046<SPI, IRQ>
where
    SPI: SpiDevice,
    IRQ: InputPin,
{
    type Error = Xpt2046Error<SPI::Error, IRQ::Error>;

    fn touched(&mut self) -> core::result::Result<bool, Self::Error> {
        // PENIRQ high means the panel is open; skip the bus entirely.
        if self.irq_idle()? {
            return Ok(false);
        }
        Ok(self.read_pressure()? >= self.pressure_threshold)
    }

    fn read_point(&mut self) -> core::result::Result<RawPoint, Self::Error> {
        let z = self.read_pressure()?;
        let x = self.sample_axis(CMD_READ_X)?;
        let y = self.sample_axis(CMD_READ_Y)?;
        Ok(RawPoint { x, y, z })
    }
}

fn decode_frame(frame: &[u8; 3]) -> u16 {
    ((u16::from(frame[1]) << 8 | u16::from(frame[2])) >> 3) & ADC_MAX
}

fn pressure_from(z1: u16, z2: u16) -> u16 {
    (z1 + ADC_MAX).saturating_sub(z2)
}

/// Mean of the two readings that agree best; drops one outlier.
fn closest_pair_average(a: u16, b: u16, c: u16) -> u16 {
    let ab = a.abs_diff(b);
    let ac = a.abs_diff(c);
    let bc = b.abs_diff(c);

    let (p, q) = if ab <= ac && ab <= bc {
        (a, b)
    } else if ac <= ab && ac <= bc {
        (a, c)
    } else {
        (b, c)
    };
    ((u32::from(p) + u32::from(q)) / 2) as u16
}
