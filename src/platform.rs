use crate::types::RawPoint;

/// The two primitives a touch controller driver has to offer.
///
/// Bus faults, timeouts and any FIFO/interrupt housekeeping stay inside the
/// implementation; callers only see "touched or not" and raw points.
pub trait TouchSensor {
    type Error;

    fn touched(&mut self) -> Result<bool, Self::Error>;
    fn read_point(&mut self) -> Result<RawPoint, Self::Error>;
}

impl<T: TouchSensor + ?Sized> TouchSensor for &mut T {
    type Error = T::Error;

    fn touched(&mut self) -> Result<bool, Self::Error> {
        (**self).touched()
    }

    fn read_point(&mut self) -> Result<RawPoint, Self::Error> {
        (**self).read_point()
    }
}
