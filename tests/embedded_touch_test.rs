//! On-target checks for the XPT2046 wiring on the ESP32 board.
//! Run with the panel untouched.

#![no_std]
#![no_main]

#[cfg(test)]
#[embedded_test::tests(executor = esp_rtos::embassy::Executor::new())]
mod tests {
    use embedded_hal_bus::spi::ExclusiveDevice;
    use esp_hal::{
        delay::Delay,
        gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
        spi::{
            master::{Config as SpiConfig, Spi},
            Mode as SpiMode,
        },
        time::Rate,
        Blocking,
    };
    use resistouch::{
        config::TOUCH_SPI_FREQ_KHZ, Calibration, RawPoint, ScreenPoint, TouchReader, Xpt2046,
    };

    type Reader = TouchReader<
        Xpt2046<ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, Delay>, Input<'static>>,
    >;

    #[init]
    fn init() -> Reader {
        let peripherals = esp_hal::init(esp_hal::Config::default());
        let timg0 = esp_hal::timer::timg::TimerGroup::new(peripherals.TIMG0);
        esp_rtos::start(timg0.timer0);

        let spi_cfg = SpiConfig::default()
            .with_frequency(Rate::from_khz(TOUCH_SPI_FREQ_KHZ))
            .with_mode(SpiMode::_0);
        let spi = Spi::new(peripherals.SPI2, spi_cfg)
            .unwrap()
            .with_sck(peripherals.GPIO18)
            .with_mosi(peripherals.GPIO23)
            .with_miso(peripherals.GPIO19);
        let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());
        let irq = Input::new(
            peripherals.GPIO13,
            InputConfig::default().with_pull(Pull::Up),
        );
        let device = ExclusiveDevice::new(spi, cs, Delay::new()).unwrap();
        TouchReader::new(Xpt2046::new(device, irq))
    }

    #[test]
    async fn calibration_corners_hold_on_target(_reader: Reader) {
        let cal = Calibration::DEFAULT;
        assert_eq!(cal.map(RawPoint::new(3930, 3760)), ScreenPoint::new(0, 0));
        assert_eq!(cal.map(RawPoint::new(372, 237)), ScreenPoint::new(480, 320));
    }

    #[test]
    async fn idle_panel_polls_as_absent(mut reader: Reader) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(10)).await;
        assert_eq!(reader.try_poll().ok(), Some(None));
    }
}
