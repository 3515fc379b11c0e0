pub(crate) mod config;
mod touch;
pub(crate) mod types;

use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    spi::{
        master::{Config as SpiConfig, Spi},
        Mode as SpiMode,
    },
    time::Rate,
    timer::timg::TimerGroup,
};
use esp_println::println;
use esp_rtos::embassy::Executor;
use resistouch::{
    config::{
        TOUCH_CS_GPIO, TOUCH_IRQ_GPIO, TOUCH_MISO_GPIO, TOUCH_MOSI_GPIO, TOUCH_SCK_GPIO,
        TOUCH_SPI_FREQ_KHZ,
    },
    TouchReader, Xpt2046,
};
use static_cell::StaticCell;

use self::types::TouchDriver;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

pub(crate) fn run() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let spi_cfg = SpiConfig::default()
        .with_frequency(Rate::from_khz(TOUCH_SPI_FREQ_KHZ))
        .with_mode(SpiMode::_0);
    let spi = match Spi::new(peripherals.SPI2, spi_cfg) {
        // Pin fields must match the TOUCH_*_GPIO constants logged below.
        Ok(spi) => spi
            .with_sck(peripherals.GPIO18)
            .with_mosi(peripherals.GPIO23)
            .with_miso(peripherals.GPIO19),
        Err(err) => {
            println!("touch: init_failed reason=spi_config err={:?}", err);
            halt_forever();
        }
    };

    let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());
    let irq = Input::new(
        peripherals.GPIO13,
        InputConfig::default().with_pull(Pull::Up),
    );

    let device = match ExclusiveDevice::new(spi, cs, Delay::new()) {
        Ok(device) => device,
        Err(err) => {
            println!("touch: init_failed reason=cs_pin err={:?}", err);
            halt_forever();
        }
    };

    let reader: TouchDriver = TouchReader::new(Xpt2046::new(device, irq));
    println!(
        "touch: ready cs=GPIO{} irq=GPIO{} sck=GPIO{} mosi=GPIO{} miso=GPIO{} spi_khz={}",
        TOUCH_CS_GPIO,
        TOUCH_IRQ_GPIO,
        TOUCH_SCK_GPIO,
        TOUCH_MOSI_GPIO,
        TOUCH_MISO_GPIO,
        TOUCH_SPI_FREQ_KHZ
    );

    let executor = EXECUTOR.init(Executor::new());
    executor.run(move |spawner| {
        spawner.must_spawn(touch::touch_task(reader));
    });
}

fn halt_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
