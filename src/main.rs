//! padtimer - embedded entry point (nRF52840).
//!
//! Bring-up order matters: the status LED self-test runs first so a board
//! with a dead display still shows life, the MAX7221 is configured next
//! (no read-back, so failure is tolerated), then the OLED (failure is
//! fatal - without the panel the device is mute), and finally the three
//! tasks are spawned.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, peripherals, spim, twim};
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use panic_probe as _;
use static_cell::StaticCell;

mod config;
mod display;
mod error;
mod keypad;
mod timer;

use display::segment::Max7221;
use display::status::StatusLed;
use display::{SharedSinks, Sinks};
use keypad::expander::Pcf8574;
use keypad::scanner::MatrixScanner;
use timer::state::TimerState;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    TWISPI1 => twim::InterruptHandler<peripherals::TWISPI1>;
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

static SINKS: StaticCell<SharedSinks> = StaticCell::new();
static TIMERS: TimerState = TimerState::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("padtimer starting");

    // Status LED, with the power-on self-test blink.
    let mut led = StatusLed::new(Output::new(p.P0_06, Level::Low, OutputDrive::Standard));
    for _ in 0..config::POST_BLINKS {
        led.on();
        Timer::after_millis(config::POST_BLINK_MS).await;
        led.off();
        Timer::after_millis(config::POST_BLINK_MS).await;
    }

    // Keypad expander on its own TWIM instance.
    let keypad_bus = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut scanner = MatrixScanner::new(
        Pcf8574::new(keypad_bus, config::EXPANDER_ADDR),
        config::ORIENTATION,
    );
    // Park the matrix so the INT line is armed before the first key.
    scanner.reset_idle().await;

    // MAX7221 over SPI with manual chip-select.
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M1;
    let segment_bus = spim::Spim::new_txonly(p.SPI3, Irqs, p.P0_19, p.P0_20, spi_config);
    let segment_cs = Output::new(p.P0_17, Level::High, OutputDrive::Standard);
    let mut segment = Max7221::new(segment_bus, segment_cs);
    if segment.init(config::SEGMENT_INTENSITY).is_err() {
        // The part has no read-back anyway; keep going without it.
        warn!("MAX7221 init not acknowledged, continuing");
    }

    // OLED panel on the second TWIM instance.
    let panel_bus = twim::Twim::new(p.TWISPI1, Irqs, p.P0_30, p.P0_31, twim::Config::default());
    let panel = unwrap!(display::panel::init(panel_bus));

    let sinks = SINKS.init(Mutex::new(Sinks::new(panel, segment, led)));

    sinks.lock().await.message("padtimer ready");
    Timer::after_millis(config::SPLASH_MS).await;
    sinks.lock().await.blank();

    // Keypad INT line: any level change wakes the acquisition task.
    // The board needs an external 10 k pull-up on this line.
    let int_pin = Input::new(p.P0_11, Pull::Up);

    unwrap!(spawner.spawn(keypad::acquire::acquire_task(int_pin, scanner, sinks, &TIMERS)));
    unwrap!(spawner.spawn(timer::sequencer::countdown_task(sinks, &TIMERS)));
    unwrap!(spawner.spawn(timer::sequencer::countup_task(sinks, &TIMERS)));

    info!("padtimer running");
}
