//! Output sinks - 7-segment display, OLED panel, status LED.
//!
//! All three are write-only collaborators with no feedback into the core
//! logic. They are bundled into one [`Sinks`] value behind an async mutex
//! so the acquisition task and the two sequencer tasks serialise their
//! writes instead of interleaving half-drawn frames.

pub mod digits;
pub mod panel;
pub mod segment;
pub mod status;

use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::{SPI3, TWISPI1};
use embassy_nrf::spim::Spim;
use embassy_nrf::twim::Twim;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use panel::Panel;
use segment::Max7221;
use status::StatusLed;

/// The I2C instance the OLED hangs off.
pub type PanelBus = Twim<'static, TWISPI1>;
/// The SPI instance the MAX7221 hangs off.
pub type SegmentBus = Spim<'static, SPI3>;

/// The shared sink bundle handed to every task.
pub type SharedSinks = Mutex<CriticalSectionRawMutex, Sinks>;

/// All output sinks in one place.
pub struct Sinks {
    panel: Panel<PanelBus>,
    segment: Max7221<SegmentBus, Output<'static>>,
    led: StatusLed,
}

impl Sinks {
    pub fn new(
        panel: Panel<PanelBus>,
        segment: Max7221<SegmentBus, Output<'static>>,
        led: StatusLed,
    ) -> Self {
        Self {
            panel,
            segment,
            led,
        }
    }

    /// Emit the current count on both display sinks.
    pub fn show_count(&mut self, value: i32) {
        self.segment.show_value(value);
        panel::draw_count(&mut self.panel, value);
    }

    /// Render the entry buffer on the panel.
    pub fn show_entry(&mut self, text: &str) {
        panel::draw_entry(&mut self.panel, text);
    }

    /// Blank both display sinks (terminal-flash off phase).
    pub fn blank(&mut self) {
        self.segment.blank();
        panel::clear(&mut self.panel);
    }

    pub fn toggle_led(&mut self) {
        self.led.toggle();
    }

    /// Short bring-up / status message on the panel.
    pub fn message(&mut self, text: &str) {
        panel::draw_message(&mut self.panel, text);
    }
}
