//! Status LED - the per-tick heartbeat indicator.

use embassy_nrf::gpio::Output;

/// On/off sink around a GPIO output.
pub struct StatusLed {
    pin: Output<'static>,
}

impl StatusLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) {
        self.pin.set_high();
    }

    pub fn off(&mut self) {
        self.pin.set_low();
    }

    pub fn toggle(&mut self) {
        self.pin.toggle();
    }
}
