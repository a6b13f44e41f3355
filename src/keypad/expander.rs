//! PCF8574 bus adapter - raw byte access to the 8-bit I/O expander.
//!
//! The PCF8574 has no registers: a write sets all eight quasi-bidirectional
//! lines, a read samples them. Written 1-bits become weak pull-ups, so a
//! line "written high" doubles as an input.
//!
//! Bus errors stay local: a failed write is reported but carries no
//! payload, and a failed read comes back as [`LINES_IDLE`] (0xFF), which
//! the scan logic already treats as "all switches open".

use crate::error::Error;
use crate::keypad::layout::LINES_IDLE;
use embedded_hal_async::i2c::I2c;

/// PCF8574 at a fixed bus address. No state beyond the bus handle.
pub struct Pcf8574<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Pcf8574<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Drive the eight lines. A NACK is non-fatal; callers that care (the
    /// idle-reset retry loop) inspect the result, everyone else drops it.
    pub async fn write(&mut self, value: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[value])
            .await
            .map_err(|_| Error::Bus)
    }

    /// Sample the eight lines. A silent bus reads as all-high, which the
    /// scanner cannot and must not distinguish from "no key pressed".
    pub async fn read(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        match self.i2c.read(self.address, &mut buf).await {
            Ok(()) => buf[0],
            Err(_) => LINES_IDLE,
        }
    }
}
