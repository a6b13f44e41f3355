//! MAX7221 two-digit 7-segment sink over SPI.
//!
//! The part is run in Code-B decode mode, so each digit register takes a
//! BCD value or [`BLANK`](crate::display::digits::BLANK). Write-only, no
//! read-back; bus errors after init are dropped at the call sites.

use crate::display::digits::{segment_digits, BLANK};
use crate::error::Error;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

// MAX7221 register addresses.
const REG_DIGIT0: u8 = 0x01;
const REG_DIGIT1: u8 = 0x02;
const REG_DECODE_MODE: u8 = 0x09;
const REG_INTENSITY: u8 = 0x0A;
const REG_SCAN_LIMIT: u8 = 0x0B;
const REG_SHUTDOWN: u8 = 0x0C;
const REG_DISPLAY_TEST: u8 = 0x0F;

/// MAX7221 driver with manual chip-select.
pub struct Max7221<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> Max7221<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Wake the part and configure it for two BCD digits.
    pub fn init(&mut self, intensity: u8) -> Result<(), Error> {
        self.send(REG_SHUTDOWN, 0x01)?; // leave shutdown mode
        self.send(REG_DISPLAY_TEST, 0x00)?;
        self.send(REG_DECODE_MODE, 0xFF)?; // Code-B on all digits
        self.send(REG_INTENSITY, intensity & 0x0F)?;
        self.send(REG_SCAN_LIMIT, 0x01)?; // digits 0-1 only
        self.blank();
        Ok(())
    }

    fn send(&mut self, address: u8, value: u8) -> Result<(), Error> {
        self.cs.set_low().map_err(|_| Error::Bus)?;
        let res = self.spi.write(&[address, value]);
        self.cs.set_high().map_err(|_| Error::Bus)?;
        res.map_err(|_| Error::Bus)
    }

    /// Show a value in 0..=99, leading zero blanked.
    pub fn show_value(&mut self, value: i32) {
        let [tens, ones] = segment_digits(value);
        let _ = self.send(REG_DIGIT0, tens);
        let _ = self.send(REG_DIGIT1, ones);
    }

    /// Blank both positions (terminal-flash off phase).
    pub fn blank(&mut self) {
        let _ = self.send(REG_DIGIT0, BLANK);
        let _ = self.send(REG_DIGIT1, BLANK);
    }
}
