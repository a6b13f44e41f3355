//! Matrix scanner - walks the scan lines through the expander and decodes
//! at most one pressed key per pass.

use crate::config::{IDLE_RESET_RETRIES, IDLE_SETTLE_MS, SCAN_SETTLE_US};
use crate::keypad::expander::Pcf8574;
use crate::keypad::layout::{decode, drive_mask, idle_mask, Key, Orientation};
use defmt::warn;
use embassy_time::Timer;
use embedded_hal_async::i2c::I2c;

/// Scans the 4x4 matrix over a [`Pcf8574`], parameterized by wiring
/// orientation rather than duplicated per wiring.
pub struct MatrixScanner<I2C> {
    bus: Pcf8574<I2C>,
    orientation: Orientation,
}

impl<I2C: I2c> MatrixScanner<I2C> {
    pub fn new(bus: Pcf8574<I2C>, orientation: Orientation) -> Self {
        Self { bus, orientation }
    }

    /// One scan pass. Activates each scan line in turn, reads back the
    /// orthogonal lines, and returns the first decoded key. Simultaneous
    /// presses are not disambiguated. Every return path goes through
    /// [`reset_idle`](Self::reset_idle) so the INT line re-arms.
    pub async fn scan(&mut self) -> Option<Key> {
        for line in 0..4 {
            let _ = self.bus.write(drive_mask(self.orientation, line)).await;
            Timer::after_micros(SCAN_SETTLE_US).await;

            let readback = self.bus.read().await;
            if let Some(key) = decode(self.orientation, line, readback) {
                self.reset_idle().await;
                return Some(key);
            }
        }

        self.reset_idle().await;
        None
    }

    /// Park the matrix in its idle drive state and wait out the settle
    /// time. Verified by read-back: if the expander never reflects the
    /// idle mask after the retry budget, the bus is presumed stuck (or a
    /// key is being held) and scanning continues best-effort.
    pub async fn reset_idle(&mut self) {
        let idle = idle_mask(self.orientation);
        for _ in 0..IDLE_RESET_RETRIES {
            let write_ok = self.bus.write(idle).await.is_ok();
            Timer::after_millis(IDLE_SETTLE_MS).await;
            if write_ok && self.bus.read().await == idle {
                return;
            }
        }
        warn!("keypad: expander did not reach idle state, continuing best-effort");
    }
}
