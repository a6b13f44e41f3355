//! Application-wide constants and compile-time configuration.
//!
//! All hardware addresses, timing parameters, and keypad tuning live here
//! so they can be adjusted in one place.

use crate::keypad::layout::Orientation;

// Keypad / PCF8574

/// PCF8574 7-bit I2C address (A0..A2 low).
pub const EXPANDER_ADDR: u8 = 0x20;

/// Keypad wiring orientation. Swap to `ColDrive` for mirrored ribbons.
pub const ORIENTATION: Orientation = Orientation::RowDrive;

/// Settle delay after the INT edge before scanning (ms) - lets contact
/// bounce die down.
pub const KEY_SETTLE_MS: u64 = 50;

/// Minimum quiet interval before the same key is accepted again (ms).
pub const KEY_QUIET_MS: u64 = 100;

/// Hold time after driving one scan line before reading back (us). Long
/// enough for the expander outputs to stabilise, short enough that a full
/// 4-line scan stays well inside the debounce window.
pub const SCAN_SETTLE_US: u64 = 500;

/// Hold time after the idle write before the INT line is trusted again (ms).
pub const IDLE_SETTLE_MS: u64 = 2;

/// Idle-write attempts before the expander is presumed stuck.
pub const IDLE_RESET_RETRIES: usize = 3;

// Timer sequencing

/// One tick of an active sequence (ms).
pub const TICK_MS: u64 = 1000;

/// Poll interval while a sequencer is idle (ms).
pub const SEQUENCER_POLL_MS: u64 = 500;

/// Hold time of each terminal-flash phase (ms).
pub const FLASH_PHASE_MS: u64 = 400;

/// Show/blank cycles in the terminal flash.
pub const FLASH_CYCLES: usize = 6;

// GPIO / bus assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` types
// are selected in `main.rs`. Adjust for your custom PCB.
//
//   Keypad INT      → P0.11  (external 10 k pull-up required!)
//   Expander I²C    → TWIM0: SDA P0.26, SCL P0.27
//   OLED I²C        → TWIM1: SDA P0.30, SCL P0.31
//   MAX7221 SPI     → SPIM3: SCK P0.19, MOSI P0.20, CS P0.17
//   Status LED      → P0.06

/// MAX7221 intensity register value (0x00..=0x0F).
pub const SEGMENT_INTENSITY: u8 = 0x0A;

/// Power-on self-test LED blink count.
pub const POST_BLINKS: usize = 4;

/// Power-on self-test LED blink phase (ms).
pub const POST_BLINK_MS: u64 = 100;

/// How long the splash message stays up after bring-up (ms).
pub const SPLASH_MS: u64 = 2000;
