//! Keypad acquisition task - the consuming half of the interrupt hand-off.
//!
//! The PCF8574's INT line is wired to a GPIOTE input; `wait_for_any_edge`
//! is the whole interrupt-context footprint (the GPIOTE ISR only wakes
//! this task - no bus I/O, no shared-state writes happen there). All real
//! work runs here at task level:
//!
//!   edge → settle 50 ms → scan → repeat suppression → dispatch → render
//!
//! This task is the only owner of the entry buffer and the debounce record,
//! and the only writer that *arms* the timer slots.

use crate::config::{KEY_QUIET_MS, KEY_SETTLE_MS};
use crate::display::SharedSinks;
use crate::keypad::input_logic::{apply_key, DebounceGate, InputBuffer, KeyAction};
use crate::keypad::scanner::MatrixScanner;
use crate::timer::state::TimerState;
use defmt::{debug, info};
use embassy_nrf::gpio::Input;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_time::{Instant, Timer};

/// The I2C instance the keypad expander hangs off.
pub type KeypadBus = Twim<'static, TWISPI0>;

#[embassy_executor::task]
pub async fn acquire_task(
    mut int_pin: Input<'static>,
    mut scanner: MatrixScanner<KeypadBus>,
    sinks: &'static SharedSinks,
    timers: &'static TimerState,
) -> ! {
    let mut buffer = InputBuffer::new();
    let mut gate = DebounceGate::new(KEY_QUIET_MS);

    loop {
        // Parked until the expander's INT line moves.
        int_pin.wait_for_any_edge().await;

        Timer::after_millis(KEY_SETTLE_MS).await;

        let Some(key) = scanner.scan().await else {
            // Glitch or release edge - nothing decoded.
            continue;
        };

        if !gate.accept(key, Instant::now().as_millis()) {
            debug!("key {} suppressed (repeat)", key);
            continue;
        }

        info!("key pressed: {}", key);

        match apply_key(&mut buffer, key) {
            KeyAction::StartCountdown(from) => {
                info!("starting countdown from {}", from);
                timers.start_countdown(from);
            }
            KeyAction::StartCountUp(to) => {
                info!("starting count-up to {}", to);
                timers.start_countup(to);
            }
            KeyAction::Rejected => {
                debug!("entry full, digit dropped");
            }
            KeyAction::Updated | KeyAction::Ignored => {}
        }

        sinks.lock().await.show_entry(buffer.as_str());
    }
}
