//! The two sequencer tasks - countdown and count-up.
//!
//! Each polls its own timer slot on a short interval while idle, then runs
//! the armed sequence at a one-second cadence. Cancellation is purely by
//! value: the acquisition task arming the *other* slot clears this one,
//! and the compare-and-swap in the tick transition notices at the end of
//! the in-flight iteration. There is no abort signal.
//!
//! The terminal flash blocks only the sequencer that runs it; the
//! acquisition task keeps accepting keys throughout.

use crate::config::{FLASH_CYCLES, FLASH_PHASE_MS, SEQUENCER_POLL_MS, TICK_MS};
use crate::display::SharedSinks;
use crate::timer::state::{countdown_after_tick, countup_after_tick, TickOutcome, TimerState};
use defmt::info;
use embassy_time::Timer;

#[embassy_executor::task]
pub async fn countdown_task(sinks: &'static SharedSinks, timers: &'static TimerState) -> ! {
    loop {
        let Some(start) = timers.countdown.get().filter(|v| *v > 0) else {
            Timer::after_millis(SEQUENCER_POLL_MS).await;
            continue;
        };

        let mut value = start;
        loop {
            // `value` is fixed for the whole iteration; a start key landing
            // inside the one-second hold takes effect at the tick
            // transition below, never mid-render.
            info!("countdown: {}", value);
            {
                let mut s = sinks.lock().await;
                s.show_count(value);
                s.toggle_led();
            }
            Timer::after_millis(TICK_MS).await;

            match countdown_after_tick(&timers.countdown, value) {
                TickOutcome::Continue(next) => value = next,
                TickOutcome::Finished => {
                    flash_final(sinks, 0).await;
                    timers.countdown.compare_and_clear(0);
                    break;
                }
                TickOutcome::Preempted => break,
            }
        }
    }
}

#[embassy_executor::task]
pub async fn countup_task(sinks: &'static SharedSinks, timers: &'static TimerState) -> ! {
    loop {
        let Some(target) = timers.countup.get().filter(|v| *v > 0) else {
            Timer::after_millis(SEQUENCER_POLL_MS).await;
            continue;
        };

        let mut value = 0;
        loop {
            info!("counting up: {}", value);
            {
                let mut s = sinks.lock().await;
                s.show_count(value);
                s.toggle_led();
            }
            Timer::after_millis(TICK_MS).await;

            match countup_after_tick(&timers.countup, value, target) {
                TickOutcome::Continue(next) => value = next,
                TickOutcome::Finished => {
                    flash_final(sinks, target).await;
                    timers.countup.compare_and_clear(target);
                    break;
                }
                TickOutcome::Preempted => break,
            }
        }
    }
}

/// Terminal flash: alternate the final value and a blanked display for a
/// fixed number of cycles.
async fn flash_final(sinks: &'static SharedSinks, value: i32) {
    for _ in 0..FLASH_CYCLES {
        sinks.lock().await.show_count(value);
        Timer::after_millis(FLASH_PHASE_MS).await;

        sinks.lock().await.blank();
        Timer::after_millis(FLASH_PHASE_MS).await;
    }
}
