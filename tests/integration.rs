//! Integration tests for padtimer host-testable logic.
//!
//! These drive the same pure pieces the firmware tasks compose: decoded
//! keys flow through the debounce gate and entry buffer into the shared
//! timer state, and the sequencer tick transitions run a sequence the way
//! the tasks do (minus the real one-second sleeps).

use padtimer::keypad::input_logic::{apply_key, DebounceGate, InputBuffer, KeyAction};
use padtimer::keypad::layout::{decode, Key, Orientation, KEYMAP};
use padtimer::timer::state::{
    countdown_after_tick, countup_after_tick, SequenceKind, TickOutcome, TimerState,
};

/// Decoded-key stream → buffer/timer state, as the acquisition task does it.
fn press(
    gate: &mut DebounceGate,
    buffer: &mut InputBuffer,
    timers: &TimerState,
    key: Key,
    at_ms: u64,
) {
    if !gate.accept(key, at_ms) {
        return;
    }
    match apply_key(buffer, key) {
        KeyAction::StartCountdown(v) => timers.start_countdown(v),
        KeyAction::StartCountUp(v) => timers.start_countup(v),
        _ => {}
    }
}

#[test]
fn digits_then_start_key_arms_countdown() {
    let mut gate = DebounceGate::new(100);
    let mut buffer = InputBuffer::new();
    let timers = TimerState::new();

    press(&mut gate, &mut buffer, &timers, Key::Digit(1), 0);
    press(&mut gate, &mut buffer, &timers, Key::Digit(5), 200);
    press(&mut gate, &mut buffer, &timers, Key::A, 400);

    assert_eq!(timers.countdown.get(), Some(15));
    assert_eq!(timers.countup.get(), None);
    assert!(buffer.is_empty());
}

#[test]
fn chattering_key_counts_once() {
    let mut gate = DebounceGate::new(100);
    let mut buffer = InputBuffer::new();
    let timers = TimerState::new();

    // One physical press of '1' arriving as three electrical edges.
    press(&mut gate, &mut buffer, &timers, Key::Digit(1), 0);
    press(&mut gate, &mut buffer, &timers, Key::Digit(1), 20);
    press(&mut gate, &mut buffer, &timers, Key::Digit(1), 55);

    assert_eq!(buffer.as_str(), "1");
}

#[test]
fn scan_decode_feeds_dispatch() {
    // '5' is row 1, column 1 in the row-drive orientation.
    let readback = !(1u8 << 5);
    let key = decode(Orientation::RowDrive, 1, readback).unwrap();
    assert_eq!(key, KEYMAP[1][1]);

    let mut buffer = InputBuffer::new();
    assert_eq!(apply_key(&mut buffer, key), KeyAction::Updated);
    assert_eq!(buffer.as_str(), "5");
}

#[test]
fn countdown_start_to_terminal_flash() {
    let mut gate = DebounceGate::new(100);
    let mut buffer = InputBuffer::new();
    let timers = TimerState::new();

    press(&mut gate, &mut buffer, &timers, Key::Digit(3), 0);
    press(&mut gate, &mut buffer, &timers, Key::A, 200);

    let mut shown = Vec::new();
    let mut value = timers.countdown.get().expect("countdown armed");
    loop {
        shown.push(value);
        match countdown_after_tick(&timers.countdown, value) {
            TickOutcome::Continue(next) => value = next,
            TickOutcome::Finished => break,
            TickOutcome::Preempted => panic!("nothing else is running"),
        }
    }

    // 3, 2, 1, 0 at one-second intervals, then the flash, then idle.
    assert_eq!(shown, [3, 2, 1, 0]);
    assert!(timers.countdown.compare_and_clear(0));
    assert_eq!(timers.kind(), SequenceKind::Idle);
}

#[test]
fn countup_started_during_countdown_takes_over() {
    let mut gate = DebounceGate::new(100);
    let mut buffer = InputBuffer::new();
    let timers = TimerState::new();

    press(&mut gate, &mut buffer, &timers, Key::Digit(5), 0);
    press(&mut gate, &mut buffer, &timers, Key::A, 200);

    // Countdown runs one full tick: 5 shown, stepped to 4.
    let mut value = timers.countdown.get().unwrap();
    assert_eq!(countdown_after_tick(&timers.countdown, value), TickOutcome::Continue(4));
    value = 4;

    // '7' + 'B' land while the countdown sits in its one-second hold.
    press(&mut gate, &mut buffer, &timers, Key::Digit(7), 1_400);
    press(&mut gate, &mut buffer, &timers, Key::B, 1_600);

    // The in-flight iteration completes with its pre-overwrite value, then
    // the transition observes the sentinel and stops without clobbering.
    assert_eq!(countdown_after_tick(&timers.countdown, value), TickOutcome::Preempted);
    assert_eq!(timers.countdown.get(), None);
    assert_eq!(timers.kind(), SequenceKind::CountUp);

    // The count-up then runs to its target untouched.
    let target = timers.countup.get().unwrap();
    let mut shown = Vec::new();
    let mut v = 0;
    loop {
        shown.push(v);
        match countup_after_tick(&timers.countup, v, target) {
            TickOutcome::Continue(next) => v = next,
            TickOutcome::Finished => break,
            TickOutcome::Preempted => panic!("nothing else is running"),
        }
    }
    assert_eq!(shown, [0, 1, 2, 3, 4, 5, 6, 7]);
    assert!(timers.countup.compare_and_clear(target));
}

#[test]
fn clear_key_always_resets_entry() {
    let mut gate = DebounceGate::new(100);
    let mut buffer = InputBuffer::new();
    let timers = TimerState::new();

    press(&mut gate, &mut buffer, &timers, Key::Digit(9), 0);
    press(&mut gate, &mut buffer, &timers, Key::Digit(8), 200);
    press(&mut gate, &mut buffer, &timers, Key::Hash, 400);

    assert!(buffer.is_empty());
    assert_eq!(timers.kind(), SequenceKind::Idle);

    // A start key right after clearing is a no-op.
    press(&mut gate, &mut buffer, &timers, Key::A, 600);
    assert_eq!(timers.kind(), SequenceKind::Idle);
}
