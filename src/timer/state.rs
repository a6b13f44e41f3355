//! Shared timer state: two atomic value slots plus the per-tick transition
//! rules the sequencer tasks follow.
//!
//! Each slot has exactly one "normal" writer at a time - the acquisition
//! task on start, the owning sequencer while ticking - but a start key can
//! land mid-tick, so every sequencer-side write is a compare-and-swap
//! against the value read at iteration start. A failed swap means the slot
//! was re-armed or cleared underneath the sequencer, which then abandons
//! the run instead of clobbering the new value.

use core::sync::atomic::{AtomicI32, Ordering};

/// Sentinel meaning "no sequence armed".
pub const IDLE: i32 = -1;

/// One shared timer value. Only `get`/`arm`/`disarm` and the two
/// compare-and-swap operations cross task boundaries; the raw integer never
/// does.
#[derive(Debug)]
pub struct TimerCell(AtomicI32);

impl TimerCell {
    pub const fn new() -> Self {
        Self(AtomicI32::new(IDLE))
    }

    /// Current value, `None` when idle.
    pub fn get(&self) -> Option<i32> {
        let v = self.0.load(Ordering::Acquire);
        (v != IDLE).then_some(v)
    }

    pub fn arm(&self, value: i32) {
        self.0.store(value, Ordering::Release);
    }

    pub fn disarm(&self) {
        self.0.store(IDLE, Ordering::Release);
    }

    /// Step `seen` down to `seen - 1`, but only if nobody re-armed or
    /// cleared the slot since `seen` was read.
    pub fn compare_and_step(&self, seen: i32) -> bool {
        self.0
            .compare_exchange(seen, seen - 1, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Return the slot to idle, but only if it still holds `seen`.
    pub fn compare_and_clear(&self, seen: i32) -> bool {
        self.0
            .compare_exchange(seen, IDLE, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for TimerCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Which sequence is currently armed. Derived from the cells, not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceKind {
    Countdown,
    CountUp,
    Idle,
}

/// The pair of timer slots. Arming one side forcibly clears the other, so
/// at most one sequence is ever active.
#[derive(Debug, Default)]
pub struct TimerState {
    pub countdown: TimerCell,
    pub countup: TimerCell,
}

impl TimerState {
    pub const fn new() -> Self {
        Self {
            countdown: TimerCell::new(),
            countup: TimerCell::new(),
        }
    }

    pub fn start_countdown(&self, from: i32) {
        self.countup.disarm();
        self.countdown.arm(from);
    }

    pub fn start_countup(&self, to: i32) {
        self.countdown.disarm();
        self.countup.arm(to);
    }

    pub fn kind(&self) -> SequenceKind {
        if self.countdown.get().is_some() {
            SequenceKind::Countdown
        } else if self.countup.get().is_some() {
            SequenceKind::CountUp
        } else {
            SequenceKind::Idle
        }
    }
}

/// Outcome of one sequencer iteration, decided after the one-second hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Keep going with this value next iteration.
    Continue(i32),
    /// Final value was just shown; run the terminal flash and go idle.
    Finished,
    /// The slot was re-armed or cleared mid-tick; abandon the run. The
    /// iteration that observed this has already completed with the value it
    /// read at iteration start.
    Preempted,
}

/// Countdown transition: `value` was shown and held for a second.
pub fn countdown_after_tick(cell: &TimerCell, value: i32) -> TickOutcome {
    if value == 0 {
        return TickOutcome::Finished;
    }
    if cell.compare_and_step(value) {
        TickOutcome::Continue(value - 1)
    } else {
        TickOutcome::Preempted
    }
}

/// Count-up transition: `value` was shown while the slot pins `target`.
pub fn countup_after_tick(cell: &TimerCell, value: i32, target: i32) -> TickOutcome {
    if value == target {
        return TickOutcome::Finished;
    }
    if cell.get() == Some(target) {
        TickOutcome::Continue(value + 1)
    } else {
        TickOutcome::Preempted
    }
}
