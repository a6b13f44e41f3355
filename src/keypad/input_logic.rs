//! Pure keypad input state: entry buffer, repeat suppression, key dispatch.
//!
//! Everything here is owned by the acquisition task alone, so no locking is
//! involved; it lives in its own module so the host test suite can exercise
//! it without hardware.

use crate::keypad::layout::Key;

/// Maximum number of digits in one entry (counts are 0-99).
pub const ENTRY_DIGITS: usize = 2;

/// The two-digit entry buffer.
///
/// Digits are appended until capacity, then silently dropped. The buffer is
/// consumed (read, then cleared) when a start key arms a sequence.
#[derive(Debug, Default)]
pub struct InputBuffer {
    text: heapless::String<ENTRY_DIGITS>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns `false` (buffer unchanged) when full.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        debug_assert!(digit < 10);
        self.text.push((b'0' + digit) as char).is_ok()
    }

    /// Drop the last digit. Returns `false` when already empty.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Parse the current contents as a start value. `None` when empty.
    pub fn value(&self) -> Option<i32> {
        self.text.parse().ok()
    }
}

/// Repeat suppression for a single physical press.
///
/// A key identical to the last accepted one is accepted again only after
/// `quiet_ms` has elapsed since the previous acceptance; a different key is
/// always accepted immediately. Contact chatter inside the quiet window
/// therefore collapses into one press.
#[derive(Debug)]
pub struct DebounceGate {
    quiet_ms: u64,
    last: Option<Key>,
    last_at_ms: u64,
}

impl DebounceGate {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            last: None,
            last_at_ms: 0,
        }
    }

    /// Accept or discard a decoded key at time `now_ms`. Records the key
    /// and timestamp only on acceptance.
    pub fn accept(&mut self, key: Key, now_ms: u64) -> bool {
        if self.last == Some(key) && now_ms.wrapping_sub(self.last_at_ms) < self.quiet_ms {
            return false;
        }
        self.last = Some(key);
        self.last_at_ms = now_ms;
        true
    }
}

/// What an accepted key did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Buffer contents changed (digit, backspace or clear).
    Updated,
    /// Digit dropped because the buffer was already full.
    Rejected,
    /// Countdown armed with this start value; buffer consumed.
    StartCountdown(i32),
    /// Count-up armed with this target value; buffer consumed.
    StartCountUp(i32),
    /// Key has no effect in the current state.
    Ignored,
}

/// Dispatch one accepted key against the entry buffer.
///
/// `#` clears, `*` removes the last digit, digits append, `A`/`B` consume a
/// non-empty buffer into a start value. A start key on an empty buffer is a
/// no-op, as are `C` and `D`.
pub fn apply_key(buffer: &mut InputBuffer, key: Key) -> KeyAction {
    match key {
        Key::Hash => {
            buffer.clear();
            KeyAction::Updated
        }
        Key::Star => {
            if buffer.backspace() {
                KeyAction::Updated
            } else {
                KeyAction::Ignored
            }
        }
        Key::Digit(d) => {
            if buffer.push_digit(d) {
                KeyAction::Updated
            } else {
                KeyAction::Rejected
            }
        }
        Key::A => match buffer.value() {
            Some(v) => {
                buffer.clear();
                KeyAction::StartCountdown(v)
            }
            None => KeyAction::Ignored,
        },
        Key::B => match buffer.value() {
            Some(v) => {
                buffer.clear();
                KeyAction::StartCountUp(v)
            }
            None => KeyAction::Ignored,
        },
        Key::C | Key::D => KeyAction::Ignored,
    }
}
