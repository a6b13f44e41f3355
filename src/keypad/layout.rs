//! Keypad symbols, the 4x4 key map, and the matrix scan bit logic.
//!
//! The keypad hangs off a PCF8574: one nibble drives the scan lines, the
//! other nibble reads back the orthogonal lines through the key switches.
//! Which nibble is which depends on how the ribbon was wired, so every
//! function here is parameterized by [`Orientation`] instead of existing
//! twice.
//!
//! Lines are active-low: a driven scan line is 0, a pressed key pulls the
//! crossing read line to 0. An idle (or absent) expander reads `0xFF`,
//! which decodes to "no key" by construction.

/// Read-back value meaning "all lines open" - also what the bus adapter
/// returns when the expander does not answer at all.
pub const LINES_IDLE: u8 = 0xFF;

/// One keypad symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// A decimal digit, 0-9.
    Digit(u8),
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    /// The digit value, if this is a digit key.
    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Digit(d) => Some(d),
            _ => None,
        }
    }

    /// Printable form for logging.
    pub fn as_char(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d) as char,
            Key::A => 'A',
            Key::B => 'B',
            Key::C => 'C',
            Key::D => 'D',
            Key::Star => '*',
            Key::Hash => '#',
        }
    }
}

/// Logical key map, row-major. Fixed at build time.
pub const KEYMAP: [[Key; 4]; 4] = [
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::A],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::B],
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::C],
    [Key::Star, Key::Digit(0), Key::Hash, Key::D],
];

/// Which nibble of the expander drives the scan lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Rows on the low nibble (driven), columns on the high nibble (read).
    RowDrive,
    /// Mirrored wiring: columns on the high nibble (driven), rows read back
    /// on the low nibble.
    ColDrive,
}

/// Byte that activates exactly one scan line (drives it low) while holding
/// the other scan lines and the whole read nibble released (high).
pub fn drive_mask(orientation: Orientation, line: usize) -> u8 {
    debug_assert!(line < 4);
    match orientation {
        Orientation::RowDrive => (!(1u8 << line) & 0x0F) | 0xF0,
        Orientation::ColDrive => (!(1u8 << (line + 4)) & 0xF0) | 0x0F,
    }
}

/// Byte that parks the matrix between scans: the scan nibble is released
/// (weak high) and the read nibble is driven low, so the next key press
/// pulls a scan line down and fires the expander's INT line. With no key
/// held the expander reads back exactly this value, which is what
/// `reset_idle` verifies.
pub fn idle_mask(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::RowDrive => 0x0F,
        Orientation::ColDrive => 0xF0,
    }
}

/// Decode one scan step: `line` was driven, `readback` is the expander's
/// byte. The first low bit in the read nibble wins; simultaneous presses on
/// the same scan line are not disambiguated.
pub fn decode(orientation: Orientation, line: usize, readback: u8) -> Option<Key> {
    debug_assert!(line < 4);
    match orientation {
        Orientation::RowDrive => {
            for col in 0..4 {
                if readback & (1 << (col + 4)) == 0 {
                    return Some(KEYMAP[line][col]);
                }
            }
            None
        }
        Orientation::ColDrive => {
            for row in 0..4 {
                if readback & (1 << row) == 0 {
                    return Some(KEYMAP[row][line]);
                }
            }
            None
        }
    }
}
