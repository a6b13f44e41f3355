//! Two-digit rendering helpers shared by the segment and panel sinks.

use core::fmt::Write;

/// MAX7221 Code-B "blank this position" code.
pub const BLANK: u8 = 0x0F;

/// Split a value into [tens, ones] BCD for the segment display.
///
/// Values are clamped into 0..=99; entry capacity already guarantees the
/// range. The leading zero is blanked so single-digit values show on one
/// position only.
pub fn segment_digits(value: i32) -> [u8; 2] {
    let v = value.clamp(0, 99) as u8;
    let tens = v / 10;
    let ones = v % 10;
    [if tens > 0 { tens } else { BLANK }, ones]
}

/// Zero-padded two-digit text for the panel ("07", "42").
pub fn format_value(value: i32) -> heapless::String<4> {
    let mut s = heapless::String::new();
    let v = value.clamp(0, 99);
    // Write into a 4-char buffer cannot fail for a clamped value.
    let _ = write!(s, "{:02}", v);
    s
}
