//! Keypad subsystem - interrupt-driven acquisition of a 4x4 matrix keypad
//! read through a PCF8574 I/O expander.
//!
//! ## Components
//!
//! - **layout**: key map, wiring orientation, scan bit logic (pure)
//! - **input_logic**: entry buffer, repeat suppression, key dispatch (pure)
//! - **expander**: raw PCF8574 byte access over I²C
//! - **scanner**: row/column walk and idle reset
//! - **acquire**: the Embassy task tying it together

pub mod acquire;
pub mod expander;
pub mod input_logic;
pub mod layout;
pub mod scanner;
