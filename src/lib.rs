//! Test-only library interface for padtimer.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required): keypad scan decode,
//! entry buffer + debounce, shared timer state, and digit rendering.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature. This lib.rs provides a separate entry
//! point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "display/digits.rs"]
mod display_digits_impl;
#[path = "keypad/input_logic.rs"]
mod keypad_input_logic_impl;
#[path = "keypad/layout.rs"]
mod keypad_layout_impl;
#[path = "timer/state.rs"]
mod timer_state_impl;

pub mod keypad {
    pub mod layout {
        pub use crate::keypad_layout_impl::*;
    }
    pub mod input_logic {
        pub use crate::keypad_input_logic_impl::*;
    }
}

pub mod timer {
    pub mod state {
        pub use crate::timer_state_impl::*;
    }
}

pub mod display {
    pub mod digits {
        pub use crate::display_digits_impl::*;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
