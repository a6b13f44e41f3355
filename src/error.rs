//! Unified error type for padtimer.
//!
//! All error conditions are local and value-based - nothing unwinds and
//! nothing allocates. Variants derive `defmt::Format` for on-target
//! logging when the feature is enabled.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An I2C or SPI transaction was not acknowledged.
    Bus,

    /// The OLED panel failed to initialise. Fatal at bring-up.
    Display,
}
