//! Timer subsystem - shared value slots plus the two sequencer tasks.

pub mod sequencer;
pub mod state;
