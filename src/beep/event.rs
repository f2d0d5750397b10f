//! Compiled tone events

use serde::{Deserialize, Serialize};

/// One unit of compiled output: a frequency held for a duration
///
/// Frequency 0 encodes silence (pause mode only). Values are the integer
/// Hz/ms pairs of the beep text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneEvent {
    /// Frequency in Hz, 0 for silence
    pub frequency: u32,
    /// Duration in milliseconds
    pub duration: u32,
}

impl ToneEvent {
    pub fn new(frequency: u32, duration: u32) -> Self {
        Self {
            frequency,
            duration,
        }
    }

    /// Silent event of the given length
    pub fn pause(duration: u32) -> Self {
        Self::new(0, duration)
    }
}
