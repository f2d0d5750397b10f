//! Beep text format handling
//!
//! The format played by the target sequencer: one `"<Hz>,<ms>"` line per
//! tone event, frequency 0 for silence.

pub mod event;
pub mod json;
pub mod reader;
pub mod writer;

pub use event::ToneEvent;
pub use json::BeepJson;
