//! Letter notation compiler - parses notation text and generates tone events
//!
//! The pipeline is a pure batch transformation: normalize each notation
//! line, merge the simultaneous lines of each block, concatenate the
//! blocks, encode the slots as tone events, render the beep text.

pub mod encode;
pub mod score;
pub mod tuning;

use crate::beep::{self, ToneEvent};
use crate::error::Result;
use encode::RestMode;
use score::{merge, ScoreFormat, Slot};
use tuning::Tuning;

/// Default slot interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u32 = 125;

/// Letter notation to beep-file compiler
///
/// Holds only configuration; each [`compile`](Compiler::compile) call is
/// an independent transformation with no carried state.
#[derive(Debug, Clone)]
pub struct Compiler {
    /// Tuning used for frequency derivation and pitch comparison
    pub tuning: Tuning,
    /// Notation line geometry
    pub format: ScoreFormat,
    /// Rest interpretation
    pub rest_mode: RestMode,
    /// Length of one slot in milliseconds
    pub interval_ms: u32,
    /// Output time limit in milliseconds, 0 for unbounded
    pub limit_ms: u32,
    /// Emit the final pending note or pause instead of dropping it
    pub flush_tail: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            format: ScoreFormat::default(),
            rest_mode: RestMode::Hold,
            interval_ms: DEFAULT_INTERVAL_MS,
            limit_ms: 0,
            flush_tail: false,
        }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile notation text into the playable beep text format
    pub fn compile(&self, text: &str) -> Result<String> {
        let events = self.compile_events(text)?;
        Ok(beep::writer::render(&events, self.limit_ms))
    }

    /// Compile notation text into tone events, before serialization
    pub fn compile_events(&self, text: &str) -> Result<Vec<ToneEvent>> {
        let slots = self.assemble(text)?;
        Ok(encode::encode(
            &self.tuning,
            &slots,
            self.rest_mode,
            self.interval_ms,
            self.flush_tail,
        ))
    }

    /// Split the input into blocks, merge each, concatenate the results
    ///
    /// Blocks are runs of non-blank lines separated by blank lines; the
    /// lines of a block are played simultaneously. Line numbers are
    /// 1-based positions in the raw input.
    fn assemble(&self, text: &str) -> Result<Vec<Slot>> {
        let mut song = Vec::new();
        let mut block: Vec<Vec<Slot>> = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            if raw.trim().is_empty() {
                if !block.is_empty() {
                    song.extend(merge(&self.tuning, &block));
                    block.clear();
                }
            } else {
                block.push(self.format.normalize(raw, index + 1, &self.tuning)?);
            }
        }
        if !block.is_empty() {
            song.extend(merge(&self.tuning, &block));
        }

        Ok(song)
    }
}
