use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid note symbol '{symbol}' at line {line}")]
    InvalidNoteSymbol { symbol: char, line: usize },

    #[error("No octave digit found at line {line}")]
    MissingOctaveDigit { line: usize },

    #[error("Line {line} encodes {actual} slots, expected {expected}")]
    UnequalLineLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Beep parse error at line {line}: {message}")]
    BeepParse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
