//! Note and frequency calculations

/// Number of note symbols per octave
pub const KEY_COUNT: usize = 12;

/// A validated piano key: note letter plus octave digit
///
/// Lowercase letters (a-g) are naturals, uppercase letters (A, C, D, F, G)
/// are the sharps of the same name. A `Pitch` can only be obtained through
/// [`Tuning::pitch`], so the letter is always in the key alphabet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch {
    pub letter: char,
    pub octave: i32,
    /// Position in the key alphabet, resolved at construction
    key: usize,
}

/// Equal-temperament tuning parameters
///
/// Kept as instance data rather than process-wide constants so the
/// pipeline stays pure and alternative tunings can be tested.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Reference frequency (Hz) at the reference octave
    pub reference_hz: f64,
    /// Supported note symbols
    pub keys: [char; KEY_COUNT],
    /// Semitone offset of each symbol from the reference key
    pub distances: [i32; KEY_COUNT],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            reference_hz: 440.0,
            keys: ['A', 'b', 'c', 'C', 'd', 'D', 'e', 'f', 'F', 'g', 'G', 'a'],
            distances: [0, 1, -10, -9, -8, -7, -6, -5, -4, -3, -2, -1],
        }
    }
}

impl Tuning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of a note symbol in the key alphabet
    pub fn key_index(&self, letter: char) -> Option<usize> {
        self.keys.iter().position(|&k| k == letter)
    }

    /// Build a pitch, or `None` if the letter is outside the key alphabet
    pub fn pitch(&self, letter: char, octave: i32) -> Option<Pitch> {
        self.key_index(letter).map(|key| Pitch {
            letter,
            octave,
            key,
        })
    }

    /// Frequency in Hz of a pitch under this tuning
    ///
    /// `reference * 2^(octave - 4) * 2^(distance / 12)`
    pub fn frequency(&self, pitch: Pitch) -> f64 {
        let octave_factor = 2.0_f64.powi(pitch.octave - 4);
        let step = 2.0_f64.powf(self.distances[pitch.key] as f64 / 12.0);
        self.reference_hz * octave_factor * step
    }
}
