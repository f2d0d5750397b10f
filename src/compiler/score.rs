//! Notation line parsing and voice merging

use super::tuning::{Pitch, Tuning};
use crate::error::{Error, Result};

/// One fixed-width time slot within a notation line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// No key pressed at this position
    Rest,
    /// Key pressed at this position
    Note(Pitch),
}

/// Geometry of the letter-notes text format
///
/// The slot count per line is a convention of the format, never declared
/// in the input itself, so it is an explicit constant here and every line
/// is validated against it.
#[derive(Debug, Clone)]
pub struct ScoreFormat {
    /// Time slots encoded by every notation line
    pub slots_per_line: usize,
}

/// Slot count used by pianoletternotes.blogspot.com scores
pub const DEFAULT_SLOTS_PER_LINE: usize = 26;

impl Default for ScoreFormat {
    fn default() -> Self {
        Self {
            slots_per_line: DEFAULT_SLOTS_PER_LINE,
        }
    }
}

impl ScoreFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one raw notation line into its slot sequence
    ///
    /// A line is an optional label prefix, the octave digit for the whole
    /// line, a separator character, the slot characters, and one trailing
    /// character which is discarded. `'-'` encodes a rest; any other slot
    /// character must be in the tuning's key alphabet.
    ///
    /// `line_no` is the 1-based position in the input, used for error
    /// reporting only.
    pub fn normalize(&self, raw: &str, line_no: usize, tuning: &Tuning) -> Result<Vec<Slot>> {
        let line = raw.trim_end_matches('\r');

        let mut chars = line.chars().skip_while(|c| !c.is_ascii_digit());
        let octave = match chars.next() {
            Some(digit) => digit as i32 - '0' as i32,
            None => return Err(Error::MissingOctaveDigit { line: line_no }),
        };

        // Drop the separator after the digit and the trailing character
        let body: Vec<char> = chars.skip(1).collect();
        let body = if body.is_empty() {
            &body[..]
        } else {
            &body[..body.len() - 1]
        };

        let mut slots = Vec::with_capacity(self.slots_per_line);
        for &c in body {
            if c == '-' {
                slots.push(Slot::Rest);
            } else {
                let pitch = tuning
                    .pitch(c, octave)
                    .ok_or(Error::InvalidNoteSymbol {
                        symbol: c,
                        line: line_no,
                    })?;
                slots.push(Slot::Note(pitch));
            }
        }

        if slots.len() != self.slots_per_line {
            return Err(Error::UnequalLineLength {
                line: line_no,
                expected: self.slots_per_line,
                actual: slots.len(),
            });
        }

        Ok(slots)
    }
}

/// Merge the simultaneous lines of one block into a single voice
///
/// Per slot index the highest-frequency pitch among all lines wins; ties
/// keep the first line's pitch. All lines must have the same length,
/// which [`ScoreFormat::normalize`] guarantees.
pub fn merge(tuning: &Tuning, lines: &[Vec<Slot>]) -> Vec<Slot> {
    let slot_count = lines.first().map_or(0, Vec::len);
    let mut merged = Vec::with_capacity(slot_count);

    for i in 0..slot_count {
        let mut best = Slot::Rest;
        for line in lines {
            match (best, line[i]) {
                (Slot::Rest, slot) => best = slot,
                (Slot::Note(current), Slot::Note(candidate)) => {
                    if tuning.frequency(candidate) > tuning.frequency(current) {
                        best = Slot::Note(candidate);
                    }
                }
                (Slot::Note(_), Slot::Rest) => {}
            }
        }
        merged.push(best);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(tuning: &Tuning, letter: char, octave: i32) -> Slot {
        Slot::Note(tuning.pitch(letter, octave).unwrap())
    }

    /// Build a notation line with the conventional `label octave|slots|` shape
    fn line(octave: u8, slots: &str) -> String {
        format!("RH:{}|{}|", octave, slots)
    }

    #[test]
    fn test_normalize_basic_line() {
        let tuning = Tuning::default();
        let format = ScoreFormat {
            slots_per_line: 8,
        };
        let slots = format
            .normalize(&line(4, "a--g---f"), 1, &tuning)
            .unwrap();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0], note(&tuning, 'a', 4));
        assert_eq!(slots[1], Slot::Rest);
        assert_eq!(slots[3], note(&tuning, 'g', 4));
        assert_eq!(slots[7], note(&tuning, 'f', 4));
    }

    #[test]
    fn test_normalize_strips_label_prefix() {
        let tuning = Tuning::default();
        let format = ScoreFormat {
            slots_per_line: 4,
        };
        let plain = format.normalize("4|ab-c|", 1, &tuning).unwrap();
        let labeled = format.normalize("LH:4|ab-c|", 1, &tuning).unwrap();
        assert_eq!(plain, labeled);
    }

    #[test]
    fn test_normalize_octave_applies_to_whole_line() {
        let tuning = Tuning::default();
        let format = ScoreFormat {
            slots_per_line: 3,
        };
        let slots = format.normalize("6|cde|", 1, &tuning).unwrap();
        for slot in slots {
            match slot {
                Slot::Note(pitch) => assert_eq!(pitch.octave, 6),
                Slot::Rest => panic!("no rests in this line"),
            }
        }
    }

    #[test]
    fn test_normalize_trailing_carriage_return() {
        let tuning = Tuning::default();
        let format = ScoreFormat {
            slots_per_line: 4,
        };
        let slots = format.normalize("4|ab-c|\r", 1, &tuning).unwrap();
        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn test_normalize_missing_octave_digit() {
        let tuning = Tuning::default();
        let format = ScoreFormat::default();
        let result = format.normalize("no digits here", 7, &tuning);
        assert!(matches!(
            result,
            Err(Error::MissingOctaveDigit { line: 7 })
        ));
    }

    #[test]
    fn test_normalize_invalid_symbol() {
        let tuning = Tuning::default();
        let format = ScoreFormat {
            slots_per_line: 4,
        };
        let result = format.normalize("4|aq-c|", 3, &tuning);
        assert!(matches!(
            result,
            Err(Error::InvalidNoteSymbol { symbol: 'q', line: 3 })
        ));
    }

    #[test]
    fn test_normalize_rejects_wrong_slot_count() {
        let tuning = Tuning::default();
        let format = ScoreFormat {
            slots_per_line: 8,
        };
        let result = format.normalize("4|abc|", 2, &tuning);
        assert!(matches!(
            result,
            Err(Error::UnequalLineLength {
                line: 2,
                expected: 8,
                actual: 3,
            })
        ));
    }

    #[test]
    fn test_merge_single_line_is_identity() {
        let tuning = Tuning::default();
        let voice = vec![
            note(&tuning, 'a', 4),
            Slot::Rest,
            note(&tuning, 'c', 5),
        ];
        assert_eq!(merge(&tuning, &[voice.clone()]), voice);
    }

    #[test]
    fn test_merge_all_rests_stay_rests() {
        let tuning = Tuning::default();
        let top = vec![Slot::Rest, note(&tuning, 'a', 4)];
        let bottom = vec![Slot::Rest, Slot::Rest];
        let merged = merge(&tuning, &[top, bottom]);
        assert_eq!(merged[0], Slot::Rest);
    }

    #[test]
    fn test_merge_picks_highest_pitch() {
        let tuning = Tuning::default();
        let high = note(&tuning, 'c', 5);
        let low = note(&tuning, 'c', 4);
        // Winner is the same no matter which voice comes first
        assert_eq!(merge(&tuning, &[vec![high], vec![low]]), vec![high]);
        assert_eq!(merge(&tuning, &[vec![low], vec![high]]), vec![high]);
    }

    #[test]
    fn test_merge_note_beats_rest() {
        let tuning = Tuning::default();
        let sounding = note(&tuning, 'f', 3);
        let merged = merge(&tuning, &[vec![Slot::Rest], vec![sounding]]);
        assert_eq!(merged, vec![sounding]);
    }

    #[test]
    fn test_merge_tie_keeps_first_voice() {
        let tuning = Tuning::default();
        let first = note(&tuning, 'g', 4);
        let second = note(&tuning, 'g', 4);
        let merged = merge(&tuning, &[vec![first], vec![second]]);
        assert_eq!(merged, vec![first]);
    }
}
