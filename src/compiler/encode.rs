//! Slot sequence to tone event encoding

use super::score::Slot;
use super::tuning::Tuning;
use crate::beep::ToneEvent;

/// Interpretation of the rest marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestMode {
    /// A rest extends the previous note's duration
    #[default]
    Hold,
    /// A rest becomes an explicit silent event
    Pause,
}

/// Convert a song-length slot sequence into tone events
///
/// `interval_ms` is the fixed length of one slot. With `flush_tail` unset
/// the final pending item (sustained note in hold mode, trailing silence
/// in pause mode) is dropped when the input ends, matching the historical
/// behavior of the format's tooling; set it to emit the tail instead.
pub fn encode(
    tuning: &Tuning,
    slots: &[Slot],
    mode: RestMode,
    interval_ms: u32,
    flush_tail: bool,
) -> Vec<ToneEvent> {
    match mode {
        RestMode::Hold => encode_hold(tuning, slots, interval_ms, flush_tail),
        RestMode::Pause => encode_pause(tuning, slots, interval_ms, flush_tail),
    }
}

/// Hold mode: a note sounds until the next note starts
///
/// The elapsed counter includes the current note's own slot, so a note
/// followed by two rests lasts three intervals. Leading rests carry no
/// duration into the first note.
fn encode_hold(
    tuning: &Tuning,
    slots: &[Slot],
    interval_ms: u32,
    flush_tail: bool,
) -> Vec<ToneEvent> {
    let mut events = Vec::new();
    let mut current = None;
    let mut elapsed = interval_ms;

    for &slot in slots {
        match slot {
            Slot::Rest => {
                if current.is_some() {
                    elapsed += interval_ms;
                }
            }
            Slot::Note(pitch) => {
                if let Some(previous) = current {
                    events.push(ToneEvent::new(tuning.frequency(previous) as u32, elapsed));
                }
                current = Some(pitch);
                elapsed = interval_ms;
            }
        }
    }

    if flush_tail {
        if let Some(previous) = current {
            events.push(ToneEvent::new(tuning.frequency(previous) as u32, elapsed));
        }
    }

    events
}

/// Pause mode: rests become silence, every note is one fixed interval
///
/// Consecutive rests collapse into a single silent event flushed before
/// the next note. Identical consecutive notes stay separate events.
fn encode_pause(
    tuning: &Tuning,
    slots: &[Slot],
    interval_ms: u32,
    flush_tail: bool,
) -> Vec<ToneEvent> {
    let mut events = Vec::new();
    let mut pause: Option<u32> = None;

    for &slot in slots {
        match slot {
            Slot::Rest => {
                pause = Some(pause.unwrap_or(0) + interval_ms);
            }
            Slot::Note(pitch) => {
                if let Some(silence) = pause.take() {
                    events.push(ToneEvent::pause(silence));
                }
                events.push(ToneEvent::new(
                    tuning.frequency(pitch) as u32,
                    interval_ms,
                ));
            }
        }
    }

    if flush_tail {
        if let Some(silence) = pause.take() {
            events.push(ToneEvent::pause(silence));
        }
    }

    events
}
