//! Beep text parsing

use super::event::ToneEvent;
use crate::error::{Error, Result};

/// Parse beep text back into tone events
///
/// The inverse of [`writer::render`](super::writer::render): one
/// `"<frequency>,<duration>"` pair per line. Blank lines are skipped.
pub fn parse(text: &str) -> Result<Vec<ToneEvent>> {
    let mut events = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (frequency, duration) = line.split_once(',').ok_or_else(|| Error::BeepParse {
            line: index + 1,
            message: format!("expected '<frequency>,<duration>', got '{}'", line),
        })?;

        let frequency = parse_field(frequency, "frequency", index + 1)?;
        let duration = parse_field(duration, "duration", index + 1)?;
        events.push(ToneEvent::new(frequency, duration));
    }

    Ok(events)
}

fn parse_field(text: &str, name: &str, line: usize) -> Result<u32> {
    text.trim().parse().map_err(|_| Error::BeepParse {
        line,
        message: format!("invalid {}: '{}'", name, text.trim()),
    })
}
