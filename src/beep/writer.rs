//! Beep text rendering

use super::event::ToneEvent;

/// Render tone events as beep text, truncating past a time limit
///
/// One `"<frequency>,<duration>"` line per event, joined by newlines with
/// no trailing newline. Accumulated duration is checked after each event,
/// so the event that crosses `limit_ms` is the last one included.
/// `limit_ms == 0` disables truncation.
pub fn render(events: &[ToneEvent], limit_ms: u32) -> String {
    let mut lines = Vec::new();
    let mut time = 0u64;

    for event in events {
        lines.push(format!("{},{}", event.frequency, event.duration));
        time += u64::from(event.duration);
        if limit_ms != 0 && time > u64::from(limit_ms) {
            break;
        }
    }

    lines.join("\n")
}
