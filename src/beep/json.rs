//! JSON serialization types for compiled songs

use super::event::ToneEvent;
use serde::Serialize;

/// Top-level JSON structure for a compiled song
#[derive(Debug, Clone, Serialize)]
pub struct BeepJson {
    /// Number of tone events
    pub event_count: usize,
    /// Total playing time in milliseconds
    pub total_duration_ms: u64,
    /// The events in playback order
    pub events: Vec<ToneEvent>,
}

impl BeepJson {
    /// Create a BeepJson from parsed tone events
    pub fn new(events: Vec<ToneEvent>) -> Self {
        let total_duration_ms = events.iter().map(|e| u64::from(e.duration)).sum();
        Self {
            event_count: events.len(),
            total_duration_ms,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let json = BeepJson::new(vec![ToneEvent::new(440, 125), ToneEvent::new(0, 375)]);
        assert_eq!(json.event_count, 2);
        assert_eq!(json.total_duration_ms, 500);
    }

    #[test]
    fn test_serializes_as_expected() {
        let json = BeepJson::new(vec![ToneEvent::new(440, 125)]);
        let text = serde_json::to_string(&json).unwrap();
        assert_eq!(
            text,
            r#"{"event_count":1,"total_duration_ms":125,"events":[{"frequency":440,"duration":125}]}"#
        );
    }
}
