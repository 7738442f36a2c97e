//! In-memory event store.
//! Holds the authoritative event list for the session; mutations live in
//! `crud`, lookups in `queries`.

use crate::models::event::{CalendarEvent, EventId};
use thiserror::Error;

pub mod crud;
pub mod queries;

pub use crud::{EventField, NewEvent, ResizeEdge};

/// Reasons an edit is rejected. The planner treats all of these as no-ops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("event {0} not found")]
    NotFound(EventId),

    #[error("event must end after it starts (start {start}, end {end})")]
    InvalidSpan { start: f32, end: f32 },

    #[error("event of {duration}h is shorter than the {min}h minimum")]
    TooShort { duration: f32, min: f32 },

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("column {column} is outside the {count} visible columns")]
    ColumnOutOfRange { column: usize, count: usize },
}

/// Ordered collection of events for the current session.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    /// Create an empty store whose ids start at the current wall-clock millisecond
    pub fn new() -> Self {
        let seed = chrono::Utc::now().timestamp_millis().max(0) as u64;
        Self::with_id_seed(seed)
    }

    /// Create an empty store with a fixed first id
    pub fn with_id_seed(seed: u64) -> Self {
        Self {
            events: Vec::new(),
            next_id: seed,
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Copy of the full collection, for history checkpoints
    pub fn snapshot(&self) -> Vec<CalendarEvent> {
        self.events.clone()
    }

    /// Replace the collection with a snapshot. The id counter is left alone
    /// so ids are never handed out twice.
    pub fn restore(&mut self, events: &[CalendarEvent]) {
        self.events = events.to_vec();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn allocate_id(&mut self) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        id
    }
}
