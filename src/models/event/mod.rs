// Event module
// Time-blocked planner event placed in one of the comparison columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to events created from the grid
pub const DEFAULT_TITLE: &str = "New Event";

/// Opaque event identifier, unique for the lifetime of a planner session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render tag for an event. Only affects colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Work,
    Personal,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Work, EventKind::Personal];

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Work => "Work",
            EventKind::Personal => "Personal",
        }
    }
}

/// A block of time on the single-day grid.
///
/// `start` and `end` are fractional hours of the day (`9.5` is 09:30).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub kind: EventKind,
    pub start: f32,
    pub end: f32,
    pub column: usize,
    pub description: Option<String>,
}

impl CalendarEvent {
    /// Create a builder for constructing events with optional fields
    ///
    /// # Examples
    /// ```
    /// use heiko::models::event::{CalendarEvent, EventId, EventKind};
    ///
    /// let event = CalendarEvent::builder(EventId(7))
    ///     .title("Standup")
    ///     .span(9.0, 9.5)
    ///     .kind(EventKind::Work)
    ///     .build();
    /// assert_eq!(event.duration(), 0.5);
    /// ```
    pub fn builder(id: EventId) -> EventBuilder {
        EventBuilder::new(id)
    }

    /// Length of the event in hours
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }

    /// Whether the hour fraction `time` falls inside this event
    pub fn contains_time(&self, time: f32) -> bool {
        self.start <= time && time < self.end
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: EventId,
    title: Option<String>,
    kind: EventKind,
    start: f32,
    end: f32,
    column: usize,
    description: Option<String>,
}

impl EventBuilder {
    pub fn new(id: EventId) -> Self {
        Self {
            id,
            title: None,
            kind: EventKind::default(),
            start: 0.0,
            end: 1.0,
            column: 0,
            description: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set start and end hours
    pub fn span(mut self, start: f32, end: f32) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event. Validation of the span happens in the event store.
    pub fn build(self) -> CalendarEvent {
        CalendarEvent {
            id: self.id,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            kind: self.kind,
            start: self.start,
            end: self.end,
            column: self.column,
            description: self.description,
        }
    }
}
