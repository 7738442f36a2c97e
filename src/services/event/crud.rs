use super::{EditError, EventStore};
use crate::models::event::{CalendarEvent, EventId, EventKind};
use crate::services::geometry::{clamp_time, MIN_CREATE_DURATION, MIN_EVENT_DURATION};
use crate::utils::time::parse_time_string;

/// Which edge of an event is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// Top edge - adjusts start time
    Top,
    /// Bottom edge - adjusts end time
    Bottom,
}

/// A single field edit coming from the side panel or an inline editor
#[derive(Debug, Clone, PartialEq)]
pub enum EventField {
    Title(String),
    /// Empty text clears the description
    Description(String),
    Kind(EventKind),
    /// `"HH:MM"`
    Start(String),
    /// `"HH:MM"`
    End(String),
}

/// Parameters for a new event
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub start: f32,
    pub end: f32,
    pub column: usize,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: EventKind,
}

impl NewEvent {
    pub fn new(start: f32, end: f32, column: usize) -> Self {
        Self {
            start,
            end,
            column,
            title: None,
            description: None,
            kind: EventKind::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }
}

impl EventStore {
    /// Append a new event and return its id.
    ///
    /// Times are clamped to the day first. Spans that are empty, inverted or
    /// shorter than a quarter hour are rejected.
    pub fn create(&mut self, draft: NewEvent) -> Result<EventId, EditError> {
        let start = clamp_time(draft.start);
        let end = clamp_time(draft.end);

        if end <= start {
            return Err(EditError::InvalidSpan { start, end });
        }
        if end - start < MIN_CREATE_DURATION {
            return Err(EditError::TooShort {
                duration: end - start,
                min: MIN_CREATE_DURATION,
            });
        }

        let id = self.allocate_id();
        let mut builder = CalendarEvent::builder(id)
            .span(start, end)
            .column(draft.column)
            .kind(draft.kind);
        if let Some(title) = draft.title {
            builder = builder.title(title);
        }
        if let Some(description) = draft.description.filter(|d| !d.is_empty()) {
            builder = builder.description(description);
        }

        self.events.push(builder.build());
        Ok(id)
    }

    /// Move an event to `new_start` in `column`, keeping its duration.
    ///
    /// No clamping happens here: a drag may push an event partly off the grid.
    pub fn move_event(
        &mut self,
        id: EventId,
        new_start: f32,
        column: usize,
    ) -> Result<(), EditError> {
        let event = self.get_mut(id)?;
        let duration = event.duration();
        event.start = new_start;
        event.end = new_start + duration;
        event.column = column;
        Ok(())
    }

    /// Drag one edge of an event to `raw_time`.
    ///
    /// The edge can never come within half an hour of the opposite edge.
    pub fn resize(
        &mut self,
        id: EventId,
        edge: ResizeEdge,
        raw_time: f32,
    ) -> Result<(), EditError> {
        let time = clamp_time(raw_time);
        let event = self.get_mut(id)?;
        match edge {
            ResizeEdge::Top => event.start = time.min(event.end - MIN_EVENT_DURATION),
            ResizeEdge::Bottom => event.end = time.max(event.start + MIN_EVENT_DURATION),
        }
        Ok(())
    }

    /// Remove an event, returning it
    pub fn delete(&mut self, id: EventId) -> Result<CalendarEvent, EditError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(EditError::NotFound(id))?;
        Ok(self.events.remove(index))
    }

    /// Apply a single field edit. Time edits must keep `start < end`.
    pub fn update_field(&mut self, id: EventId, field: EventField) -> Result<(), EditError> {
        let event = self.get_mut(id)?;
        match field {
            EventField::Title(title) => event.title = title,
            EventField::Description(text) => {
                event.description = if text.is_empty() { None } else { Some(text) };
            }
            EventField::Kind(kind) => event.kind = kind,
            EventField::Start(text) => {
                let start = parse_time_string(&text).ok_or(EditError::InvalidTime(text))?;
                if start >= event.end {
                    return Err(EditError::InvalidSpan {
                        start,
                        end: event.end,
                    });
                }
                event.start = start;
            }
            EventField::End(text) => {
                let end = parse_time_string(&text).ok_or(EditError::InvalidTime(text))?;
                if event.start >= end {
                    return Err(EditError::InvalidSpan {
                        start: event.start,
                        end,
                    });
                }
                event.end = end;
            }
        }
        Ok(())
    }

    fn get_mut(&mut self, id: EventId) -> Result<&mut CalendarEvent, EditError> {
        self.events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EditError::NotFound(id))
    }
}
