use super::EventStore;
use crate::models::event::{CalendarEvent, EventId};

impl EventStore {
    /// Retrieve an event by ID.
    pub fn get(&self, id: EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }

    /// Events belonging to one column, in insertion order.
    pub fn events_in_column(&self, column: usize) -> impl Iterator<Item = &CalendarEvent> + '_ {
        self.events.iter().filter(move |event| event.column == column)
    }

    /// Topmost event in `column` covering the hour fraction `time`.
    /// Later events are drawn over earlier ones, so they win.
    pub fn event_at(&self, column: usize, time: f32) -> Option<&CalendarEvent> {
        self.events_in_column(column)
            .filter(|event| event.contains_time(time))
            .last()
    }
}
