//! Day planner state machine.
//!
//! `DayPlanner` owns the event store, the undo history, the selection and the
//! active gesture. Every rejected edit is a silent no-op for the caller: the
//! reason is logged at debug level and state is left untouched.

use chrono::{Duration, Local, NaiveDate};

use crate::models::event::{CalendarEvent, EventId, EventKind};
use crate::models::settings::{Settings, MAX_COLUMNS, MIN_COLUMNS};
use crate::services::event::{EditError, EventField, EventStore, NewEvent, ResizeEdge};
use crate::services::gesture::Gesture;
use crate::services::history::History;

mod gestures;

/// Behaviour switches taken from the user's settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerOptions {
    /// Checkpoint when a drag-move is released
    pub checkpoint_on_move: bool,
    /// Kind given to events created from the grid
    pub default_kind: EventKind,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            checkpoint_on_move: true,
            default_kind: EventKind::Work,
        }
    }
}

impl From<&Settings> for PlannerOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            checkpoint_on_move: settings.checkpoint_on_move,
            default_kind: settings.default_event_kind,
        }
    }
}

pub struct DayPlanner {
    store: EventStore,
    history: History,
    selected: Option<EventId>,
    column_count: usize,
    gesture: Gesture,
    date: NaiveDate,
    options: PlannerOptions,
}

impl Default for DayPlanner {
    fn default() -> Self {
        Self::new(PlannerOptions::default())
    }
}

impl DayPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        Self::with_store(EventStore::new(), options)
    }

    /// Build a planner around an existing store, e.g. one with a fixed id seed.
    /// A non-empty store becomes the first checkpoint above the empty floor.
    pub fn with_store(store: EventStore, options: PlannerOptions) -> Self {
        let mut history = History::new();
        if !store.is_empty() {
            history.checkpoint(store.snapshot());
        }
        Self {
            store,
            history,
            selected: None,
            column_count: MIN_COLUMNS,
            gesture: Gesture::Idle,
            date: Local::now().date_naive(),
            options,
        }
    }

    pub fn options(&self) -> PlannerOptions {
        self.options
    }

    // ---- Queries -------------------------------------------------------

    pub fn events(&self) -> &[CalendarEvent] {
        self.store.events()
    }

    pub fn event(&self, id: EventId) -> Option<&CalendarEvent> {
        self.store.get(id)
    }

    pub fn events_in_column(&self, column: usize) -> impl Iterator<Item = &CalendarEvent> + '_ {
        self.store.events_in_column(column)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn selected_id(&self) -> Option<EventId> {
        self.selected
    }

    /// The selected event, looked up fresh from the store
    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.selected.and_then(|id| self.store.get(id))
    }

    // ---- Selection -----------------------------------------------------

    pub fn select(&mut self, id: EventId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ---- Mutations -----------------------------------------------------

    /// Create an event, select it and checkpoint.
    pub fn create(&mut self, draft: NewEvent) -> Option<EventId> {
        if draft.column >= self.column_count {
            return rejected(
                "create",
                EditError::ColumnOutOfRange {
                    column: draft.column,
                    count: self.column_count,
                },
            );
        }

        match self.store.create(draft) {
            Ok(id) => {
                log::debug!("Created event {}", id);
                self.selected = Some(id);
                self.checkpoint();
                Some(id)
            }
            Err(err) => rejected("create", err),
        }
    }

    /// Create a one-hour event from a click on the hour row `hour`
    pub fn create_at_slot(&mut self, column: usize, hour: u32) -> Option<EventId> {
        let start = hour as f32;
        let draft = NewEvent::new(start, start + 1.0, column).with_kind(self.options.default_kind);
        self.create(draft)
    }

    /// Live move. Not checkpointed; see [`DayPlanner::release`].
    pub fn move_event(&mut self, id: EventId, new_start: f32, column: usize) -> bool {
        if column >= self.column_count {
            log_rejection(
                "move",
                &EditError::ColumnOutOfRange {
                    column,
                    count: self.column_count,
                },
            );
            return false;
        }
        self.store
            .move_event(id, new_start, column)
            .map_err(|err| log_rejection("move", &err))
            .is_ok()
    }

    /// Live resize. Not checkpointed; see [`DayPlanner::release`].
    pub fn resize(&mut self, id: EventId, edge: ResizeEdge, raw_time: f32) -> bool {
        self.store
            .resize(id, edge, raw_time)
            .map_err(|err| log_rejection("resize", &err))
            .is_ok()
    }

    /// Delete an event and checkpoint. Drops the selection and any gesture on it.
    pub fn delete(&mut self, id: EventId) -> bool {
        match self.store.delete(id) {
            Ok(event) => {
                log::debug!("Deleted event {} \"{}\"", id, event.title);
                if self.selected == Some(id) {
                    self.selected = None;
                }
                if self.gesture.target() == Some(id) {
                    self.gesture = Gesture::Idle;
                }
                self.checkpoint();
                true
            }
            Err(err) => {
                log_rejection("delete", &err);
                false
            }
        }
    }

    /// Apply a field edit without checkpointing (live typing)
    pub fn update_field(&mut self, id: EventId, field: EventField) -> bool {
        self.store
            .update_field(id, field)
            .map_err(|err| log_rejection("update", &err))
            .is_ok()
    }

    /// Apply a field edit and checkpoint, as on blur of a side-panel field
    pub fn commit_field(&mut self, id: EventId, field: EventField) -> bool {
        let applied = self.update_field(id, field);
        self.checkpoint();
        applied
    }

    pub fn set_column_count(&mut self, count: usize) {
        let clamped = count.clamp(MIN_COLUMNS, MAX_COLUMNS);
        if clamped != self.column_count {
            log::debug!("Column count {} -> {}", self.column_count, clamped);
        }
        self.column_count = clamped;
    }

    pub fn add_column(&mut self) {
        self.set_column_count(self.column_count + 1);
    }

    pub fn remove_column(&mut self) {
        self.set_column_count(self.column_count.saturating_sub(1));
    }

    // ---- History -------------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.store.restore(snapshot);
        self.after_restore();
        log::debug!("Undo -> snapshot {}", self.history.cursor());
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.store.restore(snapshot);
        self.after_restore();
        log::debug!("Redo -> snapshot {}", self.history.cursor());
        true
    }

    fn after_restore(&mut self) {
        self.gesture = Gesture::Idle;
        if let Some(id) = self.selected {
            if !self.store.contains(id) {
                self.selected = None;
            }
        }
    }

    /// Push the live collection, skipping it when nothing changed since the
    /// last checkpoint
    fn checkpoint(&mut self) {
        if self.store.events() == self.history.current() {
            return;
        }
        self.history.checkpoint(self.store.snapshot());
    }

    // ---- Date header -----------------------------------------------------

    /// Date shown in the header. Events are not keyed by date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn next_day(&mut self) {
        self.date += Duration::days(1);
    }

    pub fn previous_day(&mut self) {
        self.date -= Duration::days(1);
    }
}

fn log_rejection(operation: &str, err: &EditError) {
    log::debug!("Ignoring {}: {}", operation, err);
}

fn rejected<T>(operation: &str, err: EditError) -> Option<T> {
    log_rejection(operation, &err);
    None
}
