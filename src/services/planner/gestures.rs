// Gesture transitions
//
// Idle -> DragCreating -> Idle   press on empty grid, track, release
// Idle -> Resizing     -> Idle   press on an edge handle, track, release
// Idle -> Moving       -> Idle   drag an event body over any column
// Idle -> EditingTitle -> Idle   double-click a title, type, blur
//
// A gesture can only start from Idle. Live changes are never checkpointed;
// the settle point (release or blur) is.

use super::{log_rejection, DayPlanner};
use crate::models::event::EventId;
use crate::services::event::{EditError, EventField, NewEvent, ResizeEdge};
use crate::services::geometry::{clamp_time, hour_at, raw_time_at, y_to_time, MIN_CREATE_DURATION};
use crate::services::gesture::{DragCreate, Gesture, MoveGesture, ResizeGesture, TitleEdit};

impl DayPlanner {
    /// Click (press and release without dragging) on the grid at `y`.
    /// Creates a one-hour event in the hour row under the pointer unless the
    /// click landed on an event.
    pub fn click_grid(&mut self, column: usize, y: f32) -> Option<EventId> {
        if !self.gesture.is_idle() || self.hit_test(column, y).is_some() {
            return None;
        }
        self.create_at_slot(column, hour_at(y))
    }

    /// Press on the grid at `y`. Starts a drag-create unless the press lands
    /// on an existing event.
    pub fn press_grid(&mut self, column: usize, y: f32) -> bool {
        if !self.gesture.is_idle() || column >= self.column_count {
            return false;
        }
        if let Some(id) = self.hit_test(column, y) {
            log::trace!("Press on event {} does not start a drag-create", id);
            return false;
        }

        let anchor = clamp_time(y_to_time(y));
        self.gesture = Gesture::DragCreating(DragCreate {
            column,
            anchor,
            current: anchor,
        });
        true
    }

    pub fn begin_resize(&mut self, id: EventId, edge: ResizeEdge) -> bool {
        self.begin(id, Gesture::Resizing(ResizeGesture { event_id: id, edge }))
    }

    pub fn begin_move(&mut self, id: EventId) -> bool {
        self.begin(id, Gesture::Moving(MoveGesture { event_id: id }))
    }

    /// Start editing a title in place. The event becomes the selection.
    pub fn begin_title_edit(&mut self, id: EventId) -> bool {
        let started = self.begin(id, Gesture::EditingTitle(TitleEdit { event_id: id }));
        if started {
            self.selected = Some(id);
        }
        started
    }

    /// Pointer moved to `y` (relative to the grid top) during a tracking gesture
    pub fn pointer_moved(&mut self, y: f32) {
        match self.gesture {
            Gesture::DragCreating(ref mut draft) => {
                draft.current = clamp_time(y_to_time(y));
            }
            Gesture::Resizing(ResizeGesture { event_id, edge }) => {
                self.resize(event_id, edge, y_to_time(y));
            }
            Gesture::Idle | Gesture::Moving(_) | Gesture::EditingTitle(_) => {}
        }
    }

    /// Pointer hovering `column` at `y` while moving an event
    pub fn drag_over(&mut self, column: usize, y: f32) {
        if let Gesture::Moving(MoveGesture { event_id }) = self.gesture {
            self.move_event(event_id, y_to_time(y), column);
        }
    }

    /// Pointer released: settle the active pointer gesture.
    pub fn release(&mut self) {
        match self.gesture {
            Gesture::DragCreating(draft) => {
                self.gesture = Gesture::Idle;
                let (start, end) = draft.span();
                if end - start >= MIN_CREATE_DURATION {
                    let new_event = NewEvent::new(start, end, draft.column)
                        .with_kind(self.options.default_kind);
                    self.create(new_event);
                } else {
                    log::trace!("Discarding drag-create of {}h", end - start);
                }
            }
            Gesture::Resizing(_) => {
                self.gesture = Gesture::Idle;
                self.checkpoint();
            }
            Gesture::Moving(_) => {
                self.gesture = Gesture::Idle;
                if self.options.checkpoint_on_move {
                    self.checkpoint();
                }
            }
            Gesture::Idle | Gesture::EditingTitle(_) => {}
        }
    }

    /// Live title text while editing in place
    pub fn edit_title(&mut self, title: impl Into<String>) {
        if let Gesture::EditingTitle(TitleEdit { event_id }) = self.gesture {
            self.update_field(event_id, EventField::Title(title.into()));
        }
    }

    /// Title editor lost focus: finish the edit and checkpoint
    pub fn commit_title_edit(&mut self) {
        if let Gesture::EditingTitle(_) = self.gesture {
            self.gesture = Gesture::Idle;
            self.checkpoint();
        }
    }

    /// Drop the active gesture without settling it. Live changes made by a
    /// resize or move stay in the store until the next checkpoint.
    pub fn cancel_gesture(&mut self) {
        if !self.gesture.is_idle() {
            log::debug!("Cancelled {} gesture", self.gesture.name());
        }
        self.gesture = Gesture::Idle;
    }

    /// Event under the pointer at `y` in `column`
    pub fn hit_test(&self, column: usize, y: f32) -> Option<EventId> {
        self.store.event_at(column, raw_time_at(y)).map(|event| event.id)
    }

    fn begin(&mut self, id: EventId, gesture: Gesture) -> bool {
        if !self.gesture.is_idle() {
            log::trace!(
                "Ignoring {} while {} is active",
                gesture.name(),
                self.gesture.name()
            );
            return false;
        }
        if !self.store.contains(id) {
            log_rejection(gesture.name(), &EditError::NotFound(id));
            return false;
        }
        self.gesture = gesture;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::event::EventStore;
    use crate::services::geometry::PX_PER_HOUR;
    use crate::services::planner::PlannerOptions;
    use pretty_assertions::assert_eq;

    fn planner() -> DayPlanner {
        DayPlanner::with_store(EventStore::with_id_seed(1), PlannerOptions::default())
    }

    fn y(hours: f32) -> f32 {
        hours * PX_PER_HOUR
    }

    #[test]
    fn test_drag_create_commits_on_release() {
        let mut planner = planner();
        assert!(planner.press_grid(0, y(9.0)));
        planner.pointer_moved(y(10.5) + 5.0);
        assert_eq!(
            planner.gesture().drag_create().map(|d| d.span()),
            Some((9.0, 10.5))
        );

        planner.release();
        assert!(planner.gesture().is_idle());
        let event = planner.selected_event().unwrap();
        assert_eq!((event.start, event.end), (9.0, 10.5));
        assert_eq!(planner.history().len(), 2);
    }

    #[test]
    fn test_drag_create_upwards() {
        let mut planner = planner();
        planner.press_grid(0, y(12.0));
        planner.pointer_moved(y(10.0));
        planner.release();
        let event = &planner.events()[0];
        assert_eq!((event.start, event.end), (10.0, 12.0));
    }

    #[test]
    fn test_drag_create_without_movement_is_discarded() {
        let mut planner = planner();
        planner.press_grid(0, y(9.0));
        planner.pointer_moved(y(9.0) + 10.0);
        planner.release();
        assert!(planner.events().is_empty());
        assert_eq!(planner.history().len(), 1);
    }

    #[test]
    fn test_press_on_event_does_not_start_drag_create() {
        let mut planner = planner();
        planner.create_at_slot(0, 9).unwrap();
        assert!(!planner.press_grid(0, y(9.5)));
        assert!(planner.gesture().is_idle());
        assert!(planner.press_grid(0, y(10.0)));
    }

    #[test]
    fn test_drag_create_is_clamped_to_day() {
        let mut planner = planner();
        planner.press_grid(0, y(22.0));
        planner.pointer_moved(y(30.0));
        planner.release();
        assert_eq!(planner.events()[0].end, 24.0);
    }

    #[test]
    fn test_resize_tracks_live_and_checkpoints_once() {
        let mut planner = planner();
        let id = planner.create(NewEvent::new(10.0, 12.0, 0)).unwrap();

        assert!(planner.begin_resize(id, ResizeEdge::Bottom));
        planner.pointer_moved(y(13.0));
        planner.pointer_moved(y(14.0));
        assert_eq!(planner.event(id).unwrap().end, 14.0);
        assert_eq!(planner.history().len(), 2);

        planner.release();
        assert_eq!(planner.history().len(), 3);
        assert!(planner.gesture().is_idle());
    }

    #[test]
    fn test_resize_bottom_past_start_keeps_half_hour() {
        let mut planner = planner();
        let id = planner.create(NewEvent::new(10.0, 12.0, 0)).unwrap();
        planner.begin_resize(id, ResizeEdge::Bottom);
        planner.pointer_moved(y(4.0));
        planner.release();
        let event = planner.event(id).unwrap();
        assert_eq!((event.start, event.end), (10.0, 10.5));
    }

    #[test]
    fn test_move_checkpoint_follows_option() {
        for checkpoint_on_move in [true, false] {
            let options = PlannerOptions {
                checkpoint_on_move,
                ..PlannerOptions::default()
            };
            let mut planner = DayPlanner::with_store(EventStore::with_id_seed(1), options);
            planner.set_column_count(2);
            let id = planner.create(NewEvent::new(9.0, 10.5, 0)).unwrap();

            assert!(planner.begin_move(id));
            planner.drag_over(1, y(13.0) + 20.0);
            planner.release();

            let event = planner.event(id).unwrap();
            assert_eq!((event.start, event.end, event.column), (13.0, 14.5, 1));
            let expected_len = if checkpoint_on_move { 3 } else { 2 };
            assert_eq!(planner.history().len(), expected_len);
        }
    }

    #[test]
    fn test_title_edit_checkpoints_on_blur() {
        let mut planner = planner();
        let id = planner.create_at_slot(0, 9).unwrap();

        assert!(planner.begin_title_edit(id));
        planner.edit_title("Plan");
        planner.edit_title("Planning");
        assert_eq!(planner.event(id).unwrap().title, "Planning");
        assert_eq!(planner.history().len(), 2);

        planner.release();
        assert!(matches!(planner.gesture(), Gesture::EditingTitle(_)));

        planner.commit_title_edit();
        assert!(planner.gesture().is_idle());
        assert_eq!(planner.history().len(), 3);
        assert_eq!(planner.history().current()[0].title, "Planning");
    }

    #[test]
    fn test_only_one_gesture_at_a_time() {
        let mut planner = planner();
        let id = planner.create_at_slot(0, 9).unwrap();
        assert!(planner.begin_move(id));
        assert!(!planner.begin_resize(id, ResizeEdge::Top));
        assert!(!planner.press_grid(0, y(15.0)));
        assert!(planner.click_grid(0, y(15.0)).is_none());
    }

    #[test]
    fn test_gesture_on_missing_event_is_rejected() {
        let mut planner = planner();
        assert!(!planner.begin_resize(EventId(99), ResizeEdge::Top));
        assert!(planner.gesture().is_idle());
    }

    #[test]
    fn test_undo_abandons_active_gesture() {
        let mut planner = planner();
        let id = planner.create_at_slot(0, 9).unwrap();
        planner.begin_resize(id, ResizeEdge::Top);
        planner.undo();
        assert!(planner.gesture().is_idle());
        assert!(planner.events().is_empty());
    }

    #[test]
    fn test_click_grid_on_event_does_nothing() {
        let mut planner = planner();
        planner.click_grid(0, y(14.2)).unwrap();
        assert!(planner.click_grid(0, y(14.7)).is_none());
        assert_eq!(planner.events().len(), 1);
    }

    #[test]
    fn test_cancel_discards_drag_create() {
        let mut planner = planner();
        planner.press_grid(0, y(9.0));
        planner.pointer_moved(y(11.0));
        planner.cancel_gesture();
        planner.release();
        assert!(planner.events().is_empty());
    }
}
