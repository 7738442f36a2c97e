// Gesture state
//
// Transient pointer-interaction state. None of it is ever checkpointed;
// the planner drives the transitions in `services::planner::gestures`.

use crate::models::event::EventId;
use crate::services::event::ResizeEdge;

/// Provisional rectangle while dragging out a new event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCreate {
    pub column: usize,
    /// Time under the initial press
    pub anchor: f32,
    /// Time under the pointer now
    pub current: f32,
}

impl DragCreate {
    /// Ordered `(start, end)` of the provisional rectangle
    pub fn span(&self) -> (f32, f32) {
        (self.anchor.min(self.current), self.anchor.max(self.current))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGesture {
    pub event_id: EventId,
    pub edge: ResizeEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGesture {
    pub event_id: EventId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleEdit {
    pub event_id: EventId,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    DragCreating(DragCreate),
    Resizing(ResizeGesture),
    Moving(MoveGesture),
    EditingTitle(TitleEdit),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Whether the front-end should follow the global pointer and settle
    /// the gesture on release. Dropped as soon as the gesture settles.
    pub fn captures_pointer(&self) -> bool {
        matches!(
            self,
            Gesture::DragCreating(_) | Gesture::Resizing(_) | Gesture::Moving(_)
        )
    }

    /// Event the gesture is operating on, if any
    pub fn target(&self) -> Option<EventId> {
        match self {
            Gesture::Resizing(resize) => Some(resize.event_id),
            Gesture::Moving(moving) => Some(moving.event_id),
            Gesture::EditingTitle(edit) => Some(edit.event_id),
            Gesture::Idle | Gesture::DragCreating(_) => None,
        }
    }

    pub fn drag_create(&self) -> Option<&DragCreate> {
        match self {
            Gesture::DragCreating(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::DragCreating(_) => "drag-create",
            Gesture::Resizing(_) => "resize",
            Gesture::Moving(_) => "move",
            Gesture::EditingTitle(_) => "title-edit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_create_span_is_ordered() {
        let upward = DragCreate {
            column: 0,
            anchor: 12.0,
            current: 10.5,
        };
        assert_eq!(upward.span(), (10.5, 12.0));
    }

    #[test]
    fn test_pointer_capture_only_for_tracking_gestures() {
        let id = EventId(1);
        assert!(!Gesture::Idle.captures_pointer());
        assert!(Gesture::Resizing(ResizeGesture {
            event_id: id,
            edge: ResizeEdge::Top
        })
        .captures_pointer());
        assert!(Gesture::Moving(MoveGesture { event_id: id }).captures_pointer());
        assert!(!Gesture::EditingTitle(TitleEdit { event_id: id }).captures_pointer());
    }

    #[test]
    fn test_target() {
        let id = EventId(9);
        assert_eq!(Gesture::Moving(MoveGesture { event_id: id }).target(), Some(id));
        assert_eq!(Gesture::Idle.target(), None);
    }
}
