use egui::{Pos2, Rect};

use crate::models::event::EventId;
use crate::services::event::ResizeEdge;

pub mod day_event_rendering;
pub mod day_view;
pub mod time_grid;

/// Width of the hour label gutter on the left of every column
pub const TIME_LABEL_WIDTH: f32 = 48.0;
pub const MIN_COLUMN_WIDTH: f32 = 200.0;
/// Gap between an event block and the right edge of its column
pub const EVENT_RIGHT_MARGIN: f32 = 8.0;

/// Something the user did on the grid this frame. Collected while rendering
/// and applied to the planner afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum GridAction {
    ClickSlot { column: usize, y: f32 },
    PressGrid { column: usize, y: f32 },
    Select(EventId),
    Delete(EventId),
    BeginMove(EventId),
    BeginResize(EventId, ResizeEdge),
    BeginTitleEdit(EventId),
    EditTitle(String),
    CommitTitle,
}

/// Per-frame UI state that is not part of the planner
#[derive(Debug, Default)]
pub struct ViewState {
    /// Focus the inline title editor on its next frame
    pub focus_title_editor: bool,
}

/// Screen rects of the rendered grid columns, recorded each frame so the
/// global pointer can be mapped back to a column and a grid offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayout {
    columns: Vec<Rect>,
}

impl GridLayout {
    pub fn new(columns: Vec<Rect>) -> Self {
        Self { columns }
    }

    /// Top edge of the grid, shared by all columns
    pub fn grid_top(&self) -> Option<f32> {
        self.columns.first().map(|rect| rect.top())
    }

    /// Y offset of `pos` from the grid top
    pub fn offset_y(&self, pos: Pos2) -> Option<f32> {
        self.grid_top().map(|top| pos.y - top)
    }

    /// Column whose horizontal extent contains `pos`, with the grid offset
    pub fn column_at(&self, pos: Pos2) -> Option<(usize, f32)> {
        self.columns
            .iter()
            .position(|rect| rect.x_range().contains(pos.x))
            .map(|index| (index, pos.y - self.columns[index].top()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    fn layout() -> GridLayout {
        GridLayout::new(vec![
            Rect::from_min_size(Pos2::new(0.0, 50.0), Vec2::new(200.0, 1536.0)),
            Rect::from_min_size(Pos2::new(200.0, 50.0), Vec2::new(200.0, 1536.0)),
        ])
    }

    #[test]
    fn test_column_at() {
        let layout = layout();
        assert_eq!(layout.column_at(Pos2::new(250.0, 114.0)), Some((1, 64.0)));
        assert_eq!(layout.column_at(Pos2::new(10.0, 50.0)), Some((0, 0.0)));
        assert_eq!(layout.column_at(Pos2::new(450.0, 100.0)), None);
    }

    #[test]
    fn test_offset_y() {
        assert_eq!(layout().offset_y(Pos2::new(999.0, 178.0)), Some(128.0));
        assert_eq!(GridLayout::default().offset_y(Pos2::ZERO), None);
    }
}
