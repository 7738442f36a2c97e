// Pointer tracking for active gestures
//
// Drag-create, resize and move keep following the pointer after it leaves
// the widget that started them. Tracking is only active while such a
// gesture is in progress and ends on the first release.

use super::PlannerApp;
use crate::services::gesture::Gesture;
use egui::CursorIcon;

impl PlannerApp {
    pub(super) fn track_pointer(&mut self, ctx: &egui::Context) {
        if !self.planner.gesture().captures_pointer() {
            return;
        }

        let (pos, released) = ctx.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));

        if let Some(pos) = pos {
            match self.planner.gesture() {
                Gesture::Moving(_) => {
                    if let Some((column, y)) = self.grid_layout.column_at(pos) {
                        self.planner.drag_over(column, y);
                    }
                }
                _ => {
                    if let Some(y) = self.grid_layout.offset_y(pos) {
                        self.planner.pointer_moved(y);
                    }
                }
            }
        }

        match self.planner.gesture() {
            Gesture::Resizing(_) => ctx.set_cursor_icon(CursorIcon::ResizeVertical),
            Gesture::Moving(_) => ctx.set_cursor_icon(CursorIcon::Grabbing),
            _ => {}
        }

        if released {
            self.planner.release();
        }
    }
}
