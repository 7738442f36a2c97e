//! Time grid rendering for a single planner column.
//!
//! Draws the hour gutter and hour lines, the drag-create preview and the
//! column's events. Presses and clicks on empty grid become `GridAction`s.

use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::day_event_rendering::{render_event_block, EventBlock};
use super::{GridAction, ViewState, EVENT_RIGHT_MARGIN, TIME_LABEL_WIDTH};
use crate::models::event::CalendarEvent;
use crate::services::geometry::{time_to_y, GRID_HEIGHT, HOURS_PER_DAY};
use crate::services::gesture::{Gesture, TitleEdit};
use crate::services::planner::DayPlanner;
use crate::ui_egui::theme::PlannerTheme;

/// Hour label shown in the gutter, e.g. `"07:00"`
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Screen rect of an event inside the content area of a column
pub fn event_rect(content: Rect, event: &CalendarEvent) -> Rect {
    Rect::from_min_max(
        Pos2::new(content.left() + 2.0, content.top() + time_to_y(event.start)),
        Pos2::new(
            content.right() - EVENT_RIGHT_MARGIN,
            content.top() + time_to_y(event.end),
        ),
    )
}

/// Render one column of the day grid. Returns the column's screen rect.
pub fn render_column(
    ui: &mut egui::Ui,
    column: usize,
    width: f32,
    planner: &DayPlanner,
    theme: &PlannerTheme,
    view_state: &mut ViewState,
    actions: &mut Vec<GridAction>,
) -> Rect {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, GRID_HEIGHT), Sense::click_and_drag());
    let content = Rect::from_min_max(
        Pos2::new(rect.left() + TIME_LABEL_WIDTH, rect.top()),
        rect.max,
    );

    paint_grid(ui, rect, content, theme);

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if content.contains(pos) {
                actions.push(GridAction::ClickSlot {
                    column,
                    y: pos.y - rect.top(),
                });
            }
        }
    }
    if response.drag_started() {
        // Anchor at the press, not where the drag threshold was crossed
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            if content.contains(origin) {
                actions.push(GridAction::PressGrid {
                    column,
                    y: origin.y - rect.top(),
                });
            }
        }
    }

    if let Some(draft) = planner.gesture().drag_create() {
        let (start, end) = draft.span();
        if draft.column == column && end > start {
            let preview = Rect::from_min_max(
                Pos2::new(content.left() + 2.0, content.top() + time_to_y(start)),
                Pos2::new(content.right() - EVENT_RIGHT_MARGIN, content.top() + time_to_y(end)),
            );
            ui.painter().rect_filled(preview, 4.0, theme.preview_fill);
            ui.painter()
                .rect_stroke(preview, 4.0, Stroke::new(1.0, theme.preview_border));
        }
    }

    let editing = match planner.gesture() {
        Gesture::EditingTitle(TitleEdit { event_id }) => Some(*event_id),
        _ => None,
    };
    for event in planner.events_in_column(column) {
        let block = EventBlock {
            event,
            rect: event_rect(content, event),
            selected: planner.selected_id() == Some(event.id),
            editing_title: editing == Some(event.id),
        };
        render_event_block(ui, block, theme, view_state, actions);
    }

    rect
}

fn paint_grid(ui: &egui::Ui, rect: Rect, content: Rect, theme: &PlannerTheme) {
    let painter = ui.painter();
    let line = Stroke::new(1.0, theme.grid_line);

    painter.rect_filled(rect, 0.0, theme.panel_background);
    painter.line_segment([rect.left_top(), rect.left_bottom()], line);
    painter.line_segment([content.left_top(), content.left_bottom()], line);

    for hour in 0..HOURS_PER_DAY as u32 {
        let y = rect.top() + time_to_y(hour as f32);
        painter.line_segment([Pos2::new(content.left(), y), Pos2::new(content.right(), y)], line);

        // Midnight has no label, it would sit on the top border
        if hour > 0 {
            painter.text(
                Pos2::new(content.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                hour_label(hour),
                FontId::proportional(11.0),
                theme.text_secondary,
            );
        }
    }
}
