//! Event block rendering for the day grid.
//!
//! Paints a single event with its accent bar, title and time range, and
//! registers the block's interactions (select, move, resize, delete and the
//! inline title editor) as `GridAction`s.

use egui::{Align2, CursorIcon, FontId, Id, Pos2, Rect, Sense, Stroke, Vec2};

use super::{GridAction, ViewState};
use crate::models::event::CalendarEvent;
use crate::services::event::ResizeEdge;
use crate::services::geometry::MIN_EVENT_DURATION;
use crate::ui_egui::resize::{draw_handles, HandleRects};
use crate::ui_egui::theme::PlannerTheme;
use crate::utils::time::{format_duration, format_time};

const ACCENT_WIDTH: f32 = 4.0;
const ROUNDING: f32 = 4.0;
const TEXT_PADDING: f32 = 6.0;
const DELETE_BUTTON_SIZE: f32 = 16.0;
const TITLE_EDITOR_HEIGHT: f32 = 20.0;

/// An event placed on screen
pub struct EventBlock<'a> {
    pub event: &'a CalendarEvent,
    pub rect: Rect,
    pub selected: bool,
    pub editing_title: bool,
}

/// `"09:00 - 10:30 (1h 30m)"`
pub fn time_range_label(event: &CalendarEvent) -> String {
    format!(
        "{} - {} ({})",
        format_time(event.start),
        format_time(event.end),
        format_duration(event.duration())
    )
}

/// Half-hour events get a single line with the title and time side by side
pub fn is_compact(event: &CalendarEvent) -> bool {
    event.duration() <= MIN_EVENT_DURATION
}

/// Render an event block and collect what the user did with it.
pub fn render_event_block(
    ui: &mut egui::Ui,
    block: EventBlock<'_>,
    theme: &PlannerTheme,
    view_state: &mut ViewState,
    actions: &mut Vec<GridAction>,
) {
    let EventBlock {
        event,
        rect,
        selected,
        editing_title,
    } = block;
    let id = event.id;

    // Later registrations sit on top: body, then edge handles, then the
    // delete button.
    let body = ui.interact(rect, Id::new(("planner_event", id)), Sense::click_and_drag());
    if body.double_clicked() {
        actions.push(GridAction::BeginTitleEdit(id));
    } else if body.clicked() {
        actions.push(GridAction::Select(id));
    }
    if body.drag_started() {
        actions.push(GridAction::BeginMove(id));
    }
    if body.hovered() && !editing_title {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }

    let handles = HandleRects::for_event(rect);
    let mut hovered_edge = None;
    for edge in [ResizeEdge::Top, ResizeEdge::Bottom] {
        let response = ui.interact(
            handles.get(edge),
            Id::new(("planner_event_resize", id, edge)),
            Sense::drag(),
        );
        if response.drag_started() {
            actions.push(GridAction::BeginResize(id, edge));
        }
        if response.hovered() {
            hovered_edge = Some(edge);
            ui.ctx().set_cursor_icon(edge.cursor_icon());
        }
    }

    let delete_rect = Rect::from_min_size(
        Pos2::new(
            rect.right() - DELETE_BUTTON_SIZE - 2.0,
            rect.top() + (rect.height() - DELETE_BUTTON_SIZE).min(8.0).max(0.0) / 2.0,
        ),
        Vec2::splat(DELETE_BUTTON_SIZE),
    );
    let delete = ui.interact(delete_rect, Id::new(("planner_event_delete", id)), Sense::click());
    if delete.clicked() {
        actions.push(GridAction::Delete(id));
    }

    paint_block(ui, event, rect, selected, theme);

    let show_controls = selected || ui.rect_contains_pointer(rect.expand(2.0));
    if show_controls {
        let (_, accent) = theme.event_colors(event.kind);
        draw_handles(ui.painter(), &handles, hovered_edge, accent);

        let color = if delete.hovered() {
            theme.text_primary
        } else {
            theme.text_secondary
        };
        ui.painter().text(
            delete_rect.center(),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(11.0),
            color,
        );
    }

    if editing_title {
        render_title_editor(ui, event, rect, view_state, actions);
    }
}

fn paint_block(
    ui: &egui::Ui,
    event: &CalendarEvent,
    rect: Rect,
    selected: bool,
    theme: &PlannerTheme,
) {
    let (fill, accent) = theme.event_colors(event.kind);
    let painter = ui.painter();

    painter.rect_filled(rect, ROUNDING, fill);
    let bar_rect = Rect::from_min_size(rect.min, Vec2::new(ACCENT_WIDTH, rect.height()));
    painter.rect_filled(bar_rect, ROUNDING, accent);

    if selected {
        painter.rect_stroke(rect, ROUNDING, Stroke::new(2.0, theme.selection_border));
    }

    let text_left = bar_rect.right() + TEXT_PADDING;
    let clipped = painter.with_clip_rect(rect.shrink(1.0));

    if is_compact(event) {
        let line = format!("{}  {}", event.title, time_range_label(event));
        clipped.text(
            Pos2::new(text_left, rect.center().y),
            Align2::LEFT_CENTER,
            line,
            FontId::proportional(12.0),
            theme.text_primary,
        );
    } else {
        clipped.text(
            Pos2::new(text_left, rect.top() + 4.0),
            Align2::LEFT_TOP,
            &event.title,
            FontId::proportional(13.0),
            theme.text_primary,
        );
        clipped.text(
            Pos2::new(text_left, rect.top() + 22.0),
            Align2::LEFT_TOP,
            time_range_label(event),
            FontId::proportional(11.0),
            theme.text_secondary,
        );
    }
}

fn render_title_editor(
    ui: &mut egui::Ui,
    event: &CalendarEvent,
    rect: Rect,
    view_state: &mut ViewState,
    actions: &mut Vec<GridAction>,
) {
    let editor_rect = Rect::from_min_size(
        Pos2::new(rect.left() + ACCENT_WIDTH + 2.0, rect.top() + 2.0),
        Vec2::new(
            (rect.width() - ACCENT_WIDTH - DELETE_BUTTON_SIZE - 8.0).max(40.0),
            TITLE_EDITOR_HEIGHT.min(rect.height() - 4.0).max(12.0),
        ),
    );

    // The store holds the live title, so the buffer is rebuilt every frame
    let mut text = event.title.clone();
    let response = ui.put(
        editor_rect,
        egui::TextEdit::singleline(&mut text)
            .id(Id::new(("planner_title_editor", event.id)))
            .font(FontId::proportional(13.0)),
    );

    if view_state.focus_title_editor {
        response.request_focus();
        view_state.focus_title_editor = false;
    }
    if response.changed() {
        actions.push(GridAction::EditTitle(text));
    }
    if response.lost_focus() {
        actions.push(GridAction::CommitTitle);
    }
}
