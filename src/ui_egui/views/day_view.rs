use egui::{Margin, Stroke, Vec2};

use super::time_grid::render_column;
use super::{GridAction, GridLayout, ViewState, MIN_COLUMN_WIDTH};
use crate::models::settings::{MAX_COLUMNS, MIN_COLUMNS};
use crate::services::planner::DayPlanner;
use crate::ui_egui::theme::PlannerTheme;

/// Buttons in the day header strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    PreviousDay,
    NextDay,
    Today,
    AddColumn,
    RemoveColumn,
    Undo,
    Redo,
}

/// Everything the day view collected during one frame
#[derive(Debug, Default)]
pub struct DayViewOutcome {
    pub header: Vec<HeaderAction>,
    pub grid: Vec<GridAction>,
    pub layout: GridLayout,
}

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        planner: &DayPlanner,
        theme: &PlannerTheme,
        view_state: &mut ViewState,
    ) -> DayViewOutcome {
        let mut outcome = DayViewOutcome::default();

        Self::render_header(ui, planner, theme, &mut outcome.header);
        ui.add_space(8.0);

        let column_count = planner.column_count();
        let mut columns = Vec::with_capacity(column_count);

        egui::ScrollArea::both()
            .id_source("planner_day_grid")
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let width = column_width(ui.available_width(), column_count);
                // Columns sit flush against each other
                ui.spacing_mut().item_spacing = Vec2::ZERO;
                ui.horizontal_top(|ui| {
                    for column in 0..column_count {
                        let rect = render_column(
                            ui,
                            column,
                            width,
                            planner,
                            theme,
                            view_state,
                            &mut outcome.grid,
                        );
                        columns.push(rect);
                    }
                });
            });

        outcome.layout = GridLayout::new(columns);
        outcome
    }

    fn render_header(
        ui: &mut egui::Ui,
        planner: &DayPlanner,
        theme: &PlannerTheme,
        actions: &mut Vec<HeaderAction>,
    ) {
        let date = planner.date();
        let day_name = date.format("%A").to_string();
        let date_label = date.format("%B %d, %Y").to_string();
        let column_count = planner.column_count();

        let header_frame = egui::Frame::none()
            .fill(theme.panel_background)
            .rounding(egui::Rounding::same(12.0))
            .stroke(Stroke::new(1.0, theme.grid_line))
            .inner_margin(Margin::symmetric(16.0, 12.0));

        header_frame.show(ui, |strip_ui| {
            strip_ui.horizontal(|row_ui| {
                if row_ui.button("◀").on_hover_text("Previous day").clicked() {
                    actions.push(HeaderAction::PreviousDay);
                }
                row_ui.vertical(|text_ui| {
                    text_ui.label(
                        egui::RichText::new(&day_name)
                            .size(20.0)
                            .color(theme.text_primary)
                            .strong(),
                    );
                    text_ui.label(
                        egui::RichText::new(&date_label)
                            .size(14.0)
                            .color(theme.text_secondary),
                    );
                });
                if row_ui.button("▶").on_hover_text("Next day").clicked() {
                    actions.push(HeaderAction::NextDay);
                }
                if row_ui.button("Today").clicked() {
                    actions.push(HeaderAction::Today);
                }

                row_ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |controls| {
                        if controls
                            .add_enabled(column_count < MAX_COLUMNS, egui::Button::new("Add View"))
                            .clicked()
                        {
                            actions.push(HeaderAction::AddColumn);
                        }
                        if controls
                            .add_enabled(
                                column_count > MIN_COLUMNS,
                                egui::Button::new("Remove View"),
                            )
                            .clicked()
                        {
                            actions.push(HeaderAction::RemoveColumn);
                        }
                        controls.separator();
                        if controls
                            .add_enabled(planner.can_redo(), egui::Button::new("Redo"))
                            .on_hover_text("Ctrl+Shift+Z")
                            .clicked()
                        {
                            actions.push(HeaderAction::Redo);
                        }
                        if controls
                            .add_enabled(planner.can_undo(), egui::Button::new("Undo"))
                            .on_hover_text("Ctrl+Z")
                            .clicked()
                        {
                            actions.push(HeaderAction::Undo);
                        }
                    },
                );
            });
        });
    }
}

/// Columns share the available width but never shrink below the minimum;
/// the scroll area takes over from there.
pub fn column_width(available: f32, column_count: usize) -> f32 {
    let count = column_count.max(1) as f32;
    (available / count).max(MIN_COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_splits_available_space() {
        assert_eq!(column_width(1000.0, 2), 500.0);
        assert_eq!(column_width(900.0, 1), 900.0);
    }

    #[test]
    fn test_column_width_has_minimum() {
        assert_eq!(column_width(600.0, 4), MIN_COLUMN_WIDTH);
        assert_eq!(column_width(0.0, 0), MIN_COLUMN_WIDTH);
    }
}
