//! Side panel with the selected event's fields, or a form for a new event.
//!
//! Text fields mirror the store whenever they are not focused, so a rejected
//! edit snaps back to the committed value on the next frame.

use super::PlannerApp;
use crate::models::event::{CalendarEvent, EventKind};
use crate::services::event::{EventField, NewEvent};
use crate::utils::time::{format_duration, format_time, parse_time_string};
use egui::{Id, RichText};

const SIDEBAR_MIN_WIDTH: f32 = 220.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 260.0;
const SIDEBAR_MAX_WIDTH: f32 = 360.0;

/// Edit buffers for the side panel
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    title: String,
    description: String,
    start: String,
    end: String,
    new_event: NewEventForm,
}

#[derive(Debug, Clone, PartialEq)]
struct NewEventForm {
    title: String,
    description: String,
    start: String,
    end: String,
    column: usize,
    kind: Option<EventKind>,
}

impl Default for NewEventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start: "09:00".to_string(),
            end: "10:00".to_string(),
            column: 0,
            kind: None,
        }
    }
}

impl NewEventForm {
    /// Build the event to create, or `None` when a time does not parse
    fn to_new_event(&self, default_kind: EventKind) -> Option<NewEvent> {
        let start = parse_time_string(&self.start)?;
        let end = parse_time_string(&self.end)?;

        let mut draft =
            NewEvent::new(start, end, self.column).with_kind(self.kind.unwrap_or(default_kind));
        if !self.title.trim().is_empty() {
            draft = draft.with_title(self.title.trim());
        }
        if !self.description.trim().is_empty() {
            draft = draft.with_description(self.description.clone());
        }
        Some(draft)
    }
}

impl PlannerApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("event_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                match self.planner.selected_event().cloned() {
                    Some(event) => self.render_event_editor(ui, &event),
                    None => self.render_new_event_form(ui),
                }
            });
    }

    fn render_event_editor(&mut self, ui: &mut egui::Ui, event: &CalendarEvent) {
        let id = event.id;
        ui.heading("Event");
        ui.label(
            RichText::new(format!(
                "View {} · {}",
                event.column + 1,
                format_duration(event.duration())
            ))
            .color(self.active_theme.text_secondary),
        );
        ui.add_space(8.0);

        let mut commits = Vec::new();

        ui.label("Title");
        let response = synced_field(
            ui,
            "sidebar_title",
            &mut self.sidebar.title,
            &event.title,
            false,
        );
        if response.lost_focus() {
            commits.push(EventField::Title(self.sidebar.title.clone()));
        }

        ui.label("Kind");
        let mut kind = event.kind;
        egui::ComboBox::from_id_source("sidebar_kind")
            .selected_text(kind.label())
            .show_ui(ui, |ui| {
                for option in EventKind::ALL {
                    ui.selectable_value(&mut kind, option, option.label());
                }
            });
        if kind != event.kind {
            commits.push(EventField::Kind(kind));
        }

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Start");
                let response = synced_field(
                    ui,
                    "sidebar_start",
                    &mut self.sidebar.start,
                    &format_time(event.start),
                    false,
                );
                if response.lost_focus() {
                    commits.push(EventField::Start(self.sidebar.start.clone()));
                }
            });
            ui.vertical(|ui| {
                ui.label("End");
                let response = synced_field(
                    ui,
                    "sidebar_end",
                    &mut self.sidebar.end,
                    &format_time(event.end),
                    false,
                );
                if response.lost_focus() {
                    commits.push(EventField::End(self.sidebar.end.clone()));
                }
            });
        });

        ui.label("Description");
        let response = synced_field(
            ui,
            "sidebar_description",
            &mut self.sidebar.description,
            event.description.as_deref().unwrap_or_default(),
            true,
        );
        if response.lost_focus() {
            commits.push(EventField::Description(self.sidebar.description.clone()));
        }

        for field in commits {
            self.planner.commit_field(id, field);
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Delete").clicked() {
                self.planner.delete(id);
            }
            if ui.button("Done").clicked() {
                self.planner.clear_selection();
            }
        });
    }

    fn render_new_event_form(&mut self, ui: &mut egui::Ui) {
        let column_count = self.planner.column_count();
        let default_kind = self.planner.options().default_kind;
        let form = &mut self.sidebar.new_event;
        form.column = form.column.min(column_count.saturating_sub(1));

        ui.heading("New Event");
        ui.add_space(8.0);

        ui.label("Title");
        ui.add(
            egui::TextEdit::singleline(&mut form.title)
                .hint_text(crate::models::event::DEFAULT_TITLE)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Start");
                ui.add(egui::TextEdit::singleline(&mut form.start).desired_width(80.0));
            });
            ui.vertical(|ui| {
                ui.label("End");
                ui.add(egui::TextEdit::singleline(&mut form.end).desired_width(80.0));
            });
        });

        ui.horizontal(|ui| {
            ui.label("View");
            egui::ComboBox::from_id_source("new_event_column")
                .selected_text(format!("{}", form.column + 1))
                .show_ui(ui, |ui| {
                    for column in 0..column_count {
                        ui.selectable_value(&mut form.column, column, format!("{}", column + 1));
                    }
                });

            let mut kind = form.kind.unwrap_or(default_kind);
            egui::ComboBox::from_id_source("new_event_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for option in EventKind::ALL {
                        ui.selectable_value(&mut kind, option, option.label());
                    }
                });
            if kind != form.kind.unwrap_or(default_kind) {
                form.kind = Some(kind);
            }
        });

        ui.label("Description");
        ui.add(egui::TextEdit::multiline(&mut form.description).desired_width(f32::INFINITY));

        ui.add_space(12.0);
        let draft = form.to_new_event(default_kind);
        if ui
            .add_enabled(draft.is_some(), egui::Button::new("Save"))
            .on_disabled_hover_text("Times must be HH:MM")
            .clicked()
        {
            if let Some(draft) = draft {
                if self.planner.create(draft).is_some() {
                    self.sidebar.new_event = NewEventForm::default();
                }
            }
        }

        ui.add_space(16.0);
        ui.label(
            RichText::new("Click an hour to add an event, or drag across the grid.")
                .small()
                .color(self.active_theme.text_secondary),
        );
    }
}

/// Text field that shows `committed` whenever it does not have focus
fn synced_field(
    ui: &mut egui::Ui,
    id_source: &str,
    buffer: &mut String,
    committed: &str,
    multiline: bool,
) -> egui::Response {
    let id = Id::new(id_source);
    if !ui.memory(|m| m.has_focus(id)) && buffer != committed {
        buffer.clear();
        buffer.push_str(committed);
    }

    let edit = if multiline {
        egui::TextEdit::multiline(buffer)
    } else {
        egui::TextEdit::singleline(buffer)
    };
    ui.add(edit.id(id).desired_width(f32::INFINITY))
}
