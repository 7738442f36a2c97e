mod lifecycle;
mod pointer;
mod shortcuts;
mod sidebar;

use self::sidebar::SidebarState;
use crate::models::settings::Settings;
use crate::services::planner::DayPlanner;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::PlannerTheme;
use crate::ui_egui::views::day_view::{DayView, HeaderAction};
use crate::ui_egui::views::{GridAction, GridLayout, ViewState};
use chrono::Local;

pub struct PlannerApp {
    planner: DayPlanner,
    /// Persisted preferences; column count is written back on exit
    settings: Settings,
    /// `None` when no config directory could be resolved
    settings_service: Option<SettingsService>,
    active_theme: PlannerTheme,
    view_state: ViewState,
    /// Column rects from the previous frame, used to follow the pointer
    grid_layout: GridLayout,
    sidebar: SidebarState,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl PlannerApp {
    fn handle_update(&mut self, ctx: &egui::Context) {
        self.handle_keyboard_shortcuts(ctx);
        self.track_pointer(ctx);

        self.render_sidebar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let outcome =
                DayView::show(ui, &self.planner, &self.active_theme, &mut self.view_state);
            self.grid_layout = outcome.layout;
            self.apply_header_actions(outcome.header);
            self.apply_grid_actions(outcome.grid);
        });
    }

    fn apply_header_actions(&mut self, actions: Vec<HeaderAction>) {
        for action in actions {
            match action {
                HeaderAction::PreviousDay => self.planner.previous_day(),
                HeaderAction::NextDay => self.planner.next_day(),
                HeaderAction::Today => self.planner.set_date(Local::now().date_naive()),
                HeaderAction::AddColumn => self.planner.add_column(),
                HeaderAction::RemoveColumn => self.planner.remove_column(),
                HeaderAction::Undo => {
                    self.planner.undo();
                }
                HeaderAction::Redo => {
                    self.planner.redo();
                }
            }
        }
    }

    fn apply_grid_actions(&mut self, actions: Vec<GridAction>) {
        for action in actions {
            match action {
                GridAction::ClickSlot { column, y } => {
                    self.planner.click_grid(column, y);
                }
                GridAction::PressGrid { column, y } => {
                    self.planner.press_grid(column, y);
                }
                GridAction::Select(id) => {
                    self.planner.select(id);
                }
                GridAction::Delete(id) => {
                    self.planner.delete(id);
                }
                GridAction::BeginMove(id) => {
                    self.planner.begin_move(id);
                }
                GridAction::BeginResize(id, edge) => {
                    self.planner.begin_resize(id, edge);
                }
                GridAction::BeginTitleEdit(id) => {
                    if self.planner.begin_title_edit(id) {
                        self.view_state.focus_title_editor = true;
                    }
                }
                GridAction::EditTitle(text) => self.planner.edit_title(text),
                GridAction::CommitTitle => self.planner.commit_title_edit(),
            }
        }
    }
}
