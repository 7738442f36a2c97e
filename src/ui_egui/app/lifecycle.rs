use super::sidebar::SidebarState;
use super::PlannerApp;
use crate::models::settings::Settings;
use crate::services::planner::{DayPlanner, PlannerOptions};
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::PlannerTheme;
use crate::ui_egui::views::{GridLayout, ViewState};

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_project_dirs();
        if settings_service.is_none() {
            log::warn!("No config directory available; settings will not be saved");
        }

        let settings = load_settings_or_default(settings_service.as_ref());
        log::info!(
            "Loaded settings: theme={}, column_count={}, checkpoint_on_move={}",
            settings.theme,
            settings.column_count,
            settings.checkpoint_on_move
        );

        let app = Self::with_settings(settings, settings_service);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    pub(super) fn with_settings(
        settings: Settings,
        settings_service: Option<SettingsService>,
    ) -> Self {
        let mut planner = DayPlanner::new(PlannerOptions::from(&settings));
        planner.set_column_count(settings.column_count);

        Self {
            planner,
            active_theme: PlannerTheme::for_settings(&settings),
            settings,
            settings_service,
            view_state: ViewState::default(),
            grid_layout: GridLayout::default(),
            sidebar: SidebarState::default(),
        }
    }

    /// Drop any gesture still holding the pointer and persist the column count
    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.planner.cancel_gesture();
        self.settings.column_count = self.planner.column_count();

        let Some(service) = &self.settings_service else {
            return;
        };
        match service.update(&self.settings) {
            Ok(()) => log::info!("Saved settings to {}", service.path().display()),
            Err(e) => log::error!("Failed to save settings: {:#}", e),
        }
    }
}

fn load_settings_or_default(service: Option<&SettingsService>) -> Settings {
    service
        .map(SettingsService::get_or_default)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::geometry::PX_PER_HOUR;
    use tempfile::TempDir;

    #[test]
    fn test_exit_writes_back_column_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("settings.toml");
        let settings = Settings {
            theme: "light".to_string(),
            ..Settings::default()
        };
        let mut app = PlannerApp::with_settings(settings, Some(SettingsService::new(&path)));
        app.planner.add_column();
        app.planner.add_column();

        app.handle_exit(None);

        let saved = SettingsService::new(&path).get().unwrap();
        assert_eq!(saved.column_count, 3);
        assert_eq!(saved.theme, "light");
    }

    #[test]
    fn test_exit_cancels_active_gesture() {
        let mut app = PlannerApp::with_settings(Settings::default(), None);
        assert!(app.planner.press_grid(0, 9.0 * PX_PER_HOUR));

        app.handle_exit(None);

        assert!(app.planner.gesture().is_idle());
        app.planner.release();
        assert!(app.planner.events().is_empty());
    }

    #[test]
    fn test_settings_drive_planner_and_theme() {
        let settings = Settings {
            theme: "light".to_string(),
            column_count: 4,
            ..Settings::default()
        };
        let app = PlannerApp::with_settings(settings, None);

        assert_eq!(app.planner.column_count(), 4);
        assert!(!app.active_theme.is_dark);
    }
}
