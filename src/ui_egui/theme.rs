//! Theme module for the egui planner
//!
//! Defines the PlannerTheme structure with the colours used by the grid,
//! the event blocks and the side panel.

use crate::models::event::EventKind;
use crate::models::settings::Settings;
use egui::Color32;

/// A planner theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of the header bar, side panel and grid columns
    pub panel_background: Color32,

    /// Hour lines and column borders
    pub grid_line: Color32,

    /// Primary text color (headings, titles)
    pub text_primary: Color32,

    /// Secondary text color (hour labels, time ranges)
    pub text_secondary: Color32,

    /// Outline around the selected event
    pub selection_border: Color32,

    pub work_fill: Color32,
    pub work_accent: Color32,
    pub personal_fill: Color32,
    pub personal_accent: Color32,

    /// Drag-create preview rectangle
    pub preview_fill: Color32,
    pub preview_border: Color32,
}

impl PlannerTheme {
    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(17, 24, 39),
            panel_background: Color32::from_rgb(31, 41, 55),
            grid_line: Color32::from_rgb(55, 65, 81),
            text_primary: Color32::from_rgb(243, 244, 246),
            text_secondary: Color32::from_rgb(156, 163, 175),
            selection_border: Color32::from_rgb(250, 204, 21),
            work_fill: Color32::from_rgba_unmultiplied(20, 83, 45, 128),
            work_accent: Color32::from_rgb(21, 128, 61),
            personal_fill: Color32::from_rgba_unmultiplied(30, 58, 138, 128),
            personal_accent: Color32::from_rgb(29, 78, 216),
            preview_fill: Color32::from_rgba_unmultiplied(30, 58, 138, 77),
            preview_border: Color32::from_rgba_unmultiplied(59, 130, 246, 128),
        }
    }

    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            panel_background: Color32::from_rgb(255, 255, 255),
            grid_line: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            selection_border: Color32::from_rgb(202, 138, 4),
            work_fill: Color32::from_rgba_unmultiplied(134, 239, 172, 140),
            work_accent: Color32::from_rgb(22, 163, 74),
            personal_fill: Color32::from_rgba_unmultiplied(147, 197, 253, 140),
            personal_accent: Color32::from_rgb(37, 99, 235),
            preview_fill: Color32::from_rgba_unmultiplied(147, 197, 253, 77),
            preview_border: Color32::from_rgba_unmultiplied(59, 130, 246, 160),
        }
    }

    /// Theme picked by the user's settings
    pub fn for_settings(settings: &Settings) -> Self {
        if settings.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Background fill and left accent bar for an event
    pub fn event_colors(&self, kind: EventKind) -> (Color32, Color32) {
        match kind {
            EventKind::Work => (self.work_fill, self.work_accent),
            EventKind::Personal => (self.personal_fill, self.personal_accent),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.panel_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.app_background;
        visuals.widgets.noninteractive.bg_stroke.color = self.grid_line;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_theme(theme: &str) -> Settings {
        Settings {
            theme: theme.to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_for_settings() {
        assert!(PlannerTheme::for_settings(&settings_with_theme("dark")).is_dark);
        assert!(!PlannerTheme::for_settings(&settings_with_theme("Light")).is_dark);
        assert!(PlannerTheme::for_settings(&settings_with_theme("unknown")).is_dark);
    }

    #[test]
    fn test_event_colors_differ_by_kind() {
        let theme = PlannerTheme::dark();
        assert_ne!(
            theme.event_colors(EventKind::Work),
            theme.event_colors(EventKind::Personal)
        );
    }
}
