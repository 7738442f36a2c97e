use super::PlannerApp;
use crate::services::gesture::Gesture;
use egui::{Key, KeyboardShortcut, Modifiers};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        alt: false,
        ctrl: false,
        shift: true,
        mac_cmd: false,
        command: true,
    },
    Key::Z,
);

impl PlannerApp {
    /// Undo and redo are consumed here, before any text field sees them.
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (redo, undo, escape) = ctx.input_mut(|i| {
            // Undo matching ignores shift, so redo has to be consumed first
            let redo = i.consume_shortcut(&REDO);
            let undo = i.consume_shortcut(&UNDO);
            (redo, undo, i.key_pressed(Key::Escape))
        });

        if redo {
            self.planner.redo();
        } else if undo {
            self.planner.undo();
        }

        if escape {
            match self.planner.gesture() {
                Gesture::DragCreating(_) => self.planner.cancel_gesture(),
                Gesture::Idle => self.planner.clear_selection(),
                // The title editor surrenders focus on Escape and commits
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Settings;
    use crate::services::geometry::PX_PER_HOUR;
    use egui::{Event, RawInput};

    /// Ctrl on Linux and Windows sets both `ctrl` and `command`
    const CTRL: Modifiers = Modifiers {
        alt: false,
        ctrl: true,
        shift: false,
        mac_cmd: false,
        command: true,
    };
    const CTRL_SHIFT: Modifiers = Modifiers { shift: true, ..CTRL };

    fn key_press(key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: Some(key),
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn app() -> PlannerApp {
        PlannerApp::with_settings(Settings::default(), None)
    }

    /// Run one frame of shortcut handling. Returns whether any `Z` key
    /// event was left over for other widgets.
    fn press(app: &mut PlannerApp, ctx: &egui::Context, event: Event) -> bool {
        let modifiers = match &event {
            Event::Key { modifiers, .. } => *modifiers,
            _ => Modifiers::NONE,
        };
        let input = RawInput {
            modifiers,
            events: vec![event],
            ..RawInput::default()
        };

        let mut z_left_over = false;
        let _ = ctx.run(input, |ctx| {
            app.handle_keyboard_shortcuts(ctx);
            z_left_over = ctx.input(|i| {
                i.events
                    .iter()
                    .any(|e| matches!(e, Event::Key { key: Key::Z, .. }))
            });
        });
        z_left_over
    }

    /// Two events with the cursor on the middle snapshot
    fn app_with_undo_and_redo() -> PlannerApp {
        let mut app = app();
        app.planner.create_at_slot(0, 9).unwrap();
        app.planner.create_at_slot(0, 11).unwrap();
        assert!(app.planner.undo());
        assert_eq!(app.planner.history().cursor(), 1);
        app
    }

    #[test]
    fn test_ctrl_shift_z_redoes_and_never_undoes() {
        let ctx = egui::Context::default();
        let mut app = app_with_undo_and_redo();

        let left_over = press(&mut app, &ctx, key_press(Key::Z, CTRL_SHIFT));

        assert_eq!(app.planner.history().cursor(), 2);
        assert_eq!(app.planner.events().len(), 2);
        assert!(!left_over);
    }

    #[test]
    fn test_ctrl_z_undoes() {
        let ctx = egui::Context::default();
        let mut app = app_with_undo_and_redo();

        let left_over = press(&mut app, &ctx, key_press(Key::Z, CTRL));

        assert_eq!(app.planner.history().cursor(), 0);
        assert!(app.planner.events().is_empty());
        assert!(!left_over);
    }

    #[test]
    fn test_plain_z_is_not_a_shortcut() {
        let ctx = egui::Context::default();
        let mut app = app_with_undo_and_redo();

        let left_over = press(&mut app, &ctx, key_press(Key::Z, Modifiers::NONE));

        assert_eq!(app.planner.history().cursor(), 1);
        assert!(left_over);
    }

    #[test]
    fn test_escape_cancels_drag_create_and_keeps_selection() {
        let ctx = egui::Context::default();
        let mut app = app();
        let selected = app.planner.create_at_slot(0, 2).unwrap();
        assert!(app.planner.press_grid(0, 9.0 * PX_PER_HOUR));
        app.planner.pointer_moved(12.0 * PX_PER_HOUR);

        press(&mut app, &ctx, key_press(Key::Escape, Modifiers::NONE));

        assert!(app.planner.gesture().is_idle());
        assert_eq!(app.planner.selected_id(), Some(selected));

        // A release after cancelling creates nothing
        app.planner.release();
        assert_eq!(app.planner.events().len(), 1);
    }

    #[test]
    fn test_escape_clears_selection_when_idle() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.planner.create_at_slot(0, 2).unwrap();
        assert!(app.planner.selected_id().is_some());

        press(&mut app, &ctx, key_press(Key::Escape, Modifiers::NONE));

        assert_eq!(app.planner.selected_id(), None);
        assert_eq!(app.planner.events().len(), 1);
    }
}
