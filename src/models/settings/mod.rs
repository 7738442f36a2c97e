// Settings module
// User preferences stored in settings.toml. Events are never persisted.

use crate::models::event::EventKind;
use serde::{Deserialize, Serialize};

pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub column_count: usize,
    /// Record a history checkpoint when a drag-move settles
    pub checkpoint_on_move: bool,
    pub default_event_kind: EventKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            column_count: 1,
            checkpoint_on_move: true,
            default_event_kind: EventKind::Work,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        match self.theme.to_lowercase().as_str() {
            "dark" | "light" => {}
            other => return Err(format!("Unknown theme '{}'", other)),
        }

        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&self.column_count) {
            return Err(format!(
                "Column count must be between {} and {}",
                MIN_COLUMNS, MAX_COLUMNS
            ));
        }

        Ok(())
    }

    /// Pull out-of-range values back into bounds after loading from disk
    pub fn sanitized(mut self) -> Self {
        self.column_count = self.column_count.clamp(MIN_COLUMNS, MAX_COLUMNS);
        if self.validate().is_err() {
            log::warn!("Unknown theme '{}', using dark", self.theme);
            self.theme = "dark".to_string();
        }
        self
    }

    pub fn is_dark(&self) -> bool {
        !self.theme.eq_ignore_ascii_case("light")
    }
}
