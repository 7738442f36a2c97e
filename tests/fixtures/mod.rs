// Test fixtures - reusable planner setups
// Provides consistent starting states across the integration tests

#![allow(dead_code)]

use heiko::services::event::{EventStore, NewEvent};
use heiko::services::geometry::PX_PER_HOUR;
use heiko::services::planner::{DayPlanner, PlannerOptions};

/// Grid offset in pixels for a time in hours
pub fn y(hours: f32) -> f32 {
    hours * PX_PER_HOUR
}

/// Empty planner with deterministic ids
pub fn empty_planner() -> DayPlanner {
    DayPlanner::with_store(EventStore::with_id_seed(1), PlannerOptions::default())
}

/// Planner with `columns` visible columns
pub fn planner_with_columns(columns: usize) -> DayPlanner {
    let mut planner = empty_planner();
    planner.set_column_count(columns);
    planner
}

/// A typical morning: standup, a focus block and lunch in the first column
pub fn morning_planner() -> DayPlanner {
    let mut planner = planner_with_columns(2);
    planner
        .create(NewEvent::new(9.0, 9.5, 0).with_title("Standup"))
        .unwrap();
    planner
        .create(NewEvent::new(10.0, 12.0, 0).with_title("Focus"))
        .unwrap();
    planner
        .create(NewEvent::new(12.0, 13.0, 1).with_title("Lunch"))
        .unwrap();
    planner
}
