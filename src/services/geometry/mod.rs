//! Pixel/time mapping for the day grid.
//!
//! The grid is 24 rows of `PX_PER_HOUR` pixels. Pointer positions are
//! quantized down to half-hour steps before they reach the event store.

pub const HOURS_PER_DAY: f32 = 24.0;
pub const PX_PER_HOUR: f32 = 64.0;
pub const GRID_HEIGHT: f32 = HOURS_PER_DAY * PX_PER_HOUR;

/// Minimum length of any event after a resize
pub const MIN_EVENT_DURATION: f32 = 0.5;
/// Minimum length of an event created by dragging
pub const MIN_CREATE_DURATION: f32 = 0.25;

/// Convert a Y offset (relative to the top of the grid) to an hour fraction,
/// floored to the half hour.
pub fn y_to_time(y: f32) -> f32 {
    (y / PX_PER_HOUR * 2.0).floor() / 2.0
}

pub fn time_to_y(time: f32) -> f32 {
    time * PX_PER_HOUR
}

/// Clamp an hour fraction to the visible day
pub fn clamp_time(time: f32) -> f32 {
    time.clamp(0.0, HOURS_PER_DAY)
}

/// Unquantized hour fraction under `y`, used for hit-testing events
pub fn raw_time_at(y: f32) -> f32 {
    y / PX_PER_HOUR
}

/// Whole hour row under `y`
pub fn hour_at(y: f32) -> u32 {
    (y / PX_PER_HOUR).floor().clamp(0.0, HOURS_PER_DAY - 1.0) as u32
}
