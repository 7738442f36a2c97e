// Service module exports

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod planner;
pub mod settings;
