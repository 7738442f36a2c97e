mod app;
pub mod resize;
pub mod theme;
pub mod views;

pub use app::PlannerApp;
