//! View models between the core derivations and the renderer

pub mod dashboard;
pub mod notifications;
pub mod occupancy;

pub use dashboard::DashboardPanel;
pub use notifications::NotificationsPanel;
pub use occupancy::{OccupancyPanel, OccupancySnapshot, OccupancyView};
