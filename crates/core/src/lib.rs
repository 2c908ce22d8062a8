//! Campus Core Library
//!
//! Models, role gating, occupancy derivation, fixtures and dashboard queries
//! for the campus management dashboard.

pub mod error;
pub mod fixtures;
pub mod invariants;
pub mod models;
pub mod notifications;
pub mod occupancy;
pub mod permissions;
pub mod schedule;

pub use error::{Error, Result};
pub use fixtures::Fixtures;
pub use models::*;
pub use notifications::{NotificationFeed, NotificationFilter};
pub use occupancy::*;
pub use permissions::*;
