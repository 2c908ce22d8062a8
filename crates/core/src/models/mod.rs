//! Data models for the campus dashboard

mod classroom;
mod notification;
mod schedule;
mod user;

pub use classroom::*;
pub use notification::*;
pub use schedule::*;
pub use user::*;
