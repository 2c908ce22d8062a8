//! Campus dashboard application layer
//!
//! Session handling, configuration and the views that sit between the core
//! derivations and whatever renders them.

pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod viewmodel;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use session::SessionContext;
pub use state::AppState;
