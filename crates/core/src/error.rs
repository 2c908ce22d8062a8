//! Error types for Campus Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid capacity: {capacity} (must be greater than zero)")]
    InvalidCapacity { capacity: u32 },

    #[error("Occupancy {current} out of range for capacity {capacity}")]
    OccupancyOutOfRange { current: u32, capacity: u32 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Contract violations on occupancy inputs. These point at bad upstream
    /// data and are never recovered from.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::InvalidCapacity { .. } | Error::OccupancyOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
