//! Occupancy derivation and the simulated live-update walk
//!
//! Status shown for a room is derived from its headcount unless the room is
//! under maintenance, which overrides everything. The random walk stands in
//! for sensor updates and is applied once per tick to every room that is not
//! under maintenance.

mod board;

pub use board::{BuildingFilter, OccupancyBoard, OccupancySummary};

use rand::Rng;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Classroom, RoomStatus};

/// Largest headcount change a single tick can apply, in either direction
pub const MAX_TICK_DELTA: i64 = 3;

/// Percentage at or above which a room counts as heavily used
pub const HIGH_OCCUPANCY_PERCENT: u8 = 80;

/// Status displayed for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    Maintenance,
    Available,
    Occupied,
    Full,
}

impl OccupancyStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OccupancyStatus::Maintenance => "Maintenance",
            OccupancyStatus::Available => "Available",
            OccupancyStatus::Occupied => "Occupied",
            OccupancyStatus::Full => "Full",
        }
    }
}

impl std::fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Colour band of the occupancy bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    Idle,
    Moderate,
    High,
}

impl OccupancyLevel {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage == 0 {
            OccupancyLevel::Idle
        } else if percentage < HIGH_OCCUPANCY_PERCENT {
            OccupancyLevel::Moderate
        } else {
            OccupancyLevel::High
        }
    }
}

/// Derived display data for one room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancyReading {
    pub status: OccupancyStatus,
    pub percentage: u8,
    pub level: OccupancyLevel,
}

fn check_bounds(current: u32, capacity: u32) -> Result<()> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity { capacity });
    }
    if current > capacity {
        return Err(Error::OccupancyOutOfRange { current, capacity });
    }
    Ok(())
}

/// Headcount as a rounded percentage of capacity
pub fn percentage(current: u32, capacity: u32) -> Result<u8> {
    check_bounds(current, capacity)?;
    let ratio = f64::from(current) / f64::from(capacity);
    Ok((ratio * 100.0).round() as u8)
}

/// Derive the display status of a room.
///
/// Maintenance wins over any headcount. Otherwise the status follows the
/// rounded percentage: 0% is available, 100% is full and anything in
/// between is occupied, so status and displayed percentage always agree.
/// Inputs outside `capacity > 0` and `current <= capacity` are rejected;
/// callers clamp before calling.
pub fn derive_status(current: u32, capacity: u32, maintenance: bool) -> Result<OccupancyStatus> {
    if maintenance {
        return Ok(OccupancyStatus::Maintenance);
    }
    let status = match percentage(current, capacity)? {
        0 => OccupancyStatus::Available,
        100 => OccupancyStatus::Full,
        _ => OccupancyStatus::Occupied,
    };
    Ok(status)
}

/// Status, percentage and bar level for a classroom
pub fn reading(room: &Classroom) -> Result<OccupancyReading> {
    let percentage = percentage(room.current_occupancy, room.capacity)?;
    let status = derive_status(
        room.current_occupancy,
        room.capacity,
        room.is_under_maintenance(),
    )?;
    Ok(OccupancyReading {
        status,
        percentage,
        level: OccupancyLevel::from_percentage(percentage),
    })
}

/// Apply a fixed headcount change, clamped to `[0, capacity]`.
///
/// Rooms under maintenance come back unchanged. The stored status only ever
/// becomes `Available` or `Occupied` here, even when the room fills up.
pub fn apply_delta(room: &Classroom, delta: i64) -> Classroom {
    if room.is_under_maintenance() {
        return room.clone();
    }

    let next = (i64::from(room.current_occupancy) + delta).clamp(0, i64::from(room.capacity));
    // Clamped into [0, capacity], so the value fits back into u32.
    let next = next as u32;

    Classroom {
        current_occupancy: next,
        status: if next == 0 {
            RoomStatus::Available
        } else {
            RoomStatus::Occupied
        },
        ..room.clone()
    }
}

/// One simulated sensor update: a uniform draw from `-3..=3` applied to the room
pub fn simulate_tick<R: Rng + ?Sized>(room: &Classroom, rng: &mut R) -> Classroom {
    if room.is_under_maintenance() {
        return room.clone();
    }
    let delta = rng.gen_range(-MAX_TICK_DELTA..=MAX_TICK_DELTA);
    apply_delta(room, delta)
}
