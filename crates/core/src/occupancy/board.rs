//! Occupancy board - the set of rooms shown on the occupancy view

use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Classroom, RoomStatus};

use super::{reading, simulate_tick, OccupancyReading};

/// Building selection on the occupancy view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuildingFilter {
    #[default]
    All,
    Building(String),
}

impl BuildingFilter {
    /// Parse a filter value; `"all"` (any case) or empty selects every building
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            BuildingFilter::All
        } else {
            BuildingFilter::Building(value.to_string())
        }
    }

    pub fn matches(&self, room: &Classroom) -> bool {
        match self {
            BuildingFilter::All => true,
            BuildingFilter::Building(name) => room.building == *name,
        }
    }
}

/// Counts shown in the summary cards, by stored status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OccupancySummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
}

/// Immutable snapshot of all rooms; each tick produces a new board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OccupancyBoard {
    rooms: Vec<Classroom>,
}

impl OccupancyBoard {
    pub fn new(rooms: Vec<Classroom>) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> &[Classroom] {
        &self.rooms
    }

    pub fn get(&self, room_id: &str) -> Option<&Classroom> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    /// Apply one simulated update to every room
    pub fn tick<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let rooms = self
            .rooms
            .iter()
            .map(|room| simulate_tick(room, rng))
            .collect();
        Self { rooms }
    }

    pub fn summary(&self) -> OccupancySummary {
        let mut summary = OccupancySummary {
            total: self.rooms.len(),
            ..Default::default()
        };
        for room in &self.rooms {
            match room.status {
                RoomStatus::Available => summary.available += 1,
                RoomStatus::Occupied => summary.occupied += 1,
                RoomStatus::Maintenance => summary.maintenance += 1,
            }
        }
        summary
    }

    /// Distinct building names, sorted
    pub fn buildings(&self) -> Vec<&str> {
        self.rooms
            .iter()
            .map(|r| r.building.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter<'a>(&'a self, filter: &'a BuildingFilter) -> impl Iterator<Item = &'a Classroom> + 'a {
        self.rooms.iter().filter(move |r| filter.matches(r))
    }

    /// Derived reading for every room passing the filter
    pub fn readings(&self, filter: &BuildingFilter) -> Result<Vec<(&Classroom, OccupancyReading)>> {
        self.rooms
            .iter()
            .filter(|r| filter.matches(r))
            .map(|room| reading(room).map(|r| (room, r)))
            .collect()
    }

    /// Mean percentage across rooms not under maintenance, `None` when there are none
    pub fn occupancy_rate(&self) -> Result<Option<u8>> {
        let mut total = 0u32;
        let mut count = 0u32;
        for room in self.rooms.iter().filter(|r| !r.is_under_maintenance()) {
            total += u32::from(reading(room)?.percentage);
            count += 1;
        }
        if count == 0 {
            return Ok(None);
        }
        Ok(Some((f64::from(total) / f64::from(count)).round() as u8))
    }
}
