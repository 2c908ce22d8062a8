//! Classroom model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stored room status. `Maintenance` is set by administrators only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

/// A classroom with live headcount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: String,
    pub name: String,
    pub building: String,
    pub capacity: u32,
    pub current_occupancy: u32,
    #[serde(default)]
    pub equipment: BTreeSet<String>,
    pub status: RoomStatus,
}

impl Classroom {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        building: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            building: building.into(),
            capacity,
            current_occupancy: 0,
            equipment: BTreeSet::new(),
            status: RoomStatus::Available,
        }
    }

    pub fn with_occupancy(mut self, current: u32) -> Self {
        self.current_occupancy = current;
        self.status = if current == 0 {
            RoomStatus::Available
        } else {
            RoomStatus::Occupied
        };
        self
    }

    pub fn with_equipment<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment.extend(items.into_iter().map(Into::into));
        self
    }

    /// Put the room under maintenance (administrative action)
    pub fn under_maintenance(mut self) -> Self {
        self.status = RoomStatus::Maintenance;
        self
    }

    pub fn is_under_maintenance(&self) -> bool {
        self.status == RoomStatus::Maintenance
    }
}
