//! Data invariants
//!
//! `check_*` functions reject bad fixture data with an error. `assert_*`
//! functions are debug assertions for states the code itself must never
//! produce; they are compiled out in release builds.

use crate::error::{Error, Result};
use crate::models::{ClassSchedule, Classroom};

/// A classroom must have seats and at most `capacity` occupants
pub fn check_classroom(room: &Classroom) -> Result<()> {
    if room.capacity == 0 {
        return Err(Error::InvalidCapacity {
            capacity: room.capacity,
        });
    }
    if room.current_occupancy > room.capacity {
        return Err(Error::OccupancyOutOfRange {
            current: room.current_occupancy,
            capacity: room.capacity,
        });
    }
    if room.name.trim().is_empty() {
        return Err(Error::InvalidFixture(format!(
            "classroom {} has empty name",
            room.id
        )));
    }
    Ok(())
}

/// Enrollment may not exceed the class cap, and classes must end after they start
pub fn check_schedule(schedule: &ClassSchedule) -> Result<()> {
    if schedule.enrolled_students > schedule.max_capacity {
        return Err(Error::InvalidFixture(format!(
            "schedule {} has {} enrolled over a cap of {}",
            schedule.id, schedule.enrolled_students, schedule.max_capacity
        )));
    }
    if schedule.end_time <= schedule.start_time {
        return Err(Error::InvalidFixture(format!(
            "schedule {} ends before it starts",
            schedule.id
        )));
    }
    Ok(())
}

/// Validate a classroom produced by a tick
pub fn assert_classroom_invariants(room: &Classroom) {
    debug_assert!(room.capacity > 0, "Classroom {} has zero capacity", room.id);

    debug_assert!(
        room.current_occupancy <= room.capacity,
        "Classroom {} has {} occupants over capacity {}",
        room.id,
        room.current_occupancy,
        room.capacity
    );
}

/// Validate that a tick left a maintenance room untouched
pub fn assert_maintenance_untouched(before: &Classroom, after: &Classroom) {
    debug_assert!(
        !before.is_under_maintenance() || before == after,
        "Classroom {} changed while under maintenance",
        before.id
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_schedule(enrolled: u32, max: u32) -> ClassSchedule {
        ClassSchedule {
            id: "1".to_string(),
            class_name: "Advanced Mathematics".to_string(),
            professor_id: "2".to_string(),
            professor_name: "Prof. Zala".to_string(),
            room_id: "1".to_string(),
            room_name: "Room 1001".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            enrolled_students: enrolled,
            max_capacity: max,
        }
    }

    #[test]
    fn test_valid_classroom() {
        let room = Classroom::new("1", "Room 1001", "Annexe", 50).with_occupancy(50);
        check_classroom(&room).unwrap();
        assert_classroom_invariants(&room);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let room = Classroom::new("1", "Room 1001", "Annexe", 0);
        assert!(matches!(
            check_classroom(&room),
            Err(Error::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_overfull_classroom_rejected() {
        let mut room = Classroom::new("1", "Room 1001", "Annexe", 10);
        room.current_occupancy = 11;
        assert!(matches!(
            check_classroom(&room),
            Err(Error::OccupancyOutOfRange { current: 11, capacity: 10 })
        ));
    }

    #[test]
    fn test_schedule_enrollment_cap() {
        check_schedule(&make_schedule(50, 50)).unwrap();
        assert!(check_schedule(&make_schedule(51, 50)).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "over capacity")]
    fn test_overfull_classroom_asserts() {
        let mut room = Classroom::new("1", "Room 1001", "Annexe", 10);
        room.current_occupancy = 11;
        assert_classroom_invariants(&room);
    }
}
