//! Fixture provider
//!
//! Seed data standing in for a real data store. Snapshots are handed out by
//! reference or cloned; nothing here mutates them after load.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::invariants::{check_classroom, check_schedule};
use crate::models::{
    ClassSchedule, Classroom, Notification, NotificationKind, Principal, Role, Student,
};
use crate::occupancy::OccupancyBoard;

/// Startup snapshot of every entity list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub users: Vec<Principal>,
    pub classrooms: Vec<Classroom>,
    pub schedules: Vec<ClassSchedule>,
    pub notifications: Vec<Notification>,
    pub students: Vec<Student>,
}

impl Fixtures {
    /// Load a JSON snapshot and reject it if any record breaks an invariant
    pub fn from_json(json: &str) -> Result<Self> {
        let fixtures: Fixtures = serde_json::from_str(json)?;
        fixtures.validate()?;
        tracing::info!(
            users = fixtures.users.len(),
            classrooms = fixtures.classrooms.len(),
            schedules = fixtures.schedules.len(),
            "Loaded fixtures"
        );
        Ok(fixtures)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        for room in &self.classrooms {
            check_classroom(room)?;
        }
        for schedule in &self.schedules {
            check_schedule(schedule)?;
        }
        Ok(())
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&Principal> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }

    pub fn find_student(&self, student_id: &str) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == student_id)
            .ok_or_else(|| Error::NotFound(format!("student {}", student_id)))
    }

    pub fn find_classroom(&self, room_id: &str) -> Result<&Classroom> {
        self.classrooms
            .iter()
            .find(|r| r.id == room_id)
            .ok_or_else(|| Error::NotFound(format!("classroom {}", room_id)))
    }

    /// A fresh occupancy board over a copy of the classroom list
    pub fn occupancy_board(&self) -> OccupancyBoard {
        OccupancyBoard::new(self.classrooms.clone())
    }

    /// Built-in campus data set
    pub fn seed() -> Self {
        Self {
            users: seed_users(),
            classrooms: seed_classrooms(),
            schedules: seed_schedules(),
            notifications: seed_notifications(),
            students: vec![Student {
                id: "3".to_string(),
                name: "Minaxi Dave".to_string(),
                email: "mdave@student.campus.edu".to_string(),
                enrolled_classes: vec!["1".to_string(), "2".to_string()],
            }],
        }
    }
}

fn seed_users() -> Vec<Principal> {
    vec![
        Principal::new("1", "Prof. A B Patel", "abpatel@campus.edu", Role::Admin),
        Principal::new("2", "Prof. Vishvarsjinh Zala", "vzala@campus.edu", Role::Professor),
        Principal::new("3", "Minaxi Dave", "mdave@student.campus.edu", Role::Student),
    ]
}

fn seed_classrooms() -> Vec<Classroom> {
    vec![
        Classroom::new("1", "Room 1001", "Annexe Building", 50)
            .with_occupancy(42)
            .with_equipment(["Projector", "Whiteboard", "Audio System"]),
        Classroom::new("2", "Room 2005", "Engineering Building", 35)
            .with_equipment(["Interactive Board", "Computers", "Projector"]),
        // Full, but stored as occupied like every other non-empty room.
        Classroom::new("3", "Room 3001", "Liberal Arts Building", 75)
            .with_occupancy(75)
            .with_equipment(["Projector", "Audio System", "Microphone"]),
        Classroom::new("4", "Lab 1002", "Science Building", 25)
            .with_equipment(["Lab Equipment", "Computers", "Projector"])
            .under_maintenance(),
    ]
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or(NaiveDate::MIN)
}

fn seed_schedules() -> Vec<ClassSchedule> {
    let schedule = |id: &str,
                    class_name: &str,
                    professor_id: &str,
                    professor_name: &str,
                    room: (&str, &str),
                    window: (NaiveTime, NaiveTime),
                    enrolled: u32,
                    max: u32| ClassSchedule {
        id: id.to_string(),
        class_name: class_name.to_string(),
        professor_id: professor_id.to_string(),
        professor_name: professor_name.to_string(),
        room_id: room.0.to_string(),
        room_name: room.1.to_string(),
        start_time: window.0,
        end_time: window.1,
        date: seed_date(),
        enrolled_students: enrolled,
        max_capacity: max,
    };

    vec![
        schedule(
            "1",
            "Advanced Mathematics",
            "2",
            "Prof. Vishvarsjinh Zala",
            ("1", "Room 1001"),
            (hm(9, 0), hm(10, 30)),
            42,
            50,
        ),
        schedule(
            "2",
            "Computer Science Fundamentals",
            "2",
            "Prof. Vishvarsjinh Zala",
            ("2", "Room 2005"),
            (hm(11, 0), hm(12, 30)),
            28,
            35,
        ),
        schedule(
            "3",
            "English Literature",
            "1",
            "Prof. A B Patel",
            ("3", "Room 3001"),
            (hm(14, 0), hm(15, 30)),
            75,
            75,
        ),
    ]
}

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    seed_date()
        .and_time(hm(hour, minute))
        .and_utc()
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "Room Change Alert".to_string(),
            message: "Computer Science Fundamentals class moved from Room 2005 to Room 2007"
                .to_string(),
            kind: NotificationKind::Warning,
            timestamp: at(8, 30),
            is_read: false,
        },
        Notification {
            id: "2".to_string(),
            title: "Maintenance Scheduled".to_string(),
            message: "Lab 1002 will be under maintenance from 2:00 PM to 4:00 PM today"
                .to_string(),
            kind: NotificationKind::Info,
            timestamp: at(7, 0),
            is_read: false,
        },
        Notification {
            id: "3".to_string(),
            title: "Class Cancelled".to_string(),
            message: "Physics Lab session scheduled for 3:00 PM has been cancelled".to_string(),
            kind: NotificationKind::Error,
            timestamp: at(10, 15),
            is_read: true,
        },
    ]
}
