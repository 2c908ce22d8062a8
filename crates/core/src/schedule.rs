//! Schedule queries behind the role dashboards

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::Result;
use crate::fixtures::Fixtures;
use crate::models::{ClassSchedule, Principal};

/// Headline numbers on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_users: usize,
    pub active_classrooms: usize,
    pub scheduled_classes: usize,
    pub occupancy_rate: Option<u8>,
}

/// Headline numbers on the professor and student dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassStats {
    pub classes_today: usize,
    pub total_classes: usize,
    pub total_enrolled: u32,
    pub distinct_rooms: usize,
}

pub fn admin_stats(fixtures: &Fixtures) -> Result<AdminStats> {
    Ok(AdminStats {
        total_users: fixtures.users.len(),
        active_classrooms: fixtures
            .classrooms
            .iter()
            .filter(|r| !r.is_under_maintenance())
            .count(),
        scheduled_classes: fixtures.schedules.len(),
        occupancy_rate: fixtures.occupancy_board().occupancy_rate()?,
    })
}

/// Classes taught by a professor
pub fn professor_schedules<'a>(fixtures: &'a Fixtures, professor: &Principal) -> Vec<&'a ClassSchedule> {
    fixtures
        .schedules
        .iter()
        .filter(|s| s.professor_id == professor.id)
        .collect()
}

/// Classes a student is enrolled in; a principal with no enrollment record has none
pub fn student_schedules<'a>(fixtures: &'a Fixtures, student: &Principal) -> Vec<&'a ClassSchedule> {
    let Ok(record) = fixtures.find_student(&student.id) else {
        return Vec::new();
    };
    fixtures
        .schedules
        .iter()
        .filter(|s| record.enrolled_classes.contains(&s.id))
        .collect()
}

pub fn on_date<'a>(schedules: &[&'a ClassSchedule], date: NaiveDate) -> Vec<&'a ClassSchedule> {
    schedules.iter().copied().filter(|s| s.date == date).collect()
}

/// First class on `date` starting strictly after `now`
pub fn next_class<'a>(
    schedules: &[&'a ClassSchedule],
    date: NaiveDate,
    now: NaiveTime,
) -> Option<&'a ClassSchedule> {
    schedules
        .iter()
        .copied()
        .filter(|s| s.date == date && s.start_time > now)
        .min_by_key(|s| s.start_time)
}

pub fn class_stats(schedules: &[&ClassSchedule], date: NaiveDate) -> ClassStats {
    ClassStats {
        classes_today: schedules.iter().filter(|s| s.date == date).count(),
        total_classes: schedules.len(),
        total_enrolled: schedules.iter().map(|s| s.enrolled_students).sum(),
        distinct_rooms: schedules
            .iter()
            .map(|s| s.room_id.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn user(fixtures: &Fixtures, role: Role) -> Principal {
        fixtures.users.iter().find(|u| u.role == role).unwrap().clone()
    }

    #[test]
    fn test_admin_stats() {
        let stats = admin_stats(&Fixtures::seed()).unwrap();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_classrooms, 3);
        assert_eq!(stats.scheduled_classes, 3);
        assert_eq!(stats.occupancy_rate, Some(61));
    }

    #[test]
    fn test_professor_sees_own_classes() {
        let fixtures = Fixtures::seed();
        let prof = user(&fixtures, Role::Professor);
        let mine = professor_schedules(&fixtures, &prof);
        let ids: Vec<_> = mine.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let stats = class_stats(&mine, day());
        assert_eq!(stats.classes_today, 2);
        assert_eq!(stats.total_enrolled, 70);
        assert_eq!(stats.distinct_rooms, 2);
    }

    #[test]
    fn test_student_sees_enrolled_classes() {
        let fixtures = Fixtures::seed();
        let student = user(&fixtures, Role::Student);
        let mine = student_schedules(&fixtures, &student);
        assert_eq!(mine.len(), 2);

        let other_day = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        assert!(on_date(&mine, other_day).is_empty());
        assert_eq!(on_date(&mine, day()).len(), 2);
    }

    #[test]
    fn test_unenrolled_principal_has_no_classes() {
        let fixtures = Fixtures::seed();
        let admin = user(&fixtures, Role::Admin);
        assert!(student_schedules(&fixtures, &admin).is_empty());
    }

    #[test]
    fn test_next_class_after_time() {
        let fixtures = Fixtures::seed();
        let student = user(&fixtures, Role::Student);
        let mine = student_schedules(&fixtures, &student);

        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(next_class(&mine, day(), at(8, 0)).unwrap().id, "1");
        assert_eq!(next_class(&mine, day(), at(9, 0)).unwrap().id, "2");
        assert!(next_class(&mine, day(), at(11, 0)).is_none());
    }
}
