//! Role dashboards

use campus_core::schedule::{
    admin_stats, class_stats, next_class, on_date, professor_schedules, student_schedules,
    AdminStats, ClassStats,
};
use campus_core::{ClassSchedule, View};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::session::SessionContext;
use crate::state::AppState;

/// A class line on a dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLine {
    pub class_name: String,
    pub room_name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub enrolled: u32,
    pub max_capacity: u32,
}

impl From<&ClassSchedule> for ClassLine {
    fn from(s: &ClassSchedule) -> Self {
        Self {
            class_name: s.class_name.clone(),
            room_name: s.room_name.clone(),
            start_time: s.start_time,
            end_time: s.end_time,
            enrolled: s.enrolled_students,
            max_capacity: s.max_capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardPanel {
    Admin {
        stats: AdminStats,
    },
    Professor {
        name: String,
        stats: ClassStats,
        today: Vec<ClassLine>,
    },
    Student {
        name: String,
        stats: ClassStats,
        today: Vec<ClassLine>,
        next_class: Option<ClassLine>,
    },
}

/// Open the signed-in principal's own dashboard for `date` as seen at `now`
pub fn open_home(
    state: &AppState,
    session: &SessionContext,
    date: NaiveDate,
    now: NaiveTime,
) -> Result<DashboardPanel> {
    let view = session
        .principal()
        .map(|p| p.role.home_view())
        .ok_or(Error::LoginRequired(View::Home))?;
    open(state, session, view, date, now)
}

/// Open a dashboard view, gated on the session's principal
pub fn open(
    state: &AppState,
    session: &SessionContext,
    view: View,
    date: NaiveDate,
    now: NaiveTime,
) -> Result<DashboardPanel> {
    let principal = session.require(view)?;
    let fixtures = state.fixtures();

    let panel = match view {
        View::AdminDashboard => DashboardPanel::Admin {
            stats: admin_stats(fixtures)?,
        },
        View::ProfessorDashboard => {
            let mine = professor_schedules(fixtures, principal);
            DashboardPanel::Professor {
                name: principal.name.clone(),
                stats: class_stats(&mine, date),
                today: on_date(&mine, date).into_iter().map(ClassLine::from).collect(),
            }
        }
        View::StudentDashboard => {
            let mine = student_schedules(fixtures, principal);
            DashboardPanel::Student {
                name: principal.name.clone(),
                stats: class_stats(&mine, date),
                today: on_date(&mine, date).into_iter().map(ClassLine::from).collect(),
                next_class: next_class(&mine, date, now).map(ClassLine::from),
            }
        }
        View::Home | View::Login | View::Occupancy | View::Notifications | View::Contact => {
            return Err(Error::NotADashboard(view));
        }
    };

    tracing::debug!(view = view.path(), user_id = %principal.id, "Dashboard opened");
    Ok(panel)
}

impl std::fmt::Display for ClassLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} {} in {} ({}/{})",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.class_name,
            self.room_name,
            self.enrolled,
            self.max_capacity
        )
    }
}

impl std::fmt::Display for DashboardPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardPanel::Admin { stats } => {
                writeln!(f, "Admin dashboard")?;
                writeln!(f, "  Total users:        {}", stats.total_users)?;
                writeln!(f, "  Active classrooms:  {}", stats.active_classrooms)?;
                writeln!(f, "  Scheduled classes:  {}", stats.scheduled_classes)?;
                match stats.occupancy_rate {
                    Some(rate) => writeln!(f, "  Occupancy rate:     {}%", rate),
                    None => writeln!(f, "  Occupancy rate:     n/a"),
                }
            }
            DashboardPanel::Professor { name, stats, today } => {
                writeln!(f, "Professor dashboard - {}", name)?;
                writeln!(
                    f,
                    "  {} classes today, {} total, {} students, {} rooms",
                    stats.classes_today, stats.total_classes, stats.total_enrolled, stats.distinct_rooms
                )?;
                for line in today {
                    writeln!(f, "  {}", line)?;
                }
                Ok(())
            }
            DashboardPanel::Student {
                name,
                stats,
                today,
                next_class,
            } => {
                writeln!(f, "Student portal - {}", name)?;
                writeln!(
                    f,
                    "  {} classes today, {} enrolled, {} rooms",
                    stats.classes_today, stats.total_classes, stats.distinct_rooms
                )?;
                for line in today {
                    writeln!(f, "  {}", line)?;
                }
                if let Some(next) = next_class {
                    writeln!(f, "  Next: {}", next)?;
                }
                Ok(())
            }
        }
    }
}
