//! Principal, role and session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permissions::View;

/// Campus roles. Closed set; adding one forces every match below to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Professor,
    Student,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Professor => "Professor",
            Role::Student => "Student",
        }
    }

    /// The dashboard a principal of this role lands on after login
    pub fn home_view(&self) -> View {
        match self {
            Role::Admin => View::AdminDashboard,
            Role::Professor => View::ProfessorDashboard,
            Role::Student => View::StudentDashboard,
        }
    }

    pub fn all() -> &'static [Role] {
        &[Role::Admin, Role::Professor, Role::Student]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The authenticated actor for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Principal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
        }
    }
}

/// A signed-in session. Created at login, dropped at logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub principal: Principal,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(principal: Principal) -> Self {
        Self {
            id: Uuid::new_v4(),
            principal,
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Professor).unwrap();
        assert_eq!(json, "\"professor\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_home_view_per_role() {
        assert_eq!(Role::Admin.home_view(), View::AdminDashboard);
        assert_eq!(Role::Professor.home_view(), View::ProfessorDashboard);
        assert_eq!(Role::Student.home_view(), View::StudentDashboard);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let p = Principal::new("1", "Ada", "ada@campus.edu", Role::Admin);
        let a = Session::new(p.clone());
        let b = Session::new(p);
        assert_ne!(a.id, b.id);
    }
}
