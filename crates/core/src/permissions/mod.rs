//! Role gating for dashboard views

use serde::Serialize;

use crate::models::{Principal, Role};

/// Views the dashboard can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    // Public
    Home,
    Login,
    Occupancy,
    Notifications,
    Contact,

    // Role dashboards
    AdminDashboard,
    ProfessorDashboard,
    StudentDashboard,
}

impl View {
    /// Roles allowed to see this view, or `None` for public views
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            View::Home | View::Login | View::Occupancy | View::Notifications | View::Contact => {
                None
            }
            View::AdminDashboard => Some(&[Role::Admin]),
            View::ProfessorDashboard => Some(&[Role::Professor]),
            View::StudentDashboard => Some(&[Role::Student]),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Login => "/login",
            View::Occupancy => "/occupancy",
            View::Notifications => "/notifications",
            View::Contact => "/contact",
            View::AdminDashboard => "/admin",
            View::ProfessorDashboard => "/professor",
            View::StudentDashboard => "/student",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Occupancy => "Occupancy",
            View::Notifications => "Notifications",
            View::Contact => "Contact",
            View::AdminDashboard => "Dashboard",
            View::ProfessorDashboard => "Dashboard",
            View::StudentDashboard => "Portal",
        }
    }
}

/// Outcome of gating a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    Deny,
}

/// Stateless gate evaluated on every navigation
pub struct AuthGate;

impl AuthGate {
    /// Decide whether `principal` may see a view restricted to `allowed_roles`
    pub fn authorize(principal: Option<&Principal>, allowed_roles: &[Role]) -> Decision {
        match principal {
            None => Decision::RedirectToLogin,
            Some(p) if allowed_roles.contains(&p.role) => Decision::Allow,
            Some(_) => Decision::Deny,
        }
    }

    /// Gate a concrete view; public views are always allowed
    pub fn authorize_view(principal: Option<&Principal>, view: View) -> Decision {
        match view.allowed_roles() {
            None => Decision::Allow,
            Some(roles) => Self::authorize(principal, roles),
        }
    }
}

/// An entry in the top navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub view: View,
}

impl NavItem {
    fn new(name: &'static str, view: View) -> Self {
        Self { name, view }
    }
}

/// Navigation for the current principal: common entries plus role entries
pub fn navigation(principal: Option<&Principal>) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::new("Home", View::Home),
        NavItem::new("Occupancy", View::Occupancy),
        NavItem::new("Notifications", View::Notifications),
        NavItem::new("Contact", View::Contact),
    ];

    if let Some(p) = principal {
        let home = p.role.home_view();
        items.push(NavItem::new(home.title(), home));
    }

    items
}
