//! Application state

use std::sync::Arc;

use campus_core::{Fixtures, NotificationFeed};

use crate::config::AppConfig;
use crate::error::Result;

/// Shared, read-only data every view draws from
#[derive(Debug, Clone)]
pub struct AppState {
    fixtures: Arc<Fixtures>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let fixtures = match &config.fixtures.path {
            Some(path) => Fixtures::load(path)?,
            None => {
                tracing::info!("Using built-in fixtures");
                Fixtures::seed()
            }
        };
        Ok(Self::from_fixtures(fixtures))
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            fixtures: Arc::new(fixtures),
        }
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// A working copy of the notification list for one viewer
    pub fn notification_feed(&self) -> NotificationFeed {
        NotificationFeed::new(self.fixtures.notifications.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_to_seed() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        assert_eq!(state.fixtures(), &Fixtures::seed());
    }

    #[test]
    fn test_loads_fixture_file() {
        let mut fixtures = Fixtures::seed();
        fixtures.classrooms.truncate(1);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&fixtures).unwrap()).unwrap();

        let mut config = AppConfig::default();
        config.fixtures.path = Some(file.path().to_path_buf());

        let state = AppState::new(&config).unwrap();
        assert_eq!(state.fixtures().classrooms.len(), 1);
    }

    #[test]
    fn test_feed_is_independent_copy() {
        let state = AppState::from_fixtures(Fixtures::seed());
        let mut feed = state.notification_feed();
        feed.mark_all_read();
        assert_eq!(state.notification_feed().unread_count(), 2);
    }
}
