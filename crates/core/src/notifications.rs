//! Notification feed

use crate::error::{Error, Result};
use crate::models::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl NotificationFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.is_read,
            NotificationFilter::Read => notification.is_read,
        }
    }
}

/// A viewer's working copy of the notification list
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn filter(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.items.iter().filter(|n| filter.matches(n)).collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("notification {}", id)))?;
        item.is_read = true;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<Notification> {
        let index = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("notification {}", id)))?;
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn feed() -> NotificationFeed {
        NotificationFeed::new(Fixtures::seed().notifications)
    }

    #[test]
    fn test_filters() {
        let feed = feed();
        assert_eq!(feed.filter(NotificationFilter::All).len(), 3);
        assert_eq!(feed.filter(NotificationFilter::Unread).len(), 2);
        assert_eq!(feed.filter(NotificationFilter::Read).len(), 1);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn test_mark_read() {
        let mut feed = feed();
        feed.mark_read("1").unwrap();
        assert_eq!(feed.unread_count(), 1);
        assert!(matches!(feed.mark_read("42"), Err(Error::NotFound(_))));

        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn test_remove_leaves_fixture_untouched() {
        let fixtures = Fixtures::seed();
        let mut feed = NotificationFeed::new(fixtures.notifications.clone());

        let removed = feed.remove("2").unwrap();
        assert_eq!(removed.title, "Maintenance Scheduled");
        assert_eq!(feed.items().len(), 2);
        assert_eq!(fixtures.notifications.len(), 3);
        assert!(feed.remove("2").is_err());
    }
}
