//! Notifications view model

use campus_core::{Notification, NotificationFeed, NotificationFilter, NotificationKind};
use serde::Serialize;

/// Filtered notification list with the unread badge count
#[derive(Debug, Clone, Serialize)]
pub struct NotificationsPanel {
    pub unread: usize,
    pub items: Vec<Notification>,
}

impl NotificationsPanel {
    pub fn build(feed: &NotificationFeed, filter: NotificationFilter) -> Self {
        let mut items: Vec<Notification> = feed.filter(filter).into_iter().cloned().collect();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self {
            unread: feed.unread_count(),
            items,
        }
    }
}

fn marker(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "[i]",
        NotificationKind::Warning => "[!]",
        NotificationKind::Error => "[x]",
        NotificationKind::Success => "[+]",
    }
}

impl std::fmt::Display for NotificationsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Notifications ({} unread)", self.unread)?;
        if self.items.is_empty() {
            writeln!(f, "  No notifications.")?;
        }
        for n in &self.items {
            writeln!(
                f,
                "  {} {}{} - {}",
                marker(n.kind),
                n.title,
                if n.is_read { "" } else { " (new)" },
                n.message
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::Fixtures;

    #[test]
    fn test_newest_first() {
        let feed = NotificationFeed::new(Fixtures::seed().notifications);
        let panel = NotificationsPanel::build(&feed, NotificationFilter::All);
        let ids: Vec<_> = panel.items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(panel.unread, 2);
    }

    #[test]
    fn test_unread_filter_after_mark_all() {
        let mut feed = NotificationFeed::new(Fixtures::seed().notifications);
        feed.mark_all_read();
        let panel = NotificationsPanel::build(&feed, NotificationFilter::Unread);
        assert!(panel.items.is_empty());
        assert!(panel.to_string().contains("No notifications."));
    }
}
