//! Tests for notification ordering, read flags, and audience filtering.

use super::*;
use crate::model::{NotificationDraft, NotificationKind, ADMIN_AUDIENCE};
use crate::store::AppState;

fn notification_draft(user_id: &str, title: &str) -> NotificationDraft {
    NotificationDraft {
        kind: NotificationKind::ApplicationSubmitted,
        title: title.to_string(),
        message: String::new(),
        user_id: user_id.to_string(),
        application_id: None,
        read: false,
    }
}

/// New notifications go to the front: the projection is most-recent-first.
#[test]
fn newest_notification_is_first() {
    let mut store = AppState::new();

    store.add_notification(notification_draft("s1", "first"));
    store.add_notification(notification_draft("s1", "second"));

    let titles: Vec<_> = store.notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn mark_read_flips_flag_once() {
    let mut store = AppState::new();
    let notification = store.add_notification(notification_draft("s1", "unread"));

    store.mark_notification_read(&notification.id);
    assert!(store.notifications[0].read);

    // Unknown ids are ignored.
    store.mark_notification_read("missing");
    assert_eq!(store.notifications.len(), 1);
}

/// A student sees their own notifications plus everything broadcast to the
/// admin audience; another student's notifications stay invisible.
#[test]
fn audience_filtering_includes_admin_broadcasts() {
    let mut store = AppState::new();
    store.add_notification(notification_draft("s1", "mine"));
    store.add_notification(notification_draft("s2", "theirs"));
    store.add_notification(notification_draft(ADMIN_AUDIENCE, "broadcast"));

    let visible = store.user_notifications("s1");
    let titles: Vec<_> = visible.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["broadcast", "mine"]);
}

/// The admin overview feed: submissions land in the admin audience unread,
/// and reading them one by one drains the unread count to zero.
#[test]
fn admin_feed_drains_as_notifications_are_read() {
    let mut store = AppState::new();
    store.submit_application(draft("s1", "1"));
    store.submit_application(draft("s2", "2"));

    let feed = store.user_notifications(ADMIN_AUDIENCE);
    assert_eq!(feed.len(), 2);
    assert!(feed.iter().all(|n| !n.read));
    assert_eq!(store.unread_notification_count(ADMIN_AUDIENCE), 2);

    store.mark_notification_read(&feed[0].id);
    assert_eq!(store.unread_notification_count(ADMIN_AUDIENCE), 1);
    let unread: Vec<_> = store
        .user_notifications(ADMIN_AUDIENCE)
        .into_iter()
        .filter(|n| !n.read)
        .collect();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, feed[1].id);

    store.mark_notification_read(&feed[1].id);
    assert_eq!(store.unread_notification_count(ADMIN_AUDIENCE), 0);
}

/// The unread count always equals the derived value computed from the
/// notification projection.
#[test]
fn unread_count_matches_projection() {
    let mut store = AppState::new();
    let a = store.add_notification(notification_draft("s1", "a"));
    store.add_notification(notification_draft("s1", "b"));
    store.add_notification(notification_draft(ADMIN_AUDIENCE, "c"));
    store.add_notification(notification_draft("s2", "d"));

    for user in ["s1", "s2", ADMIN_AUDIENCE, "nobody"] {
        let derived = store
            .user_notifications(user)
            .iter()
            .filter(|n| !n.read)
            .count();
        assert_eq!(store.unread_notification_count(user), derived);
    }

    store.mark_notification_read(&a.id);
    assert_eq!(store.unread_notification_count("s1"), 2);
    let derived = store
        .user_notifications("s1")
        .iter()
        .filter(|n| !n.read)
        .count();
    assert_eq!(store.unread_notification_count("s1"), derived);
}
