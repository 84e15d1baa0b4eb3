//! End-to-end flow through the domain store: a student applies, the admin
//! approves, and the student withdraws.

use campusgate::model::{
    ApplicationDecision, ApplicationDraft, ApplicationStatus, NotificationKind, ADMIN_AUDIENCE,
};
use campusgate::store::AppState;

fn draft_for(store: &AppState, student_id: &str, course_id: &str) -> ApplicationDraft {
    let course = store
        .courses
        .iter()
        .find(|c| c.id == course_id)
        .expect("seed course exists");

    ApplicationDraft {
        student_id: student_id.to_string(),
        course_id: course.id.clone(),
        student_name: "Sam Student".to_string(),
        student_email: "sam@example.com".to_string(),
        student_phone: "+1-555-0100".to_string(),
        student_address: "12 Campus Road".to_string(),
        course_title: course.title.clone(),
        institution: course.institution.clone(),
    }
}

#[test]
fn apply_approve_withdraw_round_trip() {
    let mut store = AppState::seeded();
    assert_eq!(store.courses.len(), 6);
    assert_eq!(store.partners.len(), 6);
    assert!(store.applications.is_empty());

    // Student "s1" applies to seed course "1".
    let draft = draft_for(&store, "s1", "1");
    let application = store.submit_application(draft);

    assert_eq!(store.applications.len(), 1);
    assert_eq!(store.notifications.len(), 1);
    assert_eq!(store.notifications[0].user_id, ADMIN_AUDIENCE);
    assert_eq!(
        store.notifications[0].kind,
        NotificationKind::ApplicationSubmitted
    );
    assert_eq!(store.unread_notification_count(ADMIN_AUDIENCE), 1);

    // Admin approves. The student gets the decision notification, newest
    // first in the projection.
    store.update_application_status(&application.id, ApplicationDecision::Approved);

    assert_eq!(store.applications[0].status, ApplicationStatus::Approved);
    assert_eq!(store.notifications.len(), 2);
    assert_eq!(store.notifications[0].user_id, "s1");
    assert_eq!(
        store.notifications[0].kind,
        NotificationKind::ApplicationApproved
    );

    let student_view = store.user_notifications("s1");
    assert_eq!(student_view.len(), 2); // own decision + admin broadcast
    assert_eq!(store.unread_notification_count("s1"), 2);

    // Student withdraws. Both notifications referenced the application, so
    // the cascade empties the notification list too.
    store.remove_application(&application.id);

    assert!(store.applications.is_empty());
    assert!(store.notifications.is_empty());
    assert_eq!(store.unread_notification_count("s1"), 0);

    // The catalog is untouched throughout.
    assert_eq!(store.courses.len(), 6);
    assert_eq!(store.partners.len(), 6);
}

#[test]
fn snapshot_fields_survive_catalog_edits() {
    let mut store = AppState::seeded();
    let draft = draft_for(&store, "s1", "1");
    let original_title = draft.course_title.clone();
    let application = store.submit_application(draft);

    // Editing the course afterwards must not touch the application's
    // captured snapshot.
    let mut edited = store.courses[0].clone();
    edited.title = "Renamed Program".to_string();
    store.update_course("1", edited);

    let stored = &store.user_applications("s1")[0];
    assert_eq!(stored.id, application.id);
    assert_eq!(stored.course_title, original_title);
}

#[test]
fn application_serializes_with_wire_field_names() {
    let mut store = AppState::seeded();
    let draft = draft_for(&store, "s1", "1");
    let application = store.submit_application(draft);

    let json = serde_json::to_value(&application).unwrap();
    assert_eq!(json["studentId"], "s1");
    assert_eq!(json["status"], "pending");
    assert!(json["appliedAt"].is_string());
    assert_eq!(json["appliedAt"], json["updatedAt"]);
}
