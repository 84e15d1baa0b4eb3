//! The session-wide domain store.
//!
//! [`AppState`] is the single source of truth for every mutable collection:
//! courses, partners, applications, and notifications. The view layer holds
//! it in a signal and re-renders from the updated collections after each
//! mutation. Nothing here can fail: the only degenerate case is a silent
//! no-op when an id does not match any element.

use std::cmp;

use chrono::Utc;

use crate::data::seed;
use crate::model::{
    Application, ApplicationDecision, ApplicationDraft, ApplicationStatus, Course, Notification,
    NotificationDraft, NotificationKind, Partner, ADMIN_AUDIENCE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub courses: Vec<Course>,
    pub partners: Vec<Partner>,
    pub applications: Vec<Application>,
    pub notifications: Vec<Notification>,
    last_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AppState {
    /// An empty store with no catalog. Mostly useful in tests.
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            partners: Vec::new(),
            applications: Vec::new(),
            notifications: Vec::new(),
            last_id: 0,
        }
    }

    /// The state a fresh session starts from: the sample catalog, no
    /// applications, no notifications.
    pub fn seeded() -> Self {
        Self {
            courses: seed::sample_courses(),
            partners: seed::sample_partners(),
            ..Self::new()
        }
    }

    /// Mints a session-unique id.
    ///
    /// Seeded from the wall clock in milliseconds and forced monotonic, so
    /// two mutations in the same millisecond still get distinct ids.
    pub fn mint_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_id = cmp::max(now, self.last_id + 1);
        self.last_id.to_string()
    }

    // Courses. No duplicate-id check on add; the caller supplies the id
    // (usually from `mint_id`). Update is a full replace by id.

    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn update_course(&mut self, id: &str, course: Course) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == id) {
            *existing = course;
        }
    }

    pub fn delete_course(&mut self, id: &str) {
        self.courses.retain(|c| c.id != id);
    }

    // Partners, same contract shape as courses.

    pub fn add_partner(&mut self, partner: Partner) {
        self.partners.push(partner);
    }

    pub fn update_partner(&mut self, id: &str, partner: Partner) {
        if let Some(existing) = self.partners.iter_mut().find(|p| p.id == id) {
            *existing = partner;
        }
    }

    pub fn delete_partner(&mut self, id: &str) {
        self.partners.retain(|p| p.id != id);
    }

    /// Records a new application and notifies the admin audience.
    ///
    /// The draft's student and course fields are stored as-is; they are a
    /// snapshot taken now and are never refreshed. There is no
    /// duplicate-application check, so applying twice to the same course
    /// produces two records. Returns the created application.
    pub fn submit_application(&mut self, draft: ApplicationDraft) -> Application {
        let now = Utc::now();
        let application = Application {
            id: self.mint_id(),
            student_id: draft.student_id,
            course_id: draft.course_id,
            student_name: draft.student_name,
            student_email: draft.student_email,
            student_phone: draft.student_phone,
            student_address: draft.student_address,
            course_title: draft.course_title,
            institution: draft.institution,
            status: ApplicationStatus::Pending,
            applied_at: now,
            updated_at: now,
        };
        self.applications.push(application.clone());

        self.add_notification(NotificationDraft {
            kind: NotificationKind::ApplicationSubmitted,
            title: "New Application Received".to_string(),
            message: format!(
                "{} applied for {}",
                application.student_name, application.course_title
            ),
            user_id: ADMIN_AUDIENCE.to_string(),
            application_id: Some(application.id.clone()),
            read: false,
        });

        application
    }

    /// Withdraws an application and cascade-deletes every notification
    /// that references it. No-op when the id is unknown.
    pub fn remove_application(&mut self, application_id: &str) {
        self.applications.retain(|a| a.id != application_id);
        self.notifications
            .retain(|n| n.application_id.as_deref() != Some(application_id));
    }

    /// Applies an admin decision to a pending application and notifies the
    /// owning student.
    ///
    /// Lookup, mutation, and the notification happen in this one call; no
    /// state is read outside it. An unknown id, or an application already
    /// in a terminal state, changes nothing and enqueues nothing.
    pub fn update_application_status(
        &mut self,
        application_id: &str,
        decision: ApplicationDecision,
    ) {
        let Some(application) = self
            .applications
            .iter_mut()
            .find(|a| a.id == application_id && a.status == ApplicationStatus::Pending)
        else {
            return;
        };

        application.status = decision.status();
        application.updated_at = Utc::now();

        let student_id = application.student_id.clone();
        let course_title = application.course_title.clone();
        let (kind, title) = match decision {
            ApplicationDecision::Approved => {
                (NotificationKind::ApplicationApproved, "Application Approved")
            }
            ApplicationDecision::Rejected => {
                (NotificationKind::ApplicationRejected, "Application Rejected")
            }
        };

        self.add_notification(NotificationDraft {
            kind,
            title: title.to_string(),
            message: format!(
                "Your application for {} has been {}",
                course_title, decision
            ),
            user_id: student_id,
            application_id: Some(application_id.to_string()),
            read: false,
        });
    }

    /// All applications submitted by the given student, insertion order.
    pub fn user_applications(&self, user_id: &str) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|a| a.student_id == user_id)
            .cloned()
            .collect()
    }

    /// All applications for the given course, insertion order.
    pub fn course_applications(&self, course_id: &str) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect()
    }

    /// The student's application to a course, if one exists. When the
    /// student applied more than once the earliest submission wins.
    pub fn find_application(&self, user_id: &str, course_id: &str) -> Option<Application> {
        self.applications
            .iter()
            .find(|a| a.student_id == user_id && a.course_id == course_id)
            .cloned()
    }

    /// Enqueues a notification at the front of the list; the notification
    /// projection is most-recent-first.
    pub fn add_notification(&mut self, draft: NotificationDraft) -> Notification {
        let notification = Notification {
            id: self.mint_id(),
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            user_id: draft.user_id,
            application_id: draft.application_id,
            read: draft.read,
            created_at: Utc::now(),
        };
        self.notifications.insert(0, notification.clone());
        notification
    }

    pub fn mark_notification_read(&mut self, notification_id: &str) {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            notification.read = true;
        }
    }

    /// Notifications addressed to the given user, plus everything sent to
    /// the admin broadcast audience, most recent first.
    pub fn user_notifications(&self, user_id: &str) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|n| targets_user(n, user_id))
            .cloned()
            .collect()
    }

    pub fn unread_notification_count(&self, user_id: &str) -> usize {
        self.notifications
            .iter()
            .filter(|n| targets_user(n, user_id) && !n.read)
            .count()
    }
}

fn targets_user(notification: &Notification, user_id: &str) -> bool {
    notification.user_id == user_id || notification.user_id == ADMIN_AUDIENCE
}
