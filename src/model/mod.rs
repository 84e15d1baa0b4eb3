pub mod application;
pub mod course;
pub mod notification;
pub mod partner;
pub mod user;

pub use application::{Application, ApplicationDecision, ApplicationDraft, ApplicationStatus};
pub use course::{Course, CourseMode};
pub use notification::{Notification, NotificationDraft, NotificationKind, ADMIN_AUDIENCE};
pub use partner::Partner;
pub use user::User;
