pub mod apply_form;
pub mod course_card;
pub mod footer;
pub mod navbar;
pub mod page;
pub mod partner_card;
pub mod shell;
pub mod status_badge;

pub use apply_form::ApplyForm;
pub use course_card::CourseCard;
pub use footer::Footer;
pub use navbar::Navbar;
pub use page::Page;
pub use partner_card::PartnerCard;
pub use shell::Shell;
pub use status_badge::StatusBadge;
