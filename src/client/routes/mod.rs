pub mod about;
pub mod admin;
pub mod courses;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod partners;

pub use about::About;
pub use admin::AdminDashboard;
pub use courses::Courses;
pub use dashboard::StudentDashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use partners::Partners;
