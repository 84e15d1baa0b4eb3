use dioxus::prelude::*;

use crate::client::components::Shell;
use crate::client::routes::{
    About, AdminDashboard, Courses, Home, Login, NotFound, Partners, StudentDashboard,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]

    #[route("/")]
    Home {},

    #[route("/about")]
    About {},

    #[route("/courses")]
    Courses {},

    #[route("/partners")]
    Partners {},

    #[route("/login")]
    Login {},

    #[route("/dashboard")]
    StudentDashboard {},

    #[route("/admin")]
    AdminDashboard {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
