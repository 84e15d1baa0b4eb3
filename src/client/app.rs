use dioxus::prelude::*;

use crate::client::router::Route;
use crate::store::{AppState, SessionState};

/// Root component. Provides the domain store and the session as explicit
/// context values so every screen reads and mutates the same instance;
/// signals give the synchronous re-render after each mutation.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::seeded()));
    use_context_provider(|| Signal::new(SessionState::default()));

    rsx! {
        Router::<Route> {}
    }
}
