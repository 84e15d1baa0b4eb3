pub mod app;
pub mod query;
pub mod session;

pub use app::AppState;
pub use session::SessionState;

#[cfg(test)]
mod tests;
