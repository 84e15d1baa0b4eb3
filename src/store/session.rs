use crate::model::User;

/// The logged-in user for this browser session, if any.
///
/// Login fabricates a [`User`] from whatever the form contained; logout
/// drops it. Nothing survives a page load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}
