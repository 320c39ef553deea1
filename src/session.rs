/// Login gate. There are no credentials: the flag only decides which view
/// is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn login(&mut self) {
        self.authenticated = true;
        tracing::info!("logged in");
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        tracing::info!("logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
