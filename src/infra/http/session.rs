use std::sync::{Arc, PoisonError, RwLock};

/// Auth state injected into every data-access call. Populated at login,
/// cleared at logout; while the token is absent all fetching is disabled.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user_id: Option<i64>,
}

pub type SharedSession = Arc<RwLock<Session>>;

impl Session {
    pub fn signed_out() -> SharedSession {
        Arc::new(RwLock::new(Session::default()))
    }

    pub fn sign_in(&mut self, token: impl Into<String>, user_id: i64) {
        self.token = Some(token.into());
        self.user_id = Some(user_id);
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user_id = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Signed-in user id, or zero, the `createdBy` fallback the screens
    /// use when no user is loaded.
    pub fn user_id(&self) -> i64 {
        self.user_id.unwrap_or(0)
    }
}

/// Read helper that shrugs off lock poisoning; the session is plain data.
pub fn read_session(session: &SharedSession) -> Session {
    session
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn write_session(session: &SharedSession, apply: impl FnOnce(&mut Session)) {
    let mut guard = session.write().unwrap_or_else(PoisonError::into_inner);
    apply(&mut guard);
}
