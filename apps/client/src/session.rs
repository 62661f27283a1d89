use std::sync::{Arc, RwLock};

use crate::models::auth::UserProfile;

#[derive(Debug, Clone)]
struct SessionState {
    token: String,
    user: UserProfile,
}

/// Session-lifetime auth state: the bearer token and the signed-in user's
/// profile. Cloneable handle shared between the API client and any screen
/// that needs the profile; nothing is persisted beyond the process.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionState>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, token: String, user: UserProfile) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(SessionState { token, user });
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.token.clone())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
