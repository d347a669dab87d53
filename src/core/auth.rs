//! Identity resolution for query scopes
//!
//! Reactify never authenticates anyone. When a caller asks for "entities the
//! current user reacted to" without naming a user, the current identity comes
//! from an [`IdentityResolver`] passed in explicitly.

/// Authorization context of the caller
#[derive(Debug, Clone)]
pub enum AuthContext {
    /// Authenticated user
    User { user_id: String },

    /// Service-to-service call, acting for no user
    Service { service_name: String },

    /// No authentication (public access)
    Anonymous,
}

impl AuthContext {
    /// Get user_id if available
    pub fn user_id(&self) -> Option<&str> {
        match self {
            AuthContext::User { user_id, .. } => Some(user_id),
            _ => None,
        }
    }
}

/// Source of the currently authenticated user's id
pub trait IdentityResolver: Send + Sync {
    /// The current user's id, or `None` when nobody is authenticated
    fn current_user_id(&self) -> Option<String>;
}

impl IdentityResolver for AuthContext {
    fn current_user_id(&self) -> Option<String> {
        self.user_id().map(str::to_string)
    }
}

/// Resolver returning a fixed identity, for jobs and tests
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl StaticIdentity {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self(Some(user_id.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityResolver for StaticIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}
