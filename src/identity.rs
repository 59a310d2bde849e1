//! Caller identity and request scoping.
//!
//! The coordinator never reaches into an ambient auth context; the owner
//! injects an [`Identity`] and the coordinator asks it which handle a
//! request should be scoped to.

use serde::{Deserialize, Serialize};
use unicase::UniCase;

/// Role that grants unscoped access when no roles are configured.
pub const DEFAULT_ADMIN_ROLE: &str = "administrator";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// The already-resolved caller: an optional user plus the roles carried
/// by their token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(handle: impl Into<String>) -> Self {
        Self {
            user: Some(UserProfile {
                handle: handle.into(),
                user_id: None,
            }),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn is_admin(&self, admin_roles: &AdminRoles) -> bool {
        self.roles.iter().any(|r| admin_roles.contains(r))
    }

    /// Which submitter a list request should be restricted to.
    pub fn resolve_handle(&self, admin_roles: &AdminRoles) -> HandleScope {
        if self.is_admin(admin_roles) {
            return HandleScope::Unscoped;
        }
        match &self.user {
            Some(user) => HandleScope::Submitter(user.handle.clone()),
            None => HandleScope::Anonymous,
        }
    }
}

/// Role names (compared case-insensitively) that see every submitter's
/// challenges.
#[derive(Debug, Clone)]
pub struct AdminRoles {
    roles: Vec<UniCase<String>>,
}

impl AdminRoles {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(|r| UniCase::new(r.into())).collect(),
        }
    }

    pub fn contains(&self, role: &str) -> bool {
        let role = UniCase::new(role);
        self.roles.iter().any(|r| UniCase::new(r.as_str()) == role)
    }
}

impl Default for AdminRoles {
    fn default() -> Self {
        Self::new([DEFAULT_ADMIN_ROLE])
    }
}

/// Result of handle resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleScope {
    /// Administrative caller; no submitter restriction.
    Unscoped,
    /// Restricted to challenges authored by this handle.
    Submitter(String),
    /// No user could be resolved.
    Anonymous,
}

impl HandleScope {
    /// Wire form: `null` for both unscoped and anonymous callers.
    pub fn as_handle(&self) -> Option<&str> {
        match self {
            HandleScope::Submitter(handle) => Some(handle),
            HandleScope::Unscoped | HandleScope::Anonymous => None,
        }
    }

    pub fn into_handle(self) -> Option<String> {
        match self {
            HandleScope::Submitter(handle) => Some(handle),
            HandleScope::Unscoped | HandleScope::Anonymous => None,
        }
    }
}
