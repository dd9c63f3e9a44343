//! Session and role types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Role picked at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Whether this role may perform operations requiring the capability
    pub fn allows(&self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (Role::Admin, Capability::ManageCatalog) | (Role::User, Capability::Circulate)
        )
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation groups gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Add, edit, update and delete books
    ManageCatalog,
    /// Borrow and return books
    Circulate,
}

impl Capability {
    fn describe(&self) -> &'static str {
        match self {
            Capability::ManageCatalog => "manage the catalog",
            Capability::Circulate => "borrow or return books",
        }
    }
}

/// Current interaction session. Active exactly when a role is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.role.is_some()
    }

    pub(crate) fn login(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub(crate) fn logout(&mut self) {
        self.role = None;
    }

    /// Require an active session whose role grants the capability
    pub fn require(&self, capability: Capability) -> Result<Role, AppError> {
        let role = self
            .role
            .ok_or_else(|| AppError::Authentication("No active session, log in first".to_string()))?;

        if role.allows(capability) {
            Ok(role)
        } else {
            Err(AppError::Authorization(format!(
                "Role {} is not allowed to {}",
                role,
                capability.describe()
            )))
        }
    }
}

/// Session as exposed to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionInfo {
    pub role: Option<Role>,
    pub active: bool,
}

impl From<Session> for SessionInfo {
    fn from(session: Session) -> Self {
        Self {
            role: session.role(),
            active: session.is_active(),
        }
    }
}
