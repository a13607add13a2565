use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of roles the platform knows about. A user holds a *set* of
/// these (see the `user_roles` table); gates check membership, the dashboard
/// keys off the primary role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organizer,
    Participant,
}

/// Role granted to every fresh signup.
pub const DEFAULT_ROLE: Role = Role::Participant;

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organizer => "organizer",
            Role::Participant => "participant",
        }
    }

    /// Parses the lowercase wire/storage form. Unknown strings yield `None`
    /// so a stray row never panics a request.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "organizer" => Some(Role::Organizer),
            "participant" => Some(Role::Participant),
            _ => None,
        }
    }

    /// Collapses a role set to a single role by fixed precedence:
    /// Admin > Organizer > Participant. An empty set falls back to
    /// [`DEFAULT_ROLE`].
    pub fn primary(roles: &[Role]) -> Role {
        if roles.contains(&Role::Admin) {
            Role::Admin
        } else if roles.contains(&Role::Organizer) {
            Role::Organizer
        } else if roles.contains(&Role::Participant) {
            Role::Participant
        } else {
            DEFAULT_ROLE
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
