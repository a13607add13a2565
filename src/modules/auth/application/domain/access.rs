use super::role::Role;

/// Outcome of a role gate. Call sites map `Denied` to their own error
/// response; this function never touches the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

/// Roles allowed to manage categories and events.
pub const STAFF_ROLES: &[Role] = &[Role::Admin, Role::Organizer];

/// Set-membership gate: grants when the user holds *any* of the allowed
/// roles. No IO, no side effects.
pub fn authorize(user_roles: &[Role], allowed: &[Role]) -> AccessDecision {
    if user_roles.iter().any(|role| allowed.contains(role)) {
        AccessDecision::Granted
    } else {
        AccessDecision::Denied
    }
}
