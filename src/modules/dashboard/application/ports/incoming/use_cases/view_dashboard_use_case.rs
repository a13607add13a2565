use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::role::Role;
use crate::event::application::ports::outgoing::EventSummaryView;

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Landing payload, keyed by the caller's primary role. The serde tag puts a
/// `"role"` field in the JSON so the frontend knows which shape it received.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardView {
    Admin {
        total_users: u64,
        total_events: u64,
        total_categories: u64,
        events: Vec<EventSummaryView>,
    },

    Organizer {
        total_events: u64,
        total_categories: u64,
        events: Vec<EventSummaryView>,
    },

    /// Also the fallback for a user with no stored roles.
    Participant { attending: Vec<EventSummaryView> },
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ViewDashboardError {
    #[error("Failed to assemble dashboard: {0}")]
    QueryFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ViewDashboardUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        roles: &[Role],
    ) -> Result<DashboardView, ViewDashboardError>;
}
