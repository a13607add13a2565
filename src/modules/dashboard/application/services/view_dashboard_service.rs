use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::dashboard::application::ports::incoming::use_cases::{
    DashboardView, ViewDashboardError, ViewDashboardUseCase,
};
use crate::event::application::ports::outgoing::{
    EventListFilter, EventQuery, EventSort, EventSummaryView,
};

/// Assembles the landing payload for the caller's primary role. Staff
/// variants aggregate totals over users, events and categories; the
/// participant variant is just the caller's RSVP list.
pub struct ViewDashboardService<E, C, U> {
    events: E,
    categories: C,
    users: U,
}

impl<E, C, U> ViewDashboardService<E, C, U>
where
    E: EventQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(events: E, categories: C, users: U) -> Self {
        Self {
            events,
            categories,
            users,
        }
    }

    async fn staff_events(&self) -> Result<Vec<EventSummaryView>, ViewDashboardError> {
        self.events
            .list_events(EventListFilter::default(), EventSort::DateAsc)
            .await
            .map_err(map_query_err)
    }
}

#[async_trait]
impl<E, C, U> ViewDashboardUseCase for ViewDashboardService<E, C, U>
where
    E: EventQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        roles: &[Role],
    ) -> Result<DashboardView, ViewDashboardError> {
        match Role::primary(roles) {
            Role::Admin => {
                let total_users = self.users.count_users().await.map_err(map_query_err)?;
                let total_events = self.events.count_events().await.map_err(map_query_err)?;
                let total_categories = self
                    .categories
                    .count_categories()
                    .await
                    .map_err(map_query_err)?;
                let events = self.staff_events().await?;

                Ok(DashboardView::Admin {
                    total_users,
                    total_events,
                    total_categories,
                    events,
                })
            }

            Role::Organizer => {
                let total_events = self.events.count_events().await.map_err(map_query_err)?;
                let total_categories = self
                    .categories
                    .count_categories()
                    .await
                    .map_err(map_query_err)?;
                let events = self.staff_events().await?;

                Ok(DashboardView::Organizer {
                    total_events,
                    total_categories,
                    events,
                })
            }

            Role::Participant => {
                let attending = self
                    .events
                    .list_attending(user_id)
                    .await
                    .map_err(map_query_err)?;

                Ok(DashboardView::Participant { attending })
            }
        }
    }
}

fn map_query_err<E: std::fmt::Display>(e: E) -> ViewDashboardError {
    ViewDashboardError::QueryFailed(e.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
