use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::UserQuery;
use crate::email::application::ports::outgoing::{RsvpEmailDetails, RsvpNotifier};
use crate::event::application::ports::{
    incoming::use_cases::{RsvpEventError, RsvpEventUseCase, RsvpOutcome},
    outgoing::{
        EventDetailView, EventQuery, EventQueryError, EventRepository, EventRepositoryError,
        RsvpInsert,
    },
};

/// Records the RSVP and, for a first RSVP only, dispatches the confirmation
/// email in the background. The attendance row is the transaction; a flaky
/// SMTP relay never blocks or fails the response.
#[derive(Clone)]
pub struct RsvpEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    repository: R,
    query: Q,
    users: Arc<dyn UserQuery + Send + Sync>,
    notifier: Arc<dyn RsvpNotifier + Send + Sync>,
}

impl<R, Q> RsvpEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    pub fn new(
        repository: R,
        query: Q,
        users: Arc<dyn UserQuery + Send + Sync>,
        notifier: Arc<dyn RsvpNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            query,
            users,
            notifier,
        }
    }

    fn dispatch_confirmation(&self, user_id: Uuid, event: &EventDetailView) {
        let users = Arc::clone(&self.users);
        let notifier = Arc::clone(&self.notifier);
        let details = RsvpEmailDetails {
            event_name: event.name.clone(),
            event_date: event.date,
            event_time: event.time,
            event_location: event.location.clone(),
        };

        tokio::spawn(async move {
            let profile = match users.profile_by_id(UserId::from(user_id)).await {
                Ok(Some(profile)) => profile,
                Ok(None) => {
                    tracing::warn!(
                        "RSVP stored but user {} no longer exists; skipping confirmation email",
                        user_id
                    );
                    return;
                }
                Err(e) => {
                    tracing::warn!(
                        "RSVP stored but attendee lookup failed for user {}: {}. \
                         Skipping confirmation email",
                        user_id,
                        e
                    );
                    return;
                }
            };

            let max_retries = 3;
            for attempt in 1..=max_retries {
                match notifier
                    .send_rsvp_confirmation(&profile.username, &profile.email, details.clone())
                    .await
                {
                    Ok(_) => return,
                    Err(e) if attempt < max_retries => {
                        tracing::warn!(
                            "RSVP email attempt {}/{} failed for user {}: {}. Retrying...",
                            attempt,
                            max_retries,
                            user_id,
                            e
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} RSVP email attempts failed for user {}: {}",
                            max_retries,
                            user_id,
                            e
                        );
                    }
                }
            }
        });
    }
}

#[async_trait]
impl<R, Q> RsvpEventUseCase for RsvpEventService<R, Q>
where
    R: EventRepository + Send + Sync,
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<RsvpOutcome, RsvpEventError> {
        let event = self
            .query
            .fetch_event_detail(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::EventNotFound => RsvpEventError::EventNotFound,
                other => RsvpEventError::DatabaseError(other.to_string()),
            })?;

        // The event can vanish between the read and the write; the insert
        // reports that as EventNotFound via the foreign key.
        let inserted = self
            .repository
            .insert_attendance(event_id, user_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::EventNotFound => RsvpEventError::EventNotFound,
                other => RsvpEventError::DatabaseError(other.to_string()),
            })?;

        match inserted {
            RsvpInsert::AlreadyExists => Ok(RsvpOutcome::AlreadyConfirmed),
            RsvpInsert::Created => {
                self.dispatch_confirmation(user_id, &event);
                Ok(RsvpOutcome::Confirmed {
                    event_name: event.name,
                })
            }
        }
    }
}
