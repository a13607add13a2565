use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::ports::{
    incoming::use_cases::{EventDetail, GetEventError, GetEventUseCase},
    outgoing::{EventQuery, EventQueryError},
};

#[derive(Debug, Clone)]
pub struct GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetEventUseCase for GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(
        &self,
        event_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<EventDetail, GetEventError> {
        let view = self
            .query
            .fetch_event_detail(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::EventNotFound => GetEventError::EventNotFound,
                other => GetEventError::QueryFailed(other.to_string()),
            })?;

        let is_attending = match viewer {
            Some(user_id) => self
                .query
                .is_attending(event_id, user_id)
                .await
                .map_err(|e| GetEventError::QueryFailed(e.to_string()))?,
            None => false,
        };

        Ok(EventDetail::from_view(view, is_attending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::event::application::ports::outgoing::{
        CategoryRef, EventDetailView, EventListFilter, EventSort, EventSummaryView,
    };

    #[derive(Debug, Clone)]
    struct MockEventQuery {
        detail: Result<EventDetailView, EventQueryError>,
        attending: bool,
        attendance_checks: Arc<Mutex<Vec<(Uuid, Uuid)>>>,
    }

    impl MockEventQuery {
        fn with_detail(detail: EventDetailView, attending: bool) -> Self {
            Self {
                detail: Ok(detail),
                attending,
                attendance_checks: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn not_found() -> Self {
            Self {
                detail: Err(EventQueryError::EventNotFound),
                attending: false,
                attendance_checks: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl EventQuery for MockEventQuery {
        async fn list_events(
            &self,
            _filter: EventListFilter,
            _sort: EventSort,
        ) -> Result<Vec<EventSummaryView>, EventQueryError> {
            unimplemented!("Not used in get_event tests")
        }

        async fn fetch_event_detail(
            &self,
            _event_id: Uuid,
        ) -> Result<EventDetailView, EventQueryError> {
            self.detail.clone()
        }

        async fn is_attending(
            &self,
            event_id: Uuid,
            user_id: Uuid,
        ) -> Result<bool, EventQueryError> {
            self.attendance_checks
                .lock()
                .unwrap()
                .push((event_id, user_id));
            Ok(self.attending)
        }

        async fn list_attending(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<EventSummaryView>, EventQueryError> {
            unimplemented!("Not used in get_event tests")
        }

        async fn count_events(&self) -> Result<u64, EventQueryError> {
            unimplemented!("Not used in get_event tests")
        }
    }

    fn detail(event_id: Uuid) -> EventDetailView {
        EventDetailView {
            id: event_id,
            name: "Rust Meetup".to_string(),
            description: "Talks and pizza".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
            time: chrono::NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            location: "Berlin".to_string(),
            image_path: "event_images/default.jpg".to_string(),
            category: CategoryRef {
                id: Uuid::new_v4(),
                name: "Tech".to_string(),
            },
            participant_count: 7,
        }
    }

    #[tokio::test]
    async fn authenticated_viewer_gets_their_rsvp_state() {
        let event_id = Uuid::new_v4();
        let viewer = Uuid::new_v4();

        let query = MockEventQuery::with_detail(detail(event_id), true);
        let checks = query.attendance_checks.clone();

        let service = GetEventService::new(query);

        let result = service.execute(event_id, Some(viewer)).await.unwrap();

        assert!(result.is_attending);
        assert_eq!(result.participant_count, 7);
        assert_eq!(*checks.lock().unwrap(), vec![(event_id, viewer)]);
    }

    #[tokio::test]
    async fn anonymous_viewer_never_triggers_an_attendance_lookup() {
        let event_id = Uuid::new_v4();

        let query = MockEventQuery::with_detail(detail(event_id), true);
        let checks = query.attendance_checks.clone();

        let service = GetEventService::new(query);

        let result = service.execute(event_id, None).await.unwrap();

        assert!(!result.is_attending);
        assert!(checks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_event_maps_to_event_not_found() {
        let service = GetEventService::new(MockEventQuery::not_found());

        let result = service.execute(Uuid::new_v4(), None).await;

        assert!(matches!(result, Err(GetEventError::EventNotFound)));
    }
}
