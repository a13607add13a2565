pub mod event_query;
pub mod event_repository;

pub use event_query::{
    CategoryRef, EventDetailView, EventListFilter, EventQuery, EventQueryError, EventSort,
    EventSummaryView,
};
pub use event_repository::{
    EventData, EventRecord, EventRepository, EventRepositoryError, RsvpInsert,
};
