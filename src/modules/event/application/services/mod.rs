mod create_event_service;
mod delete_event_service;
mod get_event_service;
mod list_events_service;
mod rsvp_event_service;
mod update_event_service;

pub use create_event_service::CreateEventService;
pub use delete_event_service::DeleteEventService;
pub use get_event_service::GetEventService;
pub use list_events_service::ListEventsService;
pub use rsvp_event_service::RsvpEventService;
pub use update_event_service::UpdateEventService;
