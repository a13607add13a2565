mod create_event_use_case;
mod delete_event_use_case;
mod get_event_use_case;
mod list_events_use_case;
mod rsvp_event_use_case;
mod update_event_use_case;

pub use create_event_use_case::{
    CreateEventError, CreateEventUseCase, EventCommand, EventCommandError, DEFAULT_EVENT_IMAGE,
};
pub use delete_event_use_case::{DeleteEventError, DeleteEventUseCase};
pub use get_event_use_case::{EventDetail, GetEventError, GetEventUseCase};
pub use list_events_use_case::{ListEventsError, ListEventsUseCase};
pub use rsvp_event_use_case::{RsvpEventError, RsvpEventUseCase, RsvpOutcome};
pub use update_event_use_case::{UpdateEventError, UpdateEventUseCase};
