mod create_event;
mod delete_event;
mod get_event;
mod list_events;
mod rsvp_event;
mod update_event;

pub use create_event::create_event_handler;
pub use delete_event::delete_event_handler;
pub use get_event::get_event_handler;
pub use list_events::{list_events_handler, ListEventsQuery};
pub use rsvp_event::rsvp_event_handler;
pub use update_event::update_event_handler;

// utoipa path companion structs referenced by the OpenAPI document.
pub use get_event::__path_get_event_handler;
pub use list_events::__path_list_events_handler;
