pub mod event_participants;
pub mod events;
