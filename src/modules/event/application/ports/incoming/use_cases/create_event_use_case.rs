use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::event::application::ports::outgoing::EventDetailView;

/// Stored when the client sends no image reference. File upload itself is
/// out of scope; the column only carries a path string.
pub const DEFAULT_EVENT_IMAGE: &str = "event_images/default.jpg";

//
// ──────────────────────────────────────────────────────────
// Event Command
// ──────────────────────────────────────────────────────────
//

/// Validated create/update payload. Update is full-replace, so both
/// operations share this command. Date and time arrive as strings and are
/// parsed here; `HH:MM` and `HH:MM:SS` are both accepted.
#[derive(Debug, Clone)]
pub struct EventCommand {
    name: String,
    description: String,
    date: NaiveDate,
    time: NaiveTime,
    location: String,
    category_id: Uuid,
    image_path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EventCommandError {
    #[error("Event name cannot be empty")]
    EmptyName,

    #[error("Event name must be at most 200 characters")]
    NameTooLong,

    #[error("Event location cannot be empty")]
    EmptyLocation,

    #[error("Event location must be at most 200 characters")]
    LocationTooLong,

    #[error("Event date must be an ISO date (YYYY-MM-DD)")]
    InvalidDate,

    #[error("Event time must be HH:MM or HH:MM:SS")]
    InvalidTime,
}

impl EventCommand {
    pub fn new(
        name: String,
        description: Option<String>,
        date: &str,
        time: &str,
        location: String,
        category_id: Uuid,
        image_path: Option<String>,
    ) -> Result<Self, EventCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EventCommandError::EmptyName);
        }
        if name.chars().count() > 200 {
            return Err(EventCommandError::NameTooLong);
        }

        let location = location.trim();
        if location.is_empty() {
            return Err(EventCommandError::EmptyLocation);
        }
        if location.chars().count() > 200 {
            return Err(EventCommandError::LocationTooLong);
        }

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| EventCommandError::InvalidDate)?;

        let time = parse_time(time.trim())?;

        let image_path = match image_path.map(|p| p.trim().to_string()) {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_EVENT_IMAGE.to_string(),
        };

        Ok(Self {
            name: name.to_string(),
            description: description.unwrap_or_default().trim().to_string(),
            date,
            time,
            location: location.to_string(),
            category_id,
            image_path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, EventCommandError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| EventCommandError::InvalidTime)
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEventError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateEventUseCase: Send + Sync {
    async fn execute(&self, command: EventCommand) -> Result<EventDetailView, CreateEventError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(
        name: &str,
        date: &str,
        time: &str,
        location: &str,
    ) -> Result<EventCommand, EventCommandError> {
        EventCommand::new(
            name.to_string(),
            Some("An evening of talks".to_string()),
            date,
            time,
            location.to_string(),
            Uuid::new_v4(),
            None,
        )
    }

    #[test]
    fn trims_fields_and_applies_default_image() {
        let cmd = EventCommand::new(
            "  Rust Meetup  ".to_string(),
            None,
            "2025-09-12",
            "18:30",
            "  Berlin  ".to_string(),
            Uuid::new_v4(),
            None,
        )
        .unwrap();

        assert_eq!(cmd.name(), "Rust Meetup");
        assert_eq!(cmd.location(), "Berlin");
        assert_eq!(cmd.description(), "");
        assert_eq!(cmd.image_path(), DEFAULT_EVENT_IMAGE);
    }

    #[test]
    fn keeps_an_explicit_image_path() {
        let cmd = EventCommand::new(
            "Rust Meetup".to_string(),
            None,
            "2025-09-12",
            "18:30",
            "Berlin".to_string(),
            Uuid::new_v4(),
            Some("event_images/meetup.png".to_string()),
        )
        .unwrap();

        assert_eq!(cmd.image_path(), "event_images/meetup.png");
    }

    #[test]
    fn blank_image_path_falls_back_to_default() {
        let cmd = EventCommand::new(
            "Rust Meetup".to_string(),
            None,
            "2025-09-12",
            "18:30",
            "Berlin".to_string(),
            Uuid::new_v4(),
            Some("   ".to_string()),
        )
        .unwrap();

        assert_eq!(cmd.image_path(), DEFAULT_EVENT_IMAGE);
    }

    #[test]
    fn rejects_blank_name() {
        let result = command("   ", "2025-09-12", "18:30", "Berlin");
        assert!(matches!(result, Err(EventCommandError::EmptyName)));
    }

    #[test]
    fn rejects_name_over_200_chars() {
        let long = "x".repeat(201);
        let result = command(&long, "2025-09-12", "18:30", "Berlin");
        assert!(matches!(result, Err(EventCommandError::NameTooLong)));
    }

    #[test]
    fn rejects_blank_location() {
        let result = command("Rust Meetup", "2025-09-12", "18:30", "  ");
        assert!(matches!(result, Err(EventCommandError::EmptyLocation)));
    }

    #[test]
    fn rejects_location_over_200_chars() {
        let long = "x".repeat(201);
        let result = command("Rust Meetup", "2025-09-12", "18:30", &long);
        assert!(matches!(result, Err(EventCommandError::LocationTooLong)));
    }

    #[test]
    fn rejects_malformed_date() {
        let result = command("Rust Meetup", "12/09/2025", "18:30", "Berlin");
        assert!(matches!(result, Err(EventCommandError::InvalidDate)));
    }

    #[test]
    fn accepts_time_with_and_without_seconds() {
        assert!(command("Rust Meetup", "2025-09-12", "18:30", "Berlin").is_ok());
        assert!(command("Rust Meetup", "2025-09-12", "18:30:45", "Berlin").is_ok());
    }

    #[test]
    fn rejects_malformed_time() {
        let result = command("Rust Meetup", "2025-09-12", "6.30pm", "Berlin");
        assert!(matches!(result, Err(EventCommandError::InvalidTime)));
    }
}
