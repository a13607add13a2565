use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    NotSet, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::event::application::ports::outgoing::{
    EventData, EventRecord, EventRepository, EventRepositoryError, RsvpInsert,
};

use super::sea_orm_entity::events::{
    ActiveModel as EventActiveModel, Entity as EventEntity, Model as EventModel,
};

#[derive(Debug, Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// The only foreign key on `events` points at `categories`, so any FK
    /// violation on a write means the category id is stale.
    fn map_write_error(e: DbErr) -> EventRepositoryError {
        let err_str = e.to_string().to_lowercase();

        if err_str.contains("23503") || err_str.contains("foreign key") {
            return EventRepositoryError::CategoryNotFound;
        }

        EventRepositoryError::DatabaseError(e.to_string())
    }

    /// Idempotent RSVP insert. `ON CONFLICT DO NOTHING` lets the composite
    /// primary key absorb repeats without raising.
    fn insert_attendance_stmt(event_id: Uuid, user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO event_participants (event_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
            vec![event_id.into(), user_id.into()],
        )
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn insert_event(&self, data: EventData) -> Result<EventRecord, EventRepositoryError> {
        let active = EventActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            date: Set(data.date),
            time: Set(data.time),
            location: Set(data.location),
            category_id: Set(data.category_id),
            image_path: Set(data.image_path),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted: EventModel = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_record())
    }

    async fn update_event(
        &self,
        event_id: Uuid,
        data: EventData,
    ) -> Result<EventRecord, EventRepositoryError> {
        let active = EventActiveModel {
            id: Set(event_id),
            name: Set(data.name),
            description: Set(data.description),
            date: Set(data.date),
            time: Set(data.time),
            location: Set(data.location),
            category_id: Set(data.category_id),
            image_path: Set(data.image_path),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let updated: EventModel = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => EventRepositoryError::EventNotFound,
            other => Self::map_write_error(other),
        })?;

        Ok(updated.to_record())
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        let result = EventEntity::delete_by_id(event_id)
            .exec(&*self.db)
            .await
            .map_err(|e| EventRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(EventRepositoryError::EventNotFound);
        }

        Ok(())
    }

    async fn insert_attendance(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<RsvpInsert, EventRepositoryError> {
        let result = self
            .db
            .execute(Self::insert_attendance_stmt(event_id, user_id))
            .await
            .map_err(|e| {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("fk_event_participants_event_id") {
                    return EventRepositoryError::EventNotFound;
                }
                EventRepositoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 1 {
            Ok(RsvpInsert::Created)
        } else {
            Ok(RsvpInsert::AlreadyExists)
        }
    }
}
