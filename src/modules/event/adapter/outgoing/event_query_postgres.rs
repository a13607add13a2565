use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::adapter::outgoing::sea_orm_entity as categories;
use crate::modules::event::application::ports::outgoing::{
    CategoryRef, EventDetailView, EventListFilter, EventQuery, EventQueryError, EventSort,
    EventSummaryView,
};

use super::sea_orm_entity::event_participants;
use super::sea_orm_entity::events::{self, Column, Entity};

#[derive(Debug, Clone)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_category_names(
        &self,
        category_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, String>, EventQueryError> {
        let rows = categories::Entity::find()
            .filter(categories::Column::Id.is_in(category_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|c| (c.id, c.name)).collect())
    }

    async fn load_participant_counts(
        &self,
        event_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, i64>, EventQueryError> {
        let rows = event_participants::Entity::find()
            .filter(event_participants::Column::EventId.is_in(event_ids))
            .select_only()
            .column(event_participants::Column::EventId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut counts: HashMap<Uuid, i64> = HashMap::new();
        for event_id in rows {
            *counts.entry(event_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Enriches raw event rows with their category name and participant
    /// count, one batch query per concern.
    async fn summarize(
        &self,
        events: Vec<events::Model>,
    ) -> Result<Vec<EventSummaryView>, EventQueryError> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<Uuid> = events.iter().map(|e| e.category_id).collect();
        let names = self.load_category_names(category_ids).await?;

        let event_ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
        let counts = self.load_participant_counts(event_ids).await?;

        Ok(events
            .into_iter()
            .map(|model| EventSummaryView {
                id: model.id,
                name: model.name,
                date: model.date,
                time: model.time,
                location: model.location,
                image_path: model.image_path,
                category: CategoryRef {
                    id: model.category_id,
                    name: names.get(&model.category_id).cloned().unwrap_or_default(),
                },
                participant_count: counts.get(&model.id).copied().unwrap_or(0),
            })
            .collect())
    }
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn list_events(
        &self,
        filter: EventListFilter,
        sort: EventSort,
    ) -> Result<Vec<EventSummaryView>, EventQueryError> {
        let mut query = Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Location).ilike(&pattern)),
            );
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(Column::CategoryId.eq(category_id));
        }

        // A half-open range is ignored; both bounds or nothing.
        if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
            query = query.filter(Column::Date.between(from, to));
        }

        query = match sort {
            EventSort::DateAsc => query.order_by_asc(Column::Date).order_by_asc(Column::Time),
            EventSort::DateDesc => query.order_by_desc(Column::Date).order_by_desc(Column::Time),
        };

        let events = query.all(&*self.db).await.map_err(map_db_err)?;

        self.summarize(events).await
    }

    async fn fetch_event_detail(
        &self,
        event_id: Uuid,
    ) -> Result<EventDetailView, EventQueryError> {
        let event = Entity::find_by_id(event_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(EventQueryError::EventNotFound)?;

        let names = self.load_category_names(vec![event.category_id]).await?;
        let counts = self.load_participant_counts(vec![event.id]).await?;

        Ok(EventDetailView {
            id: event.id,
            name: event.name,
            description: event.description,
            date: event.date,
            time: event.time,
            location: event.location,
            image_path: event.image_path,
            category: CategoryRef {
                id: event.category_id,
                name: names.get(&event.category_id).cloned().unwrap_or_default(),
            },
            participant_count: counts.get(&event.id).copied().unwrap_or(0),
        })
    }

    async fn is_attending(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, EventQueryError> {
        let row = event_participants::Entity::find_by_id((event_id, user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.is_some())
    }

    async fn list_attending(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<EventSummaryView>, EventQueryError> {
        let event_ids = event_participants::Entity::find()
            .filter(event_participants::Column::UserId.eq(user_id))
            .select_only()
            .column(event_participants::Column::EventId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let events = Entity::find()
            .filter(Column::Id.is_in(event_ids))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Time)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.summarize(events).await
    }

    async fn count_events(&self) -> Result<u64, EventQueryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> EventQueryError {
    EventQueryError::DatabaseError(e.to_string())
}
