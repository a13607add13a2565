use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::event::application::ports::outgoing::EventRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub description: String,

    pub date: Date,

    pub time: Time,

    pub location: String,

    pub category_id: Uuid,

    pub image_path: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            date: self.date,
            time: self.time,
            location: self.location.clone(),
            category_id: self.category_id,
            image_path: self.image_path.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Category,

    #[sea_orm(has_many = "super::event_participants::Entity")]
    EventParticipants,
}

impl Related<crate::modules::category::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::event_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
