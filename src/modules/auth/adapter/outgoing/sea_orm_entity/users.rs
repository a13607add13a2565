use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::user_query::{CredentialRecord, ProfileRecord};
use crate::auth::application::ports::outgoing::user_repository::UserRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub profile_picture: String,
    pub is_active: bool,
    pub password_reset_jti: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_roles::Entity")]
    UserRoles,
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Model {
    /// Roles live in `user_roles`; callers resolve them first and pass
    /// the set in.
    pub fn to_credential_record(&self, roles: Vec<Role>) -> CredentialRecord {
        CredentialRecord {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            is_active: self.is_active,
            password_reset_jti: self.password_reset_jti.clone(),
            roles,
        }
    }

    pub fn to_profile_record(&self, roles: Vec<Role>) -> ProfileRecord {
        ProfileRecord {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            profile_picture: self.profile_picture.clone(),
            is_active: self.is_active,
            roles,
            date_joined: self.created_at.with_timezone(&chrono::Utc),
        }
    }

    pub fn to_user_record(&self) -> UserRecord {
        UserRecord {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            profile_picture: self.profile_picture.clone(),
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
