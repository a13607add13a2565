use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::user_query::{
    CredentialRecord, ProfileRecord, UserQuery, UserQueryError,
};

use super::sea_orm_entity::user_roles::{Column as UserRoleColumn, Entity as UserRoleEntity};
use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn roles_of(&self, user_id: Uuid) -> Result<Vec<Role>, UserQueryError> {
        let rows = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        // A stray role string in the table is skipped, not a hard error.
        Ok(rows
            .iter()
            .filter_map(|row| Role::parse(&row.role))
            .collect())
    }

    async fn roles_by_user(
        &self,
        user_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<Role>>, UserQueryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let mut map: HashMap<Uuid, Vec<Role>> = HashMap::new();
        for row in rows {
            if let Some(role) = Role::parse(&row.role) {
                map.entry(row.user_id).or_default().push(role);
            }
        }

        Ok(map)
    }

    async fn with_roles(
        &self,
        user: Option<UserModel>,
    ) -> Result<Option<CredentialRecord>, UserQueryError> {
        match user {
            Some(model) => {
                let roles = self.roles_of(model.id).await?;
                Ok(Some(model.to_credential_record(roles)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        self.with_roles(user).await
    }

    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        self.with_roles(user).await
    }

    async fn credentials_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<CredentialRecord>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.into_inner())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        self.with_roles(user).await
    }

    async fn profile_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<ProfileRecord>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.into_inner())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        match user {
            Some(model) => {
                let roles = self.roles_of(model.id).await?;
                Ok(Some(model.to_profile_record(roles)))
            }
            None => Ok(None),
        }
    }

    async fn list_profiles(
        &self,
        role: Option<Role>,
    ) -> Result<Vec<ProfileRecord>, UserQueryError> {
        let mut query = UserEntity::find().order_by_asc(UserColumn::Username);

        // Role filter goes through the join table as a subquery.
        if let Some(role) = role {
            let holder_ids: Vec<Uuid> = UserRoleEntity::find()
                .select_only()
                .column(UserRoleColumn::UserId)
                .filter(UserRoleColumn::Role.eq(role.as_str()))
                .into_tuple()
                .all(&*self.db)
                .await
                .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

            if holder_ids.is_empty() {
                return Ok(Vec::new());
            }

            query = query.filter(UserColumn::Id.is_in(holder_ids));
        }

        let users = query
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let mut roles_map = self
            .roles_by_user(users.iter().map(|u| u.id).collect())
            .await?;

        Ok(users
            .into_iter()
            .map(|model| {
                let roles = roles_map.remove(&model.id).unwrap_or_default();
                model.to_profile_record(roles)
            })
            .collect())
    }

    async fn count_users(&self) -> Result<u64, UserQueryError> {
        UserEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}
