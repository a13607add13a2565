use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::user_repository::{
    ActivationOutcome, NewAccount, ProfileChanges, UserRecord, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::user_roles::ActiveModel as UserRoleActiveModel;
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_user(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.into_inner())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }

    /// Postgres reports unique violations through the driver error text;
    /// the constraint name tells username and email collisions apart.
    fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        let is_unique_violation = err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint");

        if is_unique_violation {
            if err_str.contains("username") {
                return UserRepositoryError::DuplicateUsername;
            }
            if err_str.contains("email") {
                return UserRepositoryError::DuplicateEmail;
            }
        }

        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_account(&self, data: NewAccount) -> Result<UserRecord, UserRepositoryError> {
        let user_id = Uuid::new_v4();
        let active_user = UserActiveModel {
            id: Set(user_id),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            phone_number: NotSet,
            profile_picture: NotSet,
            is_active: Set(false),
            password_reset_jti: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(inserted.to_user_record())
    }

    async fn assign_role(&self, user_id: UserId, role: Role) -> Result<(), UserRepositoryError> {
        let active = UserRoleActiveModel {
            user_id: Set(user_id.into_inner()),
            role: Set(role.as_str().to_string()),
            assigned_at: NotSet,
        };

        match active.insert(&*self.db).await {
            Ok(_) => Ok(()),
            Err(e) => {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("23505")
                    || err_str.contains("duplicate key")
                    || err_str.contains("unique constraint")
                {
                    // Role already held; assigning again is a no-op.
                    return Ok(());
                }
                if err_str.contains("23503") || err_str.contains("foreign key") {
                    return Err(UserRepositoryError::UserNotFound);
                }
                Err(UserRepositoryError::DatabaseError(e.to_string()))
            }
        }
    }

    async fn activate(&self, user_id: UserId) -> Result<ActivationOutcome, UserRepositoryError> {
        let user = self.find_user(user_id).await?;

        if user.is_active {
            return Ok(ActivationOutcome::AlreadyActive);
        }

        let mut active_user: UserActiveModel = user.into();
        active_user.is_active = Set(true);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(ActivationOutcome::Activated)
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = self.find_user(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(new_password_hash);
        // A password change consumes any outstanding reset link.
        active_user.password_reset_jti = Set(None);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn set_password_reset_marker(
        &self,
        user_id: UserId,
        jti: String,
    ) -> Result<(), UserRepositoryError> {
        let user = self.find_user(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_reset_jti = Set(Some(jti));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<UserRecord, UserRepositoryError> {
        let user = self.find_user(user_id).await?;

        let mut active_user: UserActiveModel = user.into();

        if let Some(first_name) = changes.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active_user.last_name = Set(last_name);
        }
        if let Some(phone_number) = changes.phone_number {
            active_user.phone_number = Set(Some(phone_number));
        }
        if let Some(profile_picture) = changes.profile_picture {
            active_user.profile_picture = Set(profile_picture);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_user_record())
    }
}
