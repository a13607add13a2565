use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    validate_password_strength, validate_username,
};
use crate::auth::application::domain::role::DEFAULT_ROLE;
use crate::auth::application::ports::outgoing::token_provider::credential_fingerprint;
use crate::auth::application::ports::outgoing::{
    NewAccount, PasswordHasher, UserRepository, UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Input / Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateAccountOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    /// Hash fingerprint the activation link is bound to. Never the hash
    /// itself.
    pub credential_fingerprint: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAccountError {
    #[error("Username must be 3-32 characters of letters, digits or underscores")]
    InvalidUsername,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters and mix letters with digits")]
    WeakPassword,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ICreateAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        input: CreateAccountInput,
    ) -> Result<CreateAccountOutput, CreateAccountError>;
}

/// Creates the inactive account row and grants the default role. Sending
/// the activation email is the registration orchestrator's job, not ours.
#[derive(Clone)]
pub struct CreateAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> ICreateAccountUseCase for CreateAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: CreateAccountInput,
    ) -> Result<CreateAccountOutput, CreateAccountError> {
        let username = input.username.trim().to_string();
        let email = input.email.trim().to_lowercase();

        validate_username(&username).map_err(|_| CreateAccountError::InvalidUsername)?;

        if !EmailAddress::is_valid(&email) {
            return Err(CreateAccountError::InvalidEmail);
        }

        validate_password_strength(&input.password)
            .map_err(|_| CreateAccountError::WeakPassword)?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateAccountError::HashingFailed(e.to_string()))?;

        let fingerprint = credential_fingerprint(&password_hash);

        let record = self
            .repository
            .create_account(NewAccount {
                username,
                email,
                password_hash,
                first_name: input.first_name.trim().to_string(),
                last_name: input.last_name.trim().to_string(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::DuplicateUsername => CreateAccountError::UsernameTaken,
                UserRepositoryError::DuplicateEmail => CreateAccountError::EmailTaken,
                other => CreateAccountError::RepositoryError(other.to_string()),
            })?;

        self.repository
            .assign_role(record.id.into(), DEFAULT_ROLE)
            .await
            .map_err(|e| CreateAccountError::RepositoryError(e.to_string()))?;

        Ok(CreateAccountOutput {
            user_id: record.id,
            username: record.username,
            email: record.email,
            credential_fingerprint: fingerprint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::Utc;

    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::domain::role::Role;
    use crate::auth::application::ports::outgoing::user_repository::{
        ActivationOutcome, ProfileChanges, UserRecord,
    };
    use crate::auth::application::ports::outgoing::HashError;

    struct MockUserRepository {
        create_result: Result<UserRecord, UserRepositoryError>,
        assigned_roles: Arc<Mutex<Vec<Role>>>,
    }

    impl MockUserRepository {
        fn succeeding() -> Self {
            Self {
                create_result: Ok(sample_record()),
                assigned_roles: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing_with(err: UserRepositoryError) -> Self {
            Self {
                create_result: Err(err),
                assigned_roles: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    fn sample_record() -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            username: "new_member".to_string(),
            email: "member@example.com".to_string(),
            first_name: "New".to_string(),
            last_name: "Member".to_string(),
            phone_number: None,
            profile_picture: "profile_pics/default.jpg".to_string(),
            is_active: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_account(
            &self,
            _data: NewAccount,
        ) -> Result<UserRecord, UserRepositoryError> {
            self.create_result.clone()
        }

        async fn assign_role(
            &self,
            _user_id: UserId,
            role: Role,
        ) -> Result<(), UserRepositoryError> {
            self.assigned_roles.lock().unwrap().push(role);
            Ok(())
        }

        async fn activate(
            &self,
            _user_id: UserId,
        ) -> Result<ActivationOutcome, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_password(
            &self,
            _user_id: UserId,
            _new_password_hash: String,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn set_password_reset_marker(
            &self,
            _user_id: UserId,
            _jti: String,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _user_id: UserId,
            _changes: ProfileChanges,
        ) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
        }
    }

    struct MockHasher {
        calls: Arc<Mutex<u32>>,
    }

    impl MockHasher {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(0)),
            }
        }
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            *self.calls.lock().unwrap() += 1;
            Ok("$argon2id$mockhash".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!()
        }
    }

    fn valid_input() -> CreateAccountInput {
        CreateAccountInput {
            username: "new_member".to_string(),
            email: "Member@Example.com".to_string(),
            password: "workshop2025".to_string(),
            first_name: "New".to_string(),
            last_name: "Member".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_account_and_grants_participant_role() {
        let repo = MockUserRepository::succeeding();
        let roles = Arc::clone(&repo.assigned_roles);
        let use_case = CreateAccountUseCase::new(repo, Arc::new(MockHasher::new()));

        let output = use_case.execute(valid_input()).await.unwrap();

        assert_eq!(output.username, "new_member");
        assert_eq!(
            output.credential_fingerprint,
            credential_fingerprint("$argon2id$mockhash")
        );
        assert_eq!(*roles.lock().unwrap(), vec![Role::Participant]);
    }

    #[tokio::test]
    async fn rejects_weak_password_before_hashing() {
        let hasher = Arc::new(MockHasher::new());
        let calls = Arc::clone(&hasher.calls);
        let use_case = CreateAccountUseCase::new(MockUserRepository::succeeding(), hasher);

        let mut input = valid_input();
        input.password = "allletters".to_string();
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(err, CreateAccountError::WeakPassword));
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_invalid_username() {
        let use_case =
            CreateAccountUseCase::new(MockUserRepository::succeeding(), Arc::new(MockHasher::new()));

        let mut input = valid_input();
        input.username = "no spaces allowed".to_string();
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(err, CreateAccountError::InvalidUsername));
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let use_case =
            CreateAccountUseCase::new(MockUserRepository::succeeding(), Arc::new(MockHasher::new()));

        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(err, CreateAccountError::InvalidEmail));
    }

    #[tokio::test]
    async fn maps_duplicate_username_to_taken() {
        let repo = MockUserRepository::failing_with(UserRepositoryError::DuplicateUsername);
        let use_case = CreateAccountUseCase::new(repo, Arc::new(MockHasher::new()));

        let err = use_case.execute(valid_input()).await.unwrap_err();
        assert!(matches!(err, CreateAccountError::UsernameTaken));
    }

    #[tokio::test]
    async fn maps_duplicate_email_to_taken() {
        let repo = MockUserRepository::failing_with(UserRepositoryError::DuplicateEmail);
        let use_case = CreateAccountUseCase::new(repo, Arc::new(MockHasher::new()));

        let err = use_case.execute(valid_input()).await.unwrap_err();
        assert!(matches!(err, CreateAccountError::EmailTaken));
    }
}
