use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::auth::application::domain::role::Role;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

//
// ──────────────────────────────────────────────────────────
// Login Request
// ──────────────────────────────────────────────────────────
//

/// Validated login request. `username` also accepts an email address; the
/// use case decides which lookup to run.
#[derive(Debug, Clone, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ada_l")]
    username: String,
    #[schema(example = "correct-horse-9")]
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        // Emails are stored lowercased; usernames are case-sensitive.
        let username = if username.contains('@') {
            username.to_lowercase()
        } else {
            username.to_string()
        };

        Ok(Self {
            username,
            password: password.trim().to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Validates while parsing so handlers never see an invalid request.
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors / Response
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Password was correct but the account never followed its activation
    /// link. Only reachable after a successful verify.
    #[error("Account is not activated")]
    AccountNotActivated,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub primary_role: Role,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let lookup = if request.username().contains('@') {
            self.query.credentials_by_email(request.username()).await
        } else {
            self.query.credentials_by_username(request.username()).await
        };

        let credentials = lookup
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &credentials.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // Checked after the password so an unauthenticated caller cannot
        // probe which accounts are pending activation.
        if !credentials.is_active {
            return Err(LoginError::AccountNotActivated);
        }

        let pair = self
            .token_provider
            .issue_pair(credentials.id, &credentials.roles)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let primary_role = Role::primary(&credentials.roles);

        Ok(LoginUserResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: pair.expires_in,
            user: UserInfo {
                id: credentials.id,
                username: credentials.username,
                email: credentials.email,
                roles: credentials.roles,
                primary_role,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::user_query::UserQueryError;
    use crate::auth::application::ports::outgoing::{
        CredentialRecord, HashError, ProfileRecord, TokenClaims, TokenError, TokenPair, TokenType,
    };

    // ==================== LoginRequest ====================

    #[test]
    fn request_accepts_plain_username() {
        let request = LoginRequest::new("ada_l".to_string(), "password123".to_string()).unwrap();
        assert_eq!(request.username(), "ada_l");
        assert_eq!(request.password(), "password123");
    }

    #[test]
    fn request_lowercases_email_identifiers_only() {
        let by_email =
            LoginRequest::new("  Ada@Example.COM  ".to_string(), "pw123456".to_string()).unwrap();
        assert_eq!(by_email.username(), "ada@example.com");

        let by_name = LoginRequest::new("Ada_L".to_string(), "pw123456".to_string()).unwrap();
        assert_eq!(by_name.username(), "Ada_L");
    }

    #[test]
    fn request_rejects_empty_fields() {
        assert!(matches!(
            LoginRequest::new("   ".to_string(), "pw".to_string()),
            Err(LoginRequestError::EmptyUsername)
        ));
        assert!(matches!(
            LoginRequest::new("ada_l".to_string(), "  ".to_string()),
            Err(LoginRequestError::EmptyPassword)
        ));
    }

    #[test]
    fn request_deserializes_from_json() {
        let request: LoginRequest = serde_json::from_value(json!({
            "username": "ada_l",
            "password": "password123"
        }))
        .unwrap();
        assert_eq!(request.username(), "ada_l");

        let invalid: Result<LoginRequest, _> = serde_json::from_value(json!({
            "username": "",
            "password": "password123"
        }));
        assert!(invalid.is_err());
    }

    // ==================== LoginUserUseCase ====================

    #[derive(Default)]
    struct MockUserQuery {
        by_username: Option<CredentialRecord>,
        by_email: Option<CredentialRecord>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn credentials_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<CredentialRecord>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("connection lost".to_string()));
            }
            Ok(self.by_username.clone())
        }

        async fn credentials_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<CredentialRecord>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("connection lost".to_string()));
            }
            Ok(self.by_email.clone())
        }

        async fn credentials_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<CredentialRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn profile_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<ProfileRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn list_profiles(
            &self,
            _role: Option<Role>,
        ) -> Result<Vec<ProfileRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn count_users(&self) -> Result<u64, UserQueryError> {
            unimplemented!()
        }
    }

    struct MockHasher {
        verify_result: Result<bool, HashError>,
    }

    #[async_trait]
    impl PasswordHasher for MockHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            self.verify_result.clone()
        }
    }

    struct StubTokenProvider;

    impl TokenProvider for StubTokenProvider {
        fn issue_pair(&self, _user_id: Uuid, _roles: &[Role]) -> Result<TokenPair, TokenError> {
            Ok(TokenPair {
                access_token: "access-jwt".to_string(),
                refresh_token: "refresh-jwt".to_string(),
                expires_in: 900,
            })
        }

        fn issue_activation_token(
            &self,
            _user_id: Uuid,
            _credential_fingerprint: &str,
        ) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn issue_password_reset_token(
            &self,
            _user_id: Uuid,
            _jti: &str,
        ) -> Result<String, TokenError> {
            unimplemented!()
        }

        fn validate(&self, _token: &str, _expected: TokenType) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }
    }

    fn active_user(roles: Vec<Role>) -> CredentialRecord {
        CredentialRecord {
            id: Uuid::new_v4(),
            username: "ada_l".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$stored".to_string(),
            is_active: true,
            password_reset_jti: None,
            roles,
        }
    }

    fn request(username: &str) -> LoginRequest {
        LoginRequest::new(username.to_string(), "password123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn login_by_username_succeeds() {
        let user = active_user(vec![Role::Organizer, Role::Participant]);
        let expected_id = user.id;

        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                by_username: Some(user),
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Ok(true),
            }),
            Arc::new(StubTokenProvider),
        );

        let response = use_case.execute(request("ada_l")).await.unwrap();

        assert_eq!(response.access_token, "access-jwt");
        assert_eq!(response.refresh_token, "refresh-jwt");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 900);
        assert_eq!(response.user.id, expected_id);
        assert_eq!(response.user.primary_role, Role::Organizer);
    }

    #[tokio::test]
    async fn identifier_with_at_sign_uses_email_lookup() {
        // Only the email side of the mock is populated, so a username
        // lookup would miss.
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                by_email: Some(active_user(vec![Role::Participant])),
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Ok(true),
            }),
            Arc::new(StubTokenProvider),
        );

        let response = use_case.execute(request("ada@example.com")).await.unwrap();
        assert_eq!(response.user.username, "ada_l");
    }

    #[tokio::test]
    async fn unknown_user_maps_to_invalid_credentials() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery::default(),
            Arc::new(MockHasher {
                verify_result: Ok(true),
            }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request("ghost")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_maps_to_invalid_credentials() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                by_username: Some(active_user(vec![Role::Participant])),
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Ok(false),
            }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request("ada_l")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn inactive_account_with_correct_password_is_told_to_activate() {
        let mut user = active_user(vec![Role::Participant]);
        user.is_active = false;

        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                by_username: Some(user),
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Ok(true),
            }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request("ada_l")).await;
        assert!(matches!(result, Err(LoginError::AccountNotActivated)));
    }

    #[tokio::test]
    async fn inactive_account_with_wrong_password_stays_invalid_credentials() {
        // Activation state must not leak to a caller who failed the
        // password check.
        let mut user = active_user(vec![Role::Participant]);
        user.is_active = false;

        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                by_username: Some(user),
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Ok(false),
            }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request("ada_l")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn query_failure_surfaces_as_query_error() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                should_fail: true,
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Ok(true),
            }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request("ada_l")).await;
        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }

    #[tokio::test]
    async fn hasher_failure_surfaces_as_verification_error() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                by_username: Some(active_user(vec![Role::Participant])),
                ..Default::default()
            },
            Arc::new(MockHasher {
                verify_result: Err(HashError::VerifyFailed),
            }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request("ada_l")).await;
        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }
}
