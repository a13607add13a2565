use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::credential_fingerprint;
use crate::auth::application::ports::outgoing::{
    ActivationOutcome, TokenProvider, TokenType, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ActivateAccountInput {
    /// User id from the link path, claimed by the caller.
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ActivateAccountError {
    /// Deliberately covers every way a link can be wrong: bad signature,
    /// expiry, type mismatch, uid mismatch, stale fingerprint, unknown
    /// user. The caller gets one answer for all of them.
    #[error("Activation link is invalid")]
    InvalidLink,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IActivateAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        input: ActivateAccountInput,
    ) -> Result<ActivationOutcome, ActivateAccountError>;
}

#[derive(Clone)]
pub struct ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IActivateAccountUseCase for ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: ActivateAccountInput,
    ) -> Result<ActivationOutcome, ActivateAccountError> {
        let claims = self
            .token_provider
            .validate(&input.token, TokenType::Activation)
            .map_err(|_| ActivateAccountError::InvalidLink)?;

        // The token must have been minted for exactly the uid in the path.
        if claims.sub != input.user_id {
            return Err(ActivateAccountError::InvalidLink);
        }

        let credentials = self
            .query
            .credentials_by_id(input.user_id.into())
            .await
            .map_err(|e| ActivateAccountError::QueryError(e.to_string()))?
            .ok_or(ActivateAccountError::InvalidLink)?;

        // Credential-bound: a password change since the mail was sent
        // invalidates the link.
        let expected = credential_fingerprint(&credentials.password_hash);
        if claims.cred_fp.as_deref() != Some(expected.as_str()) {
            return Err(ActivateAccountError::InvalidLink);
        }

        self.repository
            .activate(input.user_id.into())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ActivateAccountError::InvalidLink,
                other => ActivateAccountError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::domain::role::Role;
    use crate::auth::application::ports::outgoing::user_query::UserQueryError;
    use crate::auth::application::ports::outgoing::user_repository::{
        NewAccount, ProfileChanges, UserRecord,
    };
    use crate::auth::application::ports::outgoing::{
        CredentialRecord, TokenClaims, TokenError, TokenPair,
    };

    struct StubQuery {
        credentials: Option<CredentialRecord>,
    }

    #[async_trait]
    impl UserQuery for StubQuery {
        async fn credentials_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<CredentialRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn credentials_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<CredentialRecord>, UserQueryError> {
            unimplemented!()
        }

        async fn credentials_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<CredentialRecord>, UserQueryError> {
            Ok(self.credentials.clone())
        }

        async fn profile_by_id(
            &self,
            _user_id: UserId,
        ) -> Result<Option<crate::auth::application::ports::outgoing::ProfileRecord>, UserQueryError>
        {
            unimplemented!()
        }

        async fn list_profiles(
            &self,
            _role: Option<Role>,
        ) -> Result<Vec<crate::auth::application::ports::outgoing::ProfileRecord>, UserQueryError>
        {
            unimplemented!()
        }

        async fn count_users(&self) -> Result<u64, UserQueryError> {
            unimplemented!()
        }
    }

    struct RecordingRepository {
        outcome: ActivationOutcome,
        activated: Arc<Mutex<Vec<Uuid>>>,
    }

    #[async_trait]
    impl UserRepository for RecordingRepository {
        async fn create_account(
            &self,
            _data: NewAccount,
        ) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
        }

        async fn assign_role(
            &self,
            _user_id: UserId,
            _role: Role,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn activate(
            &self,
            user_id: UserId,
        ) -> Result<ActivationOutcome, UserRepositoryError> {
            self.activated.lock().unwrap().push(user_id.into_inner());
            Ok(self.outcome)
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

    /// Accepts one fixed token string and returns canned claims for it.
    struct StubTokenProvider {
        expected_token: String,
        claims: Result<TokenClaims, TokenError>,
    }

    impl TokenProvider for StubTokenProvider {
        fn issue_pair(
            &self,
            _user_id: Uuid,
            _roles: &[Role],
        ) -> Result<TokenPair, TokenError> {
            unimplemented!()
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

        fn validate(&self, token: &str, _expected: TokenType) -> Result<TokenClaims, TokenError> {
            if token == self.expected_token {
                self.claims.clone()
            } else {
                Err(TokenError::InvalidSignature)
            }
        }
    }

    fn activation_claims(user_id: Uuid, fingerprint: &str) -> TokenClaims {
        TokenClaims {
            sub: user_id,
            exp: 0,
            iat: 0,
            nbf: 0,
            token_type: "activation".to_string(),
            roles: Vec::new(),
            jti: None,
            cred_fp: Some(fingerprint.to_string()),
        }
    }

    fn credentials(user_id: Uuid, is_active: bool) -> CredentialRecord {
        CredentialRecord {
            id: user_id,
            username: "pending_user".to_string(),
            email: "pending@example.com".to_string(),
            password_hash: "$argon2id$stored".to_string(),
            is_active,
            password_reset_jti: None,
            roles: vec![Role::Participant],
        }
    }

    #[tokio::test]
    async fn activates_inactive_account() {
        let user_id = Uuid::new_v4();
        let fp = credential_fingerprint("$argon2id$stored");
        let activated = Arc::new(Mutex::new(Vec::new()));

        let use_case = ActivateAccountUseCase::new(
            StubQuery {
                credentials: Some(credentials(user_id, false)),
            },
            RecordingRepository {
                outcome: ActivationOutcome::Activated,
                activated: Arc::clone(&activated),
            },
            Arc::new(StubTokenProvider {
                expected_token: "good-token".to_string(),
                claims: Ok(activation_claims(user_id, &fp)),
            }),
        );

        let outcome = use_case
            .execute(ActivateAccountInput {
                user_id,
                token: "good-token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, ActivationOutcome::Activated);
        assert_eq!(*activated.lock().unwrap(), vec![user_id]);
    }

    #[tokio::test]
    async fn already_active_account_is_reported_not_failed() {
        let user_id = Uuid::new_v4();
        let fp = credential_fingerprint("$argon2id$stored");

        let use_case = ActivateAccountUseCase::new(
            StubQuery {
                credentials: Some(credentials(user_id, true)),
            },
            RecordingRepository {
                outcome: ActivationOutcome::AlreadyActive,
                activated: Arc::new(Mutex::new(Vec::new())),
            },
            Arc::new(StubTokenProvider {
                expected_token: "good-token".to_string(),
                claims: Ok(activation_claims(user_id, &fp)),
            }),
        );

        let outcome = use_case
            .execute(ActivateAccountInput {
                user_id,
                token: "good-token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, ActivationOutcome::AlreadyActive);
    }

    #[tokio::test]
    async fn token_for_another_user_is_rejected() {
        let token_owner = Uuid::new_v4();
        let other_user = Uuid::new_v4();
        let fp = credential_fingerprint("$argon2id$stored");
        let activated = Arc::new(Mutex::new(Vec::new()));

        let use_case = ActivateAccountUseCase::new(
            StubQuery {
                credentials: Some(credentials(other_user, false)),
            },
            RecordingRepository {
                outcome: ActivationOutcome::Activated,
                activated: Arc::clone(&activated),
            },
            Arc::new(StubTokenProvider {
                expected_token: "good-token".to_string(),
                claims: Ok(activation_claims(token_owner, &fp)),
            }),
        );

        let err = use_case
            .execute(ActivateAccountInput {
                user_id: other_user,
                token: "good-token".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ActivateAccountError::InvalidLink));
        assert!(activated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stale_fingerprint_is_rejected() {
        // Password changed after the mail went out.
        let user_id = Uuid::new_v4();
        let old_fp = credential_fingerprint("$argon2id$before-change");

        let use_case = ActivateAccountUseCase::new(
            StubQuery {
                credentials: Some(credentials(user_id, false)),
            },
            RecordingRepository {
                outcome: ActivationOutcome::Activated,
                activated: Arc::new(Mutex::new(Vec::new())),
            },
            Arc::new(StubTokenProvider {
                expected_token: "good-token".to_string(),
                claims: Ok(activation_claims(user_id, &old_fp)),
            }),
        );

        let err = use_case
            .execute(ActivateAccountInput {
                user_id,
                token: "good-token".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ActivateAccountError::InvalidLink));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let user_id = Uuid::new_v4();

        let use_case = ActivateAccountUseCase::new(
            StubQuery {
                credentials: Some(credentials(user_id, false)),
            },
            RecordingRepository {
                outcome: ActivationOutcome::Activated,
                activated: Arc::new(Mutex::new(Vec::new())),
            },
            Arc::new(StubTokenProvider {
                expected_token: "good-token".to_string(),
                claims: Err(TokenError::MalformedToken),
            }),
        );

        let err = use_case
            .execute(ActivateAccountInput {
                user_id,
                token: "???".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ActivateAccountError::InvalidLink));
    }

    #[tokio::test]
    async fn unknown_user_is_rejected_as_invalid_link() {
        let user_id = Uuid::new_v4();
        let fp = credential_fingerprint("$argon2id$stored");

        let use_case = ActivateAccountUseCase::new(
            StubQuery { credentials: None },
            RecordingRepository {
                outcome: ActivationOutcome::Activated,
                activated: Arc::new(Mutex::new(Vec::new())),
            },
            Arc::new(StubTokenProvider {
                expected_token: "good-token".to_string(),
                claims: Ok(activation_claims(user_id, &fp)),
            }),
        );

        let err = use_case
            .execute(ActivateAccountInput {
                user_id,
                token: "good-token".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ActivateAccountError::InvalidLink));
    }
}
