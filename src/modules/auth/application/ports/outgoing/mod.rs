pub mod password_hasher;
pub mod token_denylist;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_denylist::{TokenDenylist, TokenDenylistError};
pub use token_provider::{TokenClaims, TokenError, TokenPair, TokenProvider, TokenType};
pub use user_query::{CredentialRecord, ProfileRecord, UserQuery, UserQueryError};
pub use user_repository::{
    ActivationOutcome, NewAccount, ProfileChanges, UserRecord, UserRepository, UserRepositoryError,
};
