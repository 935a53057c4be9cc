use domain::RepositoryError;
use thiserror::Error;

use crate::password::PasswordHasherError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("username is already taken")]
    UsernameTaken,
    #[error("topic already exists")]
    TopicAlreadyExists,
    #[error("discussion already exists")]
    DiscussionAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("authentication failed")]
    Authentication,
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("password error: {0}")]
    Password(#[from] PasswordHasherError),
}
