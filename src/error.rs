use async_graphql::ErrorExtensions;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DuplicateEmail(String),
    AuthorNotFound(String),
    PostNotEligible(String),
    Storage(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateEmail(email) => {
                write!(f, "a user with email {} already exists", email)
            }
            AppError::AuthorNotFound(id) => write!(f, "no user with id {} exists", id),
            AppError::PostNotEligible(id) => {
                write!(f, "post {} does not exist or is not published", id)
            }
            AppError::Storage(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            AppError::AuthorNotFound(_) => "AUTHOR_NOT_FOUND",
            AppError::PostNotEligible(_) => "POST_NOT_ELIGIBLE",
            AppError::Storage(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            AppError::Storage(_) => 500,
            _ => 400,
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            AppError::Storage(err) => {
                tracing::error!("storage error: {:#}", err);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        async_graphql::Error::new(message).extend_with(|_, e| {
            e.set("code", self.code());
            e.set("status", self.status());
        })
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;
