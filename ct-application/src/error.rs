use ct_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use thiserror::Error;

pub use ct_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(UsecaseError::Repo(err))
    }
}

impl From<ct_core::authorization::Denial> for AppError {
    fn from(denial: ct_core::authorization::Denial) -> AppError {
        AppError::Business(denial.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub const fn usecase_error(&self) -> Option<&UsecaseError> {
        match self {
            Self::Business(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self.usecase_error(), Some(UsecaseError::Forbidden(_)))
    }

    pub fn is_not_found(&self) -> bool {
        self.usecase_error().is_some_and(UsecaseError::is_not_found)
    }

    pub fn is_validation(&self) -> bool {
        self.usecase_error().is_some_and(UsecaseError::is_validation)
    }
}
