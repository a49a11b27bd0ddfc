pub mod pii;
pub mod repository;
pub mod service;
pub mod user;

pub use repository::{StoreError, UserStore};
pub use service::UserService;
pub use user::NewUser;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller supplied input that fails validation; fix the input and retry.
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
