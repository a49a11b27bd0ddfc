use async_trait::async_trait;
use crate::user::NewUser;

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Storage collaborator behind [`crate::UserService`].
///
/// What `find` yields for an unknown id, and what `insert` hands back, is
/// owned entirely by the implementation. The service passes both through.
#[async_trait]
pub trait UserStore: Send + Sync {
    type Record: Send;
    type Inserted: Send;

    async fn find(&self, id: &str) -> Result<Option<Self::Record>, StoreError>;

    async fn insert(&self, user: NewUser) -> Result<Self::Inserted, StoreError>;
}
