use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use storefront_core::{NewUser, StoreError, UserStore};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Process-local user store keyed by generated UUIDs.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, StoredUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    type Record = StoredUser;
    type Inserted = Uuid;

    /// Ids that are not UUIDs can never match, so they read as not found.
    async fn find(&self, id: &str) -> Result<Option<StoredUser>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            debug!(id, "Lookup with non-UUID id");
            return Ok(None);
        };
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<Uuid, StoreError> {
        let (name, email) = user.into_parts();
        let stored = StoredUser {
            id: Uuid::new_v4(),
            name,
            email,
            created_at: Utc::now(),
        };
        let id = stored.id;

        self.users.write().await.insert(id, stored);
        debug!(%id, "Stored user");
        Ok(id)
    }
}
