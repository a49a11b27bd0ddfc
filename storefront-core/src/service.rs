use tracing::{debug, info, warn};
use crate::pii::MaskedEmail;
use crate::repository::UserStore;
use crate::user::NewUser;
use crate::{CoreError, CoreResult};

/// Validates user input and delegates to the injected store.
///
/// Holds no state beyond the store. Every rejection happens before the store
/// is touched, so invalid input never produces a write.
pub struct UserService<S> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up a user; not-found handling belongs to the store.
    pub async fn get_user(&self, user_id: &str) -> CoreResult<Option<S::Record>> {
        if user_id.is_empty() {
            warn!("Rejected user lookup: empty user_id");
            return Err(CoreError::InvalidArgument("user_id required".to_string()));
        }

        debug!(user_id, "Looking up user");
        let record = self.store.find(user_id).await?;
        Ok(record)
    }

    pub async fn create_user(&self, name: &str, email: &str) -> CoreResult<S::Inserted> {
        let user = NewUser::new(name, email).inspect_err(|e| {
            warn!(email = %MaskedEmail(email), "Rejected user creation: {}", e);
        })?;

        debug!(email = %MaskedEmail(email), "Inserting user");
        let inserted = self.store.insert(user).await?;
        info!(email = %MaskedEmail(email), "User created");
        Ok(inserted)
    }
}
