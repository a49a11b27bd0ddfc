use serde::Serialize;
use crate::{CoreError, CoreResult};

/// A user record ready for insertion. Only constructible from valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Checks presence first, then the email shape.
    pub fn new(name: &str, email: &str) -> CoreResult<Self> {
        if name.is_empty() || email.is_empty() {
            return Err(CoreError::InvalidArgument("name and email required".to_string()));
        }
        if !email.contains('@') {
            return Err(CoreError::InvalidArgument("invalid email".to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: CoreError) -> String {
        match err {
            CoreError::InvalidArgument(msg) => msg,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_accepts_valid_input() {
        let user = NewUser::new("Alice", "alice@example.com").unwrap();
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@example.com");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(message(NewUser::new("", "alice@example.com").unwrap_err()), "name and email required");
        assert_eq!(message(NewUser::new("Alice", "").unwrap_err()), "name and email required");
        assert_eq!(message(NewUser::new("", "").unwrap_err()), "name and email required");
    }

    #[test]
    fn test_presence_checked_before_shape() {
        // Empty name with a malformed email reports the presence failure
        assert_eq!(message(NewUser::new("", "no-at-sign").unwrap_err()), "name and email required");
    }

    #[test]
    fn test_email_without_at_sign() {
        assert_eq!(message(NewUser::new("Alice", "alice.example.com").unwrap_err()), "invalid email");
    }

    #[test]
    fn test_serializes_to_name_and_email_only() {
        let user = NewUser::new("Bob", "bob@example.com").unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "Bob", "email": "bob@example.com" }));
    }
}
