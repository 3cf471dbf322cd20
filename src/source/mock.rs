use anyhow::{Result, bail};
use async_trait::async_trait;

use super::UserSource;
use crate::user::User;

/// A canned source for tests. Returns the same users (or error) every time.
pub struct MockSource {
    outcome: Result<Vec<User>, String>,
}

impl MockSource {
    pub fn users(users: Vec<User>) -> Self {
        Self { outcome: Ok(users) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl UserSource for MockSource {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        match &self.outcome {
            Ok(users) => Ok(users.clone()),
            Err(message) => bail!("{message}"),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
