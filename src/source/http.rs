use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use super::UserSource;
use crate::user::User;

/// Fetches users from a jsonplaceholder-style REST API (`GET {base}/users`).
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[async_trait]
impl UserSource for HttpSource {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let url = self.users_url();
        tracing::debug!(%url, "fetching users");

        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            tracing::warn!(status = %resp.status(), %url, "user fetch rejected");
            bail!("Failed to fetch users");
        }

        let body = resp.text().await?;
        let users: Vec<User> =
            serde_json::from_str(&body).context("unexpected response from user endpoint")?;
        Ok(users)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
