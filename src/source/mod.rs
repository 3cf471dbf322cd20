pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::user::User;

/// Where the user list comes from. Could be the REST API or a test fixture.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// Short human-readable location, shown in the banner.
    fn describe(&self) -> String;
}
