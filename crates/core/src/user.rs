//! The user entity and its operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::NpmClient;
use crate::endpoints::Endpoints;
use crate::extract::{self, Connection, UserSnippet};
use crate::package::Package;
use crate::parse::Document;
use crate::Result;

/// An npm user, identified by username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }

    /// URL of the user's profile page.
    pub fn profile_url(&self, endpoints: &Endpoints) -> String {
        format!("{}{}", endpoints.user, self.username)
    }

    /// Fetches the profile header: username, display name and avatar.
    pub async fn snippet(&self, client: &NpmClient) -> Result<UserSnippet> {
        self.scrape(client, extract::user::snippet).await
    }

    /// Fetches the accounts linked from the profile.
    pub async fn connections(&self, client: &NpmClient) -> Result<Vec<Connection>> {
        self.scrape(client, extract::user::connections).await
    }

    /// Fetches the packages the user publishes, each as an unpinned [`Package`].
    pub async fn packages(&self, client: &NpmClient) -> Result<Vec<Package>> {
        self.scrape(client, extract::user::packages).await
    }

    async fn scrape<T>(&self, client: &NpmClient, rule: impl FnOnce(&Document) -> Result<T>) -> Result<T> {
        let url = self.profile_url(client.endpoints());
        let doc = client
            .fetcher()
            .fetch_document(&url)
            .await
            .map_err(|e| e.into_invalid_user(&self.username))?;
        rule(&doc).map_err(|e| e.into_invalid_user(&self.username))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url() {
        let user = User::new("mahdios");
        assert_eq!(user.profile_url(&Endpoints::default()), "https://www.npmjs.com/~mahdios");
        assert_eq!(user.to_string(), "mahdios");
    }
}
