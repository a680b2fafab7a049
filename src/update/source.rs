//! Where the latest version marker comes from

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Supplies the identifier of the latest published build
pub trait VersionSource {
    fn latest_version(&self) -> Result<String>;
}

#[derive(Deserialize)]
struct CommitResponse {
    #[serde(default)]
    sha: String,
}

/// Head commit of a GitHub repository branch
pub struct GitHubSource {
    client: reqwest::blocking::Client,
    repository: String,
    branch: String,
}

impl GitHubSource {
    pub fn new(repository: &str, branch: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("dockpick/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            client,
            repository: repository.to_string(),
            branch: branch.to_string(),
        }
    }

    fn url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/commits/{}",
            self.repository, self.branch
        )
    }
}

impl VersionSource for GitHubSource {
    fn latest_version(&self) -> Result<String> {
        let response: CommitResponse = self
            .client
            .get(self.url())
            .header("Accept", "application/vnd.github+json")
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.sha)
    }
}
