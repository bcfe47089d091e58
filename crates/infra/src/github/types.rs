//! Wire types for GitHub REST responses.
//!
//! Every field is optional or defaulted: the lookup applies its own defaults
//! downstream, so a sparse document must deserialize rather than fail.

use hubcard_domain::constants::PROFILE_WEB_BASE;
use hubcard_domain::{RepositorySummary, UserSummary};
use serde::Deserialize;

/// User document as returned by `GET /users/{login}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubUser {
    pub login: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub html_url: Option<String>,
    pub followers: Option<u32>,
    pub repos_url: Option<String>,
}

impl From<GitHubUser> for UserSummary {
    fn from(user: GitHubUser) -> Self {
        UserSummary {
            login: user.login,
            name: user.name,
            email: user.email,
            html_url: user.html_url,
            followers: user.followers,
            repos_url: user.repos_url,
        }
    }
}

/// Repository entry as returned by `GET /users/{login}/repos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub private: bool,
}

impl GitHubRepo {
    /// Project to the domain shape, deriving a web URL when the document
    /// omits one.
    pub fn into_summary(self, owner: &str) -> RepositorySummary {
        let url = self
            .html_url
            .unwrap_or_else(|| format!("{PROFILE_WEB_BASE}/{owner}/{name}", name = self.name));
        RepositorySummary { name: self.name, url, description: self.description, private: self.private }
    }
}
