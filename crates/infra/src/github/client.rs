//! GitHub REST client implementing the lookup API port.
//!
//! Two endpoints are consumed: `GET /users/{login}` and the repository list
//! announced by the profile document. Responses are mapped onto a closed
//! outcome set so callers never see raw status codes.

use std::time::Duration;

use async_trait::async_trait;
use hubcard_core::ProfileApi;
use hubcard_domain::{GitHubConfig, HubcardError, RepositorySummary, Result, UserSummary};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, Response, StatusCode};
use tracing::{debug, instrument};

use super::types::{GitHubRepo, GitHubUser};
use crate::errors::InfraError;
use crate::http::HttpClient;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// HTTP-backed implementation of [`ProfileApi`].
pub struct GitHubClient {
    http: HttpClient,
    api_base: String,
}

impl GitHubClient {
    /// Create a client from configuration.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { http, api_base: config.api_base.trim_end_matches('/').to_string() })
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self.http.send(self.http.request(Method::GET, url)).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(map_status_error(status, url))
    }
}

#[async_trait]
impl ProfileApi for GitHubClient {
    #[instrument(skip(self), fields(login = %login))]
    async fn fetch_profile(&self, login: &str) -> Result<UserSummary> {
        let url = format!("{}/users/{}", self.api_base, login);
        debug!(url = %url, "fetching profile document");

        let response = self.get(&url).await?;
        let user: GitHubUser = response.json().await.map_err(|err| {
            let infra: InfraError = err.into();
            HubcardError::from(infra)
        })?;

        Ok(user.into())
    }

    #[instrument(skip(self, repos_url), fields(login = %login))]
    async fn fetch_repositories(
        &self,
        login: &str,
        repos_url: Option<&str>,
    ) -> Result<Vec<RepositorySummary>> {
        let url = match repos_url {
            Some(url) => url.to_string(),
            None => format!("{}/users/{}/repos", self.api_base, login),
        };
        debug!(url = %url, "fetching repository list");

        let response = self.get(&url).await?;
        let repos: Vec<GitHubRepo> = response.json().await.map_err(|err| {
            let infra: InfraError = err.into();
            HubcardError::from(infra)
        })?;

        Ok(repos.into_iter().map(|repo| repo.into_summary(login)).collect())
    }
}

/// Closed mapping from HTTP status to lookup outcome.
fn map_status_error(status: StatusCode, url: &str) -> HubcardError {
    let message = format!("{} returned status {}", url, status);

    if status == StatusCode::NOT_FOUND {
        HubcardError::NotFound(message)
    } else if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        HubcardError::RateLimited(message)
    } else {
        HubcardError::Network(message)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> GitHubClient {
        let config = GitHubConfig { api_base: server.uri(), ..GitHubConfig::default() };
        GitHubClient::new(&config).expect("github client")
    }

    #[tokio::test]
    async fn fetches_profile_with_github_accept_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .and(header("Accept", GITHUB_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": "octocat",
                "name": "Mona",
                "followers": 10,
                "repos_url": "https://api.github.com/users/octocat/repos"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let summary = client.fetch_profile("octocat").await.expect("profile");

        assert_eq!(summary.login.as_deref(), Some("octocat"));
        assert_eq!(summary.name.as_deref(), Some("Mona"));
        assert_eq!(summary.followers, Some(10));
    }

    #[tokio::test]
    async fn missing_user_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/nobody"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_profile("nobody").await;

        assert!(matches!(result, Err(HubcardError::NotFound(_))));
    }

    #[tokio::test]
    async fn forbidden_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_profile("octocat").await;

        assert!(matches!(result, Err(HubcardError::RateLimited(_))));
    }

    #[tokio::test]
    async fn server_error_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_profile("octocat").await;

        assert!(matches!(result, Err(HubcardError::Network(_))));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_profile("octocat").await;

        assert!(matches!(result, Err(HubcardError::Network(_))));
    }

    #[tokio::test]
    async fn repositories_use_the_announced_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/custom/repo-list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "hello", "html_url": "https://x/hello", "private": false},
                {"name": "secret", "html_url": "https://x/secret", "private": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let repos_url = format!("{}/custom/repo-list", server.uri());
        let repos =
            client.fetch_repositories("octocat", Some(&repos_url)).await.expect("repositories");

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "hello");
        assert!(repos[1].private);
    }

    #[tokio::test]
    async fn repositories_fall_back_to_derived_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let repos = client.fetch_repositories("octocat", None).await.expect("repositories");

        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_network_error() {
        let config = GitHubConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            ..GitHubConfig::default()
        };
        let client = GitHubClient::new(&config).expect("github client");

        let result = client.fetch_profile("octocat").await;
        assert!(matches!(result, Err(HubcardError::Network(_))));
    }
}
