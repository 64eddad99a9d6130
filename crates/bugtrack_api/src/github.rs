use reqwest::StatusCode;

use crate::config::{AuthScheme, ClientConfig, GITHUB_API_BASE};
use crate::error::Result;
use crate::models::{GithubIssue, GithubIssueCreate, GithubLabel, GithubUser};
use crate::rest::RestClient;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const SCOPES_HEADER: &str = "x-oauth-scopes";

/// Typed client for the GitHub REST v3 issue surface.
#[derive(Clone)]
pub struct GithubClient {
    rest: RestClient,
}

impl GithubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE, token)
    }

    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let config =
            ClientConfig::new(base_url, token, AuthScheme::Token).with_accept(GITHUB_ACCEPT);
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    /// Identity probe. Returns the authenticated user together with the
    /// scopes granted to the token, parsed from the `X-OAuth-Scopes` header.
    pub async fn verify_token(&self) -> Result<(GithubUser, Vec<String>)> {
        let (user, headers) = self.rest.get_with_headers::<GithubUser>("user").await?;
        let scopes = headers
            .get(SCOPES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(parse_scopes)
            .unwrap_or_default();
        Ok((user, scopes))
    }

    /// Lists open issues for `owner/repo`. Extra query pairs carry the
    /// assignee/label filter constraints.
    pub async fn list_issues(
        &self,
        repo: &str,
        filter_query: &[(&str, String)],
    ) -> Result<Vec<GithubIssue>> {
        let mut query = vec![("state", "open".to_string())];
        query.extend(filter_query.iter().map(|(k, v)| (*k, v.clone())));
        self.rest
            .get_with_query(&format!("repos/{repo}/issues"), &query)
            .await
    }

    pub async fn list_assignees(&self, repo: &str) -> Result<Vec<GithubUser>> {
        self.rest.get(&format!("repos/{repo}/assignees")).await
    }

    pub async fn list_labels(&self, repo: &str) -> Result<Vec<GithubLabel>> {
        self.rest.get(&format!("repos/{repo}/labels")).await
    }

    /// Creates an issue; GitHub answers 201 on success, anything else is a
    /// reported failure.
    pub async fn create_issue(
        &self,
        repo: &str,
        payload: &GithubIssueCreate,
    ) -> Result<GithubIssue> {
        self.rest
            .post_expect(&format!("repos/{repo}/issues"), payload, StatusCode::CREATED)
            .await
    }
}

fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|scope| scope.trim().to_string())
        .filter(|scope| !scope.is_empty())
        .collect()
}
