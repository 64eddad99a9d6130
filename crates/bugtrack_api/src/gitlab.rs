use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::config::{AuthScheme, ClientConfig, GITLAB_API_BASE};
use crate::error::{Result, TrackerError};
use crate::models::{GitlabIssue, GitlabIssueCreate, GitlabLabel, GitlabUpload, GitlabUser};
use crate::rest::RestClient;

/// Typed client for the GitLab v4 issue surface. The base url is
/// configurable so self-hosted instances work the same as gitlab.com.
#[derive(Clone)]
pub struct GitlabClient {
    rest: RestClient,
}

impl GitlabClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(GITLAB_API_BASE, token)
    }

    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let config = ClientConfig::new(base_url, token, AuthScheme::PrivateToken);
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    /// Identity probe (`GET /user`).
    pub async fn current_user(&self) -> Result<GitlabUser> {
        self.rest.get("user").await
    }

    /// Lists opened issues for a project. `project` must already be
    /// percent-encoded the way GitLab expects path identifiers.
    pub async fn list_issues(
        &self,
        project: &str,
        filter_query: &[(&str, String)],
    ) -> Result<Vec<GitlabIssue>> {
        let mut query = vec![("state", "opened".to_string())];
        query.extend(filter_query.iter().map(|(k, v)| (*k, v.clone())));
        self.rest
            .get_with_query(&format!("projects/{project}/issues"), &query)
            .await
    }

    pub async fn list_members(&self, project: &str) -> Result<Vec<GitlabUser>> {
        self.rest.get(&format!("projects/{project}/members")).await
    }

    pub async fn list_labels(&self, project: &str) -> Result<Vec<GitlabLabel>> {
        self.rest.get(&format!("projects/{project}/labels")).await
    }

    /// Creates an issue; GitLab answers 201 on success.
    pub async fn create_issue(
        &self,
        project: &str,
        payload: &GitlabIssueCreate,
    ) -> Result<GitlabIssue> {
        self.rest
            .post_expect(
                &format!("projects/{project}/issues"),
                payload,
                StatusCode::CREATED,
            )
            .await
    }

    /// Uploads a file to the project, yielding the link GitLab serves it
    /// under (relative to the project web url).
    pub async fn upload_file(
        &self,
        project: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<GitlabUpload> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/png")
            .map_err(|err| TrackerError::Other(err.to_string()))?;
        let form = Form::new().part("file", part);
        self.rest
            .post_multipart(&format!("projects/{project}/uploads"), form)
            .await
    }
}
