//! Wire shapes for the GitLab v4 issue surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GitlabUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GitlabLabel {
    pub name: String,
}

/// Issue as returned by `GET /projects/{id}/issues`. Unlike GitHub,
/// GitLab serializes labels as plain strings here.
#[derive(Debug, Deserialize, Clone)]
pub struct GitlabIssue {
    pub iid: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub assignees: Vec<GitlabUser>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Create payload for `POST /projects/{id}/issues`. GitLab takes assignees
/// by numeric id and labels as one comma-joined string.
#[derive(Debug, Serialize)]
pub struct GitlabIssueCreate {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignee_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
}

/// Response of `POST /projects/{id}/uploads`.
#[derive(Debug, Deserialize, Clone)]
pub struct GitlabUpload {
    pub url: String,
    #[serde(default)]
    pub markdown: Option<String>,
}
