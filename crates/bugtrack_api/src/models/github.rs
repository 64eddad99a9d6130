//! Wire shapes for the GitHub REST v3 issue surface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GithubUser {
    pub id: i64,
    pub login: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GithubLabel {
    pub name: String,
}

/// Issue as returned by `GET /repos/{repo}/issues`.
#[derive(Debug, Deserialize, Clone)]
pub struct GithubIssue {
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub assignees: Vec<GithubUser>,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
}

/// Create payload for `POST /repos/{repo}/issues`. GitHub takes assignees
/// by login and labels as a list.
#[derive(Debug, Serialize)]
pub struct GithubIssueCreate {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}
