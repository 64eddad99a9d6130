//! Typed REST clients for the remote services bugtrack talks to: the
//! GitHub and GitLab issue surfaces and the Imgur image host.

pub mod config;
pub mod error;
pub mod github;
pub mod gitlab;
pub mod imgur;
pub mod limit;
pub mod models;
pub mod rest;

pub use config::{AuthScheme, ClientConfig, GITHUB_API_BASE, GITLAB_API_BASE, IMGUR_API_BASE};
pub use error::{Result, TrackerError};
pub use github::GithubClient;
pub use gitlab::GitlabClient;
pub use imgur::ImgurClient;
pub use models::{
    GithubIssue, GithubIssueCreate, GithubLabel, GithubUser, GitlabIssue, GitlabIssueCreate,
    GitlabLabel, GitlabUpload, GitlabUser, ImgurImage,
};
pub use rest::RestClient;
