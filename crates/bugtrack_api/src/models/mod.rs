mod github;
mod gitlab;
mod imgur;

pub use github::{GithubIssue, GithubIssueCreate, GithubLabel, GithubUser};
pub use gitlab::{GitlabIssue, GitlabIssueCreate, GitlabLabel, GitlabUpload, GitlabUser};
pub use imgur::{DataEnvelope, ImgurImage};
