use std::time::Duration;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITLAB_API_BASE: &str = "https://gitlab.com/api/v4";
pub const IMGUR_API_BASE: &str = "https://api.imgur.com/3";
pub const DEFAULT_USER_AGENT: &str = "bugtrack";
pub const DEFAULT_PACE_MS: u64 = 250;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// How the credential is presented to the remote service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: token {t}` (GitHub personal access tokens).
    Token,
    /// `PRIVATE-TOKEN: {t}` (GitLab personal access tokens).
    PrivateToken,
    /// `Authorization: Client-ID {t}` (Imgur anonymous uploads).
    ClientId,
}

impl AuthScheme {
    pub fn header_name(&self) -> &'static str {
        match self {
            AuthScheme::Token | AuthScheme::ClientId => "Authorization",
            AuthScheme::PrivateToken => "PRIVATE-TOKEN",
        }
    }

    pub fn header_value(&self, token: &str) -> String {
        match self {
            AuthScheme::Token => format!("token {token}"),
            AuthScheme::PrivateToken => token.to_string(),
            AuthScheme::ClientId => format!("Client-ID {token}"),
        }
    }
}

/// Connection settings for one remote service endpoint.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub auth_scheme: AuthScheme,
    pub accept: Option<String>,
    pub user_agent: String,
    pub pace: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, auth_scheme: AuthScheme) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            auth_scheme,
            accept: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pace: Duration::from_millis(DEFAULT_PACE_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_pace(mut self, duration: Duration) -> Self {
        self.pace = duration;
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    /// Base url with exactly one trailing slash, ready for path joining.
    pub fn api_root(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}
