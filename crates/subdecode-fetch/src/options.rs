//! Acquisition options.

use std::time::Duration;
use subdecode_core_types::Sensitive;

use crate::user_agent::UserAgent;

/// Total request timeout when the caller does not supply one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// TCP connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings consumed by the HTTP fetcher
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: UserAgent,
    /// Proxy for every scheme; may embed credentials
    pub proxy: Option<Sensitive<String>>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: UserAgent::default(),
            proxy: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl FetchOptions {
    pub fn with_user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(Sensitive::new(proxy.into()));
        self
    }

    /// Set the total timeout; the connect timeout never exceeds it
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = self.connect_timeout.min(timeout);
        self
    }
}
