//! User-agent selection.
//!
//! The header values form an immutable table keyed by [`UserAgent`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserAgent {
    #[default]
    Chrome,
    Firefox,
    Edge,
    Curl,
}

const USER_AGENTS: [(UserAgent, &str, &str); 4] = [
    (
        UserAgent::Chrome,
        "chrome",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0.0.0 Safari/537.36",
    ),
    (
        UserAgent::Firefox,
        "firefox",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    ),
    (
        UserAgent::Edge,
        "edge",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Edg/120.0.0.0",
    ),
    (UserAgent::Curl, "curl", "curl/8.5.0"),
];

impl UserAgent {
    pub const ALL: [UserAgent; 4] = [
        UserAgent::Chrome,
        UserAgent::Firefox,
        UserAgent::Edge,
        UserAgent::Curl,
    ];

    fn row(&self) -> &'static (UserAgent, &'static str, &'static str) {
        // every variant has exactly one row
        &USER_AGENTS[*self as usize]
    }

    /// Selector name as accepted on the command line
    pub fn name(&self) -> &'static str {
        self.row().1
    }

    /// Value sent in the `User-Agent` header
    pub fn header_value(&self) -> &'static str {
        self.row().2
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selector outside the user-agent table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown user agent '{0}', expected one of: chrome, firefox, edge, curl")]
pub struct UnknownUserAgent(pub String);

impl FromStr for UserAgent {
    type Err = UnknownUserAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        USER_AGENTS
            .iter()
            .find(|(_, name, _)| *name == wanted)
            .map(|(agent, _, _)| *agent)
            .ok_or_else(|| UnknownUserAgent(s.to_string()))
    }
}
