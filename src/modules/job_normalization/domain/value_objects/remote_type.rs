use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Work location arrangement of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteType {
    #[default]
    OnSite,
    Remote,
    Hybrid,
}

impl RemoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteType::OnSite => "on_site",
            RemoteType::Remote => "remote",
            RemoteType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for RemoteType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RemoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on_site" | "onsite" | "on-site" => Ok(RemoteType::OnSite),
            "remote" => Ok(RemoteType::Remote),
            "hybrid" => Ok(RemoteType::Hybrid),
            _ => Err(format!("Invalid remote type: {}", s)),
        }
    }
}
