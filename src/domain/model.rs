use crate::utils::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the static JSON documents served under `/models/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Feedback,
    Users,
    Analytics,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Feedback, Resource::Users, Resource::Analytics];

    pub fn path(self) -> &'static str {
        match self {
            Resource::Feedback => "/models/feedback.json",
            Resource::Users => "/models/users.json",
            Resource::Analytics => "/models/analytics.json",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Feedback => "feedback",
            Resource::Users => "users",
            Resource::Analytics => "analytics",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| FetchError::InvalidConfigValueError {
                field: "resource".to_string(),
                value: s.to_string(),
                reason: "Expected one of: feedback, users, analytics".to_string(),
            })
    }
}
