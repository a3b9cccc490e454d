//! Repository reference

use crate::error::Error;

/// A repository given as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Owning user or organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl std::str::FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            },
            _ => Err(Error::InvalidRepo(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
