use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The durable record of what gets blocked while the daily goal is open.
///
/// `apps` holds case-insensitive process-name substrings, `sites` holds bare
/// domains. Both behave as sets: duplicates collapse and the first
/// occurrence keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    #[serde(default)]
    pub apps: Vec<String>,

    #[serde(default)]
    pub sites: Vec<String>,
}

impl BlockConfig {
    pub fn new<A, S>(apps: A, sites: S) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            apps: dedup(apps.into_iter().map(Into::into)),
            sites: dedup(sites.into_iter().map(Into::into)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Re-applies set semantics to a record read from disk, where the file
    /// may have been edited by hand.
    pub fn normalized(self) -> Self {
        Self::new(self.apps, self.sites)
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty() && self.sites.is_empty()
    }

    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.apps.push(app.into());
        self.normalized()
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.sites.push(site.into());
        self.normalized()
    }

    pub fn without_app(mut self, app: &str) -> Self {
        self.apps.retain(|a| a != app.trim());
        self
    }

    pub fn without_site(mut self, site: &str) -> Self {
        self.sites.retain(|s| s != site.trim());
        self
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
