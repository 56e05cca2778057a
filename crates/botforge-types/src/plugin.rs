use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A plugin name successfully resolved to a clonable repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlugin {
    pub name: String,
    /// Repository slug in `owner/repo` form, as returned by the registry.
    pub repository: String,
}

impl ResolvedPlugin {
    /// HTTPS clone URL for the resolved repository.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }
}

/// Receipt for a completed plugin installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstalledPlugin {
    pub bot: String,
    pub plugin: String,
    pub repository: String,
    /// Directory the repository tree was materialized into.
    pub directory: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_url() {
        let resolved = ResolvedPlugin {
            name: "greeter".to_string(),
            repository: "botforge-plugins/greeter".to_string(),
        };
        assert_eq!(
            resolved.clone_url(),
            "https://github.com/botforge-plugins/greeter"
        );
    }
}
