//! Workspace root and per-bot path layout.
//!
//! The root is resolved once at startup and injected into every service;
//! no component reads it from a global. Layout per bot:
//!
//! ```text
//! {root}/{name}/
//!   bot.js          entrypoint (verbatim remote template, written once)
//!   config.json     flat JSON object, required
//!   manifest.json   optional, produced externally, only ever read
//!   plugins/{plugin}/
//! ```

use std::path::{Path, PathBuf};

/// Entrypoint file written at bot creation.
pub const ENTRYPOINT_FILE: &str = "bot.js";

/// Required per-bot configuration document.
pub const CONFIG_FILE: &str = "config.json";

/// Optional manifest, produced by external tooling.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Subdirectory holding one checkout per installed plugin.
pub const PLUGINS_DIR: &str = "plugins";

/// The directory namespace all bots live under.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/{name}/` -- existence of this directory IS existence of the bot.
    pub fn bot_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn plugins_dir(&self, name: &str) -> PathBuf {
        self.bot_dir(name).join(PLUGINS_DIR)
    }

    pub fn plugin_dir(&self, bot: &str, plugin: &str) -> PathBuf {
        self.plugins_dir(bot).join(plugin)
    }

    pub fn entrypoint_path(&self, name: &str) -> PathBuf {
        self.bot_dir(name).join(ENTRYPOINT_FILE)
    }

    pub fn config_path(&self, name: &str) -> PathBuf {
        self.bot_dir(name).join(CONFIG_FILE)
    }

    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.bot_dir(name).join(MANIFEST_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_paths() {
        let ws = Workspace::new(PathBuf::from("/data/bots"));
        assert_eq!(ws.bot_dir("luna"), PathBuf::from("/data/bots/luna"));
        assert_eq!(
            ws.plugins_dir("luna"),
            PathBuf::from("/data/bots/luna/plugins")
        );
        assert_eq!(
            ws.plugin_dir("luna", "greeter"),
            PathBuf::from("/data/bots/luna/plugins/greeter")
        );
        assert_eq!(
            ws.entrypoint_path("luna"),
            PathBuf::from("/data/bots/luna/bot.js")
        );
        assert_eq!(
            ws.config_path("luna"),
            PathBuf::from("/data/bots/luna/config.json")
        );
        assert_eq!(
            ws.manifest_path("luna"),
            PathBuf::from("/data/bots/luna/manifest.json")
        );
    }
}
