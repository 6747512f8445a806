use std::path::Path;

use anyhow::Context;
use yomi_config::Config;

/// Config from an explicit profile, or defaults with env overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load profile {}", path.display())),
        None => Ok(Config::new()),
    }
}
