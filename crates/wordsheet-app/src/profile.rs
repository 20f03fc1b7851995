use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordsheet_config::Config;

/// Profile picked up from the working directory when none is given
const DEFAULT_PROFILE: &str = "config.json";

/// Explicit profile, else `./config.json`, else defaults plus env vars
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return read_profile(path);
    }

    let default_profile = Path::new(DEFAULT_PROFILE);
    if default_profile.exists() {
        return read_profile(default_profile);
    }

    tracing::debug!("No config profile, using defaults and environment");
    Ok(Config::new())
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config profile {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Cannot open config profile '{}'", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config profile '{}'", path.display()))?;

    Ok(config)
}
