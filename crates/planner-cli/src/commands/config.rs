use std::path::Path;

use anyhow::Result;
use planner_config::Config;

pub fn handle(config: &Config, config_path: &Path, path_only: bool) -> Result<()> {
    if path_only {
        println!("{}", config_path.display());
        return Ok(());
    }

    println!("# {}", config_path.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
