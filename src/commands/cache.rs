use anyhow::{Context, Result};

use ontofactory::presentation::create_conversion_cache;
use ontofactory::presentation::output::{render_artifacts, ArtifactRow, OutputFormat};
use ontofactory::Config;

pub fn cmd_cache_path(config: &Config) -> Result<()> {
    println!("{}", config.cache.root.display());
    Ok(())
}

pub fn cmd_cache_list(config: &Config, json: bool) -> Result<()> {
    let cache = create_conversion_cache(config);
    let artifacts = cache
        .list()
        .with_context(|| format!("failed to list {}", cache.root().display()))?;

    let rows: Vec<ArtifactRow> = artifacts.iter().map(ArtifactRow::from).collect();
    print!("{}", render_artifacts(&rows, OutputFormat::from_json_flag(json)));
    Ok(())
}
