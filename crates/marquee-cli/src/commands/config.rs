use std::path::Path;

use anyhow::{bail, Result};

use marquee_core::AppConfig;

/// Print the effective configuration
pub fn print(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration, refusing to overwrite an existing file
pub fn write_default(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, not overwriting", path.display());
    }

    AppConfig::default().save_to(path)?;
    tracing::info!("Wrote default config to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
