use anyhow::{Context, Result};
use portal_infrastructure::ConfigService;

pub fn show(service: &ConfigService) -> Result<()> {
    let path = service.config_path()?;
    let config = service.get_config()?;
    println!("# {}", path.display());
    print!(
        "{}",
        toml::to_string_pretty(&config).context("Failed to render configuration")?
    );
    Ok(())
}

pub fn init(service: &ConfigService) -> Result<()> {
    let (path, created) = service.init()?;
    if created {
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
    }
    Ok(())
}
