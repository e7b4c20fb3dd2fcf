use anyhow::Result;
use meetai_core::config::RootConfig;
use meetai_infrastructure::ConfigService;

pub fn show(service: &ConfigService, config: &RootConfig) -> Result<()> {
    println!("# {}", service.config_path()?.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
