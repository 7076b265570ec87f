use dns_relay_domain::{CliOverrides, Config};

/// Loads the configuration and rejects it before anything binds.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
