use anyhow::Result;
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = DaybookConfig::config_path()?;
    let config = DaybookConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Entries: {}", config.storage().path_for(daybook_core::constants::EVENTS_KEY).display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
