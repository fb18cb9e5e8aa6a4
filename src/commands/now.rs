use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, Utc};
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

const TICK: Duration = Duration::from_secs(1);

pub fn run(watch: bool) -> Result<()> {
    let config = DaybookConfig::load()?;
    let tz = config.tz()?;

    let now = || match tz {
        Some(tz) => Utc::now().with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z").to_string(),
        None => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    if !watch {
        println!("{}", now());
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    loop {
        write!(stdout, "\r{} {}", "Now:".dimmed(), now().bold())?;
        stdout.flush()?;
        std::thread::sleep(TICK);
    }
}
