use anyhow::Result;
use owo_colors::OwoColorize;

use super::Session;

pub fn run(text: &str, date: Option<&str>) -> Result<()> {
    let mut session = Session::open()?;
    let key = session.resolve_date(date)?;

    if text.trim().is_empty() {
        println!("{}", "Nothing to add. Type the entry text after `add`.".dimmed());
        return Ok(());
    }

    let id = session.planner.add_entry(key, text)?;
    println!("{} {} {}", "+".green(), text, format!("({key} #{id})").dimmed());

    Ok(())
}
