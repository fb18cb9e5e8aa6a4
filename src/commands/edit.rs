use anyhow::Result;
use daybook_core::EntryId;
use owo_colors::OwoColorize;

use super::Session;
use crate::render::missing_entry;

pub fn run(id: EntryId, text: &str, date: Option<&str>) -> Result<()> {
    let mut session = Session::open()?;
    let key = session.resolve_date(date)?;

    if text.trim().is_empty() {
        println!("{}", "Nothing to change. Give the new entry text.".dimmed());
        return Ok(());
    }

    if session.planner.edit_entry(&key, id, text) {
        println!("{} {}", "~".yellow(), text);
    } else {
        println!("{}", missing_entry(&key, id));
    }

    Ok(())
}
