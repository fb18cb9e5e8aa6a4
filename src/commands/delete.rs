use anyhow::Result;
use daybook_core::EntryId;
use owo_colors::OwoColorize;

use super::Session;
use crate::render::missing_entry;

pub fn run(id: EntryId, date: Option<&str>) -> Result<()> {
    let mut session = Session::open()?;
    let key = session.resolve_date(date)?;

    let Some(content) = session.planner.store().entry(&key, id).map(|e| e.content.clone()) else {
        println!("{}", missing_entry(&key, id));
        return Ok(());
    };

    session.planner.delete_entry(&key, id);
    println!("{} {}", "-".red(), content.red());

    Ok(())
}
