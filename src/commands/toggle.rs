use anyhow::Result;
use daybook_core::EntryId;

use super::Session;
use crate::render::{Render, missing_entry};

pub fn run(id: EntryId, date: Option<&str>) -> Result<()> {
    let mut session = Session::open()?;
    let key = session.resolve_date(date)?;

    if !session.planner.toggle_done(&key, id) {
        println!("{}", missing_entry(&key, id));
        return Ok(());
    }

    if let Some(entry) = session.planner.store().entry(&key, id) {
        println!("{}", entry.render());
    }

    Ok(())
}
