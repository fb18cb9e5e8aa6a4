use anyhow::Result;

use super::Session;
use crate::render::render_day;

pub fn run(date: Option<&str>) -> Result<()> {
    let session = Session::open()?;
    let key = session.resolve_date(date)?;

    println!("{}", render_day(&key, session.planner.store().entries(&key)));

    Ok(())
}
