use anyhow::Result;
use daybook_core::month::MonthView;

use super::Session;
use crate::render::render_month;

pub fn run(month: Option<&str>) -> Result<()> {
    let session = Session::open()?;
    let today = session.today()?;
    let week_start = session.config.first_weekday();

    let view = match month {
        Some(s) => MonthView::parse(s, week_start)?,
        None => MonthView::containing(today.date(), week_start),
    };

    println!("{}", render_month(&view, session.planner.store(), today, None));

    Ok(())
}
