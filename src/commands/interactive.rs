use anyhow::Result;
use daybook_core::month::MonthView;
use daybook_core::planner::{FormMode, SubmitOutcome};
use daybook_core::{DateKey, EntryId};
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::Session;
use crate::render::{missing_entry, render_day, render_month};
use crate::utils::date::parse_date_arg;

const HELP: &str = "\
  select DATE   pick a day (again to unselect)
  next / prev   move the selection by one day
  edit ID       load an entry into the prompt for editing
  cancel        stop editing
  toggle ID     mark an entry done / undone
  delete ID     remove an entry
  month         show the current month
  quit          leave
  anything else is added to the selected day";

/// A parsed prompt line.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Select(String),
    Next,
    Prev,
    Edit(EntryId),
    Cancel,
    Toggle(EntryId),
    Delete(EntryId),
    Month,
    Help,
    Quit,
    Submit(String),
}

/// While editing, every line except `cancel` is the new entry text.
fn parse_action(line: &str, mode: FormMode) -> Action {
    if let FormMode::Editing(_) = mode {
        return match line.trim() {
            "cancel" => Action::Cancel,
            _ => Action::Submit(line.to_string()),
        };
    }

    let (word, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
    let id = rest.trim().parse::<EntryId>();

    match (word, id) {
        ("select", _) if !rest.trim().is_empty() => Action::Select(rest.trim().to_string()),
        ("next", _) if rest.is_empty() => Action::Next,
        ("prev", _) if rest.is_empty() => Action::Prev,
        ("edit", Ok(id)) => Action::Edit(id),
        ("cancel", _) if rest.is_empty() => Action::Cancel,
        ("toggle", Ok(id)) => Action::Toggle(id),
        ("delete", Ok(id)) => Action::Delete(id),
        ("month", _) if rest.is_empty() => Action::Month,
        ("help" | "?", _) => Action::Help,
        ("quit" | "exit", _) => Action::Quit,
        _ => Action::Submit(line.to_string()),
    }
}

pub fn run() -> Result<()> {
    let mut session = Session::open()?;
    let today = session.today()?;
    let week_start = session.config.first_weekday();
    let mut view = MonthView::containing(today.date(), week_start);

    session.planner.select(today);
    println!("{}", render_month(&view, session.planner.store(), today, session.planner.selected()));
    println!("{}", "Type `help` for commands.".dimmed());

    loop {
        if let Some(key) = session.planner.selected() {
            println!("\n{}", render_day(&key, session.planner.selected_entries()));
        }

        let prompt = match session.planner.mode() {
            FormMode::Editing(id) => format!("Edit #{id}"),
            FormMode::Idle => "New entry".to_string(),
        };

        let line: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(session.planner.draft())
            .allow_empty(true)
            .interact_text()?;

        match parse_action(&line, session.planner.mode()) {
            Action::Select(arg) => match parse_date_arg(&arg, today) {
                Ok(key) => session.planner.select(key),
                Err(e) => println!("{}", e.to_string().red()),
            },
            Action::Next => step(&mut session, today, DateKey::succ),
            Action::Prev => step(&mut session, today, DateKey::pred),
            Action::Edit(id) => {
                if !session.planner.begin_edit(id) {
                    println!("{}", missing_here(&session, id));
                }
            }
            Action::Cancel => session.planner.cancel_edit(),
            Action::Toggle(id) => {
                if !session.planner.toggle_selected(id) {
                    println!("{}", missing_here(&session, id));
                }
            }
            Action::Delete(id) => {
                if !session.planner.delete_selected(id) {
                    println!("{}", missing_here(&session, id));
                }
            }
            Action::Month => {
                if let Some(key) = session.planner.selected() {
                    view = MonthView::containing(key.date(), week_start);
                }
                println!("{}", render_month(&view, session.planner.store(), today, session.planner.selected()));
            }
            Action::Help => println!("{}", HELP.dimmed()),
            Action::Quit => break,
            Action::Submit(text) => {
                session.planner.set_draft(text);
                match session.planner.submit() {
                    SubmitOutcome::Added(_) => println!("{}", "Added".green()),
                    SubmitOutcome::Updated(_) => println!("{}", "Updated".yellow()),
                    SubmitOutcome::EmptyDraft => {}
                    SubmitOutcome::Stale(id) => println!("{}", missing_here(&session, id)),
                    SubmitOutcome::NoSelection => {
                        session.planner.set_draft("");
                        println!("{}", "Select a day first, e.g. `select today`".dimmed());
                    }
                }
            }
        }
    }

    Ok(())
}

/// Move the selection one day, starting from today when nothing is selected.
fn step(session: &mut Session, today: DateKey, direction: fn(&DateKey) -> DateKey) {
    let from = session.planner.selected().unwrap_or(today);
    session.planner.select(direction(&from));
}

fn missing_here(session: &Session, id: EntryId) -> String {
    match session.planner.selected() {
        Some(key) => missing_entry(&key, id),
        None => "Select a day first".dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: FormMode = FormMode::Idle;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_action("select 2024-06-01", IDLE), Action::Select("2024-06-01".into()));
        assert_eq!(parse_action("toggle 17", IDLE), Action::Toggle(EntryId(17)));
        assert_eq!(parse_action("delete 17", IDLE), Action::Delete(EntryId(17)));
        assert_eq!(parse_action("edit 17", IDLE), Action::Edit(EntryId(17)));
        assert_eq!(parse_action("next", IDLE), Action::Next);
        assert_eq!(parse_action("quit", IDLE), Action::Quit);
    }

    #[test]
    fn test_other_text_is_submitted() {
        assert_eq!(parse_action("buy milk", IDLE), Action::Submit("buy milk".into()));
        assert_eq!(parse_action("delete the old files", IDLE), Action::Submit("delete the old files".into()));
        assert_eq!(parse_action("next week", IDLE), Action::Submit("next week".into()));
        assert_eq!(parse_action("", IDLE), Action::Submit(String::new()));
    }

    #[test]
    fn test_editing_submits_command_words() {
        let editing = FormMode::Editing(EntryId(17));

        assert_eq!(parse_action("quit", editing), Action::Submit("quit".into()));
        assert_eq!(parse_action("next", editing), Action::Submit("next".into()));
        assert_eq!(parse_action("select today", editing), Action::Submit("select today".into()));
        assert_eq!(parse_action("delete 17", editing), Action::Submit("delete 17".into()));
        assert_eq!(parse_action("cancel", editing), Action::Cancel);
    }
}
