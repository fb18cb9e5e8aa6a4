//! Terminal rendering for daybook types using owo_colors.

use chrono::{Datelike, Weekday};
use daybook_core::month::MonthView;
use daybook_core::{DateKey, Entry, EntryId, Store};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Entry {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        if self.done {
            format!("  {} {} {}", "[x]".green(), self.content.strikethrough().dimmed(), id.dimmed())
        } else {
            format!("  [ ] {} {}", self.content, id.dimmed())
        }
    }
}

impl Render for DateKey {
    fn render(&self) -> String {
        format!("📅 {}", self.date().format("%a %Y-%m-%d"))
    }
}

/// A day heading followed by its entries.
pub fn render_day(key: &DateKey, entries: &[Entry]) -> String {
    let mut lines = vec![key.render().bold().to_string()];

    if entries.is_empty() {
        lines.push("  No entries".dimmed().to_string());
    } else {
        lines.extend(entries.iter().map(Render::render));
    }

    lines.join("\n")
}

pub fn missing_entry(key: &DateKey, id: EntryId) -> String {
    format!("No entry #{} on {}", id, key).dimmed().to_string()
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Month grid. Days with entries are marked with `*`, today is reversed and
/// the selected day is bracketed.
pub fn render_month(view: &MonthView, store: &Store, today: DateKey, selected: Option<DateKey>) -> String {
    let marked = store.marked_days_in(view.year(), view.month());

    let mut lines = vec![format!("{:^28}", view.title()).bold().to_string()];

    let header: Vec<_> = view.weekdays().iter().map(|d| format!(" {} ", weekday_label(*d))).collect();
    lines.push(header.join("").dimmed().to_string());

    for week in view.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|day| {
                let Some(date) = day else {
                    return "   ".to_string();
                };
                let key = DateKey::from_date(*date);
                let mark = if marked.contains(&key) { "*" } else { " " };
                let cell = if selected == Some(key) {
                    format!("[{:>2}", date.day())
                } else {
                    format!("{:>3}", date.day())
                };

                let cell = if key == today {
                    cell.reversed().to_string()
                } else if marked.contains(&key) {
                    cell.green().to_string()
                } else {
                    cell
                };
                format!("{}{}", cell, mark.green())
            })
            .collect();
        lines.push(cells.join(""));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_render_day_empty() {
        let out = render_day(&key("2024-06-01"), &[]);
        assert!(out.contains("2024-06-01"));
        assert!(out.contains("No entries"));
    }

    #[test]
    fn test_render_entry_shows_id() {
        let entry = Entry::new(EntryId(1717232400000), "buy milk");
        let out = entry.render();
        assert!(out.contains("buy milk"));
        assert!(out.contains("#1717232400000"));
        assert!(out.contains("[ ]"));
    }

    #[test]
    fn test_render_month_marks_days() {
        let (store, _) = Store::new().add_entry(key("2024-06-03"), "x").unwrap();
        let view = MonthView::new(2024, 6, Weekday::Sun).unwrap();

        let out = render_month(&view, &store, key("2024-06-20"), None);
        assert!(out.contains("June 2024"));
        assert!(out.contains("30"));
        assert!(out.contains('*'));

        let empty = render_month(&view, &Store::new(), key("2024-06-20"), None);
        assert!(!empty.contains('*'));
    }
}
