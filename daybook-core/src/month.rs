//! Month grid layout for rendering a calendar page.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::error::{DaybookError, DaybookResult};

pub type Week = [Option<NaiveDate>; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
    week_start: Weekday,
}

impl MonthView {
    pub fn new(year: i32, month: u32, week_start: Weekday) -> DaybookResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DaybookError::InvalidMonth(format!("{year}-{month:02}")))?;
        Ok(MonthView { first, week_start })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate, week_start: Weekday) -> Self {
        MonthView {
            first: date.with_day(1).unwrap_or(date),
            week_start,
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str, week_start: Weekday) -> DaybookResult<Self> {
        let invalid = || DaybookError::InvalidMonth(format!("'{s}'. Expected YYYY-MM"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month, week_start).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// e.g. "June 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn next(&self) -> Self {
        MonthView {
            first: self.first.checked_add_months(Months::new(1)).unwrap_or(self.first),
            ..*self
        }
    }

    pub fn prev(&self) -> Self {
        MonthView {
            first: self.first.checked_sub_months(Months::new(1)).unwrap_or(self.first),
            ..*self
        }
    }

    /// Weekdays in column order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.week_start; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    /// Full weeks covering the month, padded with `None` outside it.
    pub fn weeks(&self) -> Vec<Week> {
        let offset = (self.first.weekday().num_days_from_monday() + 7
            - self.week_start.num_days_from_monday()) as usize
            % 7;
        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        let mut column = offset;

        for date in self.first.iter_days().take_while(|d| d.month() == self.month()) {
            week[column] = Some(date);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }

        if column > 0 {
            weeks.push(week);
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_june_2024_sunday_start() {
        // June 1st 2024 is a Saturday
        let weeks = MonthView::new(2024, 6, Weekday::Sun).unwrap().weeks();

        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..6], [None; 6]);
        assert_eq!(weeks[0][6], Some(date(2024, 6, 1)));
        assert_eq!(weeks[5][0], Some(date(2024, 6, 30)));
        assert_eq!(weeks[5][1], None);
    }

    #[test]
    fn test_june_2024_monday_start() {
        let weeks = MonthView::new(2024, 6, Weekday::Mon).unwrap().weeks();

        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][5], Some(date(2024, 6, 1)));
        assert_eq!(weeks[4][6], Some(date(2024, 6, 30)));
    }

    #[test]
    fn test_every_day_appears_once() {
        let view = MonthView::new(2024, 2, Weekday::Mon).unwrap();
        let days: Vec<_> = view.weeks().into_iter().flatten().flatten().collect();

        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date(2024, 2, 1)));
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));
    }

    #[test]
    fn test_navigation_across_years() {
        let dec = MonthView::new(2024, 12, Weekday::Sun).unwrap();
        assert_eq!(dec.next().title(), "January 2025");
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_weekday_columns() {
        let view = MonthView::new(2024, 6, Weekday::Mon).unwrap();
        assert_eq!(view.weekdays()[0], Weekday::Mon);
        assert_eq!(view.weekdays()[6], Weekday::Sun);
    }

    #[test]
    fn test_parse() {
        let view = MonthView::parse("2024-06", Weekday::Sun).unwrap();
        assert_eq!((view.year(), view.month()), (2024, 6));
        assert!(MonthView::parse("2024-13", Weekday::Sun).is_err());
        assert!(MonthView::parse("June", Weekday::Sun).is_err());
        assert!(MonthView::new(2024, 0, Weekday::Sun).is_err());
    }
}
