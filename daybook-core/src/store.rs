//! The event store: calendar day -> ordered list of entries.
//!
//! Every mutation consumes the store and hands back the updated one. Unknown
//! days or stale ids leave the store untouched instead of failing.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::entry::{Entry, EntryId};
use crate::error::{DaybookError, DaybookResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    days: BTreeMap<DateKey, Vec<Entry>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> DaybookResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> DaybookResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    // MUTATIONS:

    /// Append a new entry for `key`, stamped with the current time.
    pub fn add_entry(self, key: DateKey, content: &str) -> DaybookResult<(Store, EntryId)> {
        self.add_entry_at(key, content, Utc::now())
    }

    /// Append a new entry for `key`, using `now` to mint its id.
    pub fn add_entry_at(
        mut self,
        key: DateKey,
        content: &str,
        now: DateTime<Utc>,
    ) -> DaybookResult<(Store, EntryId)> {
        if content.is_empty() {
            return Err(DaybookError::EmptyContent);
        }

        let id = self.fresh_id(now);
        self.days.entry(key).or_default().push(Entry::new(id, content));
        Ok((self, id))
    }

    /// Replace the content of an entry, keeping its id, done flag and position.
    pub fn edit_entry(mut self, key: &DateKey, id: EntryId, new_content: &str) -> Store {
        if let Some(entry) = self.entry_mut(key, id) {
            entry.content = new_content.to_string();
        }
        self
    }

    /// Remove an entry. A day whose last entry is removed keeps an empty list.
    pub fn delete_entry(mut self, key: &DateKey, id: EntryId) -> Store {
        if let Some(entries) = self.days.get_mut(key) {
            entries.retain(|e| e.id != id);
        }
        self
    }

    pub fn toggle_done(mut self, key: &DateKey, id: EntryId) -> Store {
        if let Some(entry) = self.entry_mut(key, id) {
            entry.done = !entry.done;
        }
        self
    }

    // QUERIES:

    pub fn entries(&self, key: &DateKey) -> &[Entry] {
        self.days.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entry(&self, key: &DateKey, id: EntryId) -> Option<&Entry> {
        self.entries(key).iter().find(|e| e.id == id)
    }

    pub fn has_entries(&self, key: &DateKey) -> bool {
        !self.entries(key).is_empty()
    }

    /// Whether the calendar day containing `datetime` has any entries.
    pub fn has_entries_on<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> bool {
        self.has_entries(&DateKey::from_datetime(datetime))
    }

    /// Days of the given month that have at least one entry, ascending.
    pub fn marked_days_in(&self, year: i32, month: u32) -> Vec<DateKey> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let next = first
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(NaiveDate::MAX);

        self.days
            .range(DateKey::from_date(first)..DateKey::from_date(next))
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(key, _)| *key)
            .collect()
    }

    /// Total number of entries across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry_mut(&mut self, key: &DateKey, id: EntryId) -> Option<&mut Entry> {
        self.days.get_mut(key)?.iter_mut().find(|e| e.id == id)
    }

    /// The creation timestamp, bumped past any id already in the store.
    fn fresh_id(&self, now: DateTime<Utc>) -> EntryId {
        let candidate = EntryId::at(now);
        let used: BTreeSet<EntryId> = self.days.values().flatten().map(|e| e.id).collect();

        match used.last() {
            Some(max) if *max >= candidate => match max.0.checked_add(1) {
                Some(next) => EntryId(next),
                // Top of the range is taken; use the nearest free id at or below now.
                None => (i64::MIN..=candidate.0)
                    .rev()
                    .map(EntryId)
                    .find(|id| !used.contains(id))
                    .unwrap_or(candidate),
            },
            _ => candidate,
        }
    }
}
