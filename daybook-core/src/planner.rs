//! Planner session: the store plus the selection and entry form a front end
//! works against. Every mutation is saved immediately.

use crate::date_key::DateKey;
use crate::entry::{Entry, EntryId};
use crate::error::DaybookResult;
use crate::repository::EventRepository;
use crate::storage::KeyValueStorage;
use crate::store::Store;

/// What a submitted draft will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(EntryId),
    Updated(EntryId),
    /// Nothing to submit; the caller should put focus back on the input.
    EmptyDraft,
    NoSelection,
    /// The entry being edited no longer exists; nothing changed.
    Stale(EntryId),
}

#[derive(Debug)]
pub struct Planner<S> {
    repository: EventRepository<S>,
    store: Store,
    selected: Option<DateKey>,
    mode: FormMode,
    draft: String,
}

impl<S: KeyValueStorage> Planner<S> {
    /// Load the store once from `storage`.
    pub fn open(storage: S) -> Self {
        let repository = EventRepository::new(storage);
        let store = repository.load();

        Planner {
            repository,
            store,
            selected: None,
            mode: FormMode::Idle,
            draft: String::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn repository(&self) -> &EventRepository<S> {
        &self.repository
    }

    pub fn selected(&self) -> Option<DateKey> {
        self.selected
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn selected_entries(&self) -> &[Entry] {
        match &self.selected {
            Some(key) => self.store.entries(key),
            None => &[],
        }
    }

    // STORE OPERATIONS:

    pub fn add_entry(&mut self, key: DateKey, content: &str) -> DaybookResult<EntryId> {
        let (store, id) = std::mem::take(&mut self.store).add_entry(key, content)?;
        self.commit(store);
        Ok(id)
    }

    /// Returns false when the entry does not exist.
    pub fn edit_entry(&mut self, key: &DateKey, id: EntryId, content: &str) -> bool {
        if self.store.entry(key, id).is_none() {
            return false;
        }
        let store = std::mem::take(&mut self.store).edit_entry(key, id, content);
        self.commit(store);
        true
    }

    pub fn delete_entry(&mut self, key: &DateKey, id: EntryId) -> bool {
        if self.store.entry(key, id).is_none() {
            return false;
        }
        let store = std::mem::take(&mut self.store).delete_entry(key, id);
        self.commit(store);

        if self.mode == FormMode::Editing(id) {
            self.cancel_edit();
        }
        true
    }

    pub fn toggle_done(&mut self, key: &DateKey, id: EntryId) -> bool {
        if self.store.entry(key, id).is_none() {
            return false;
        }
        let store = std::mem::take(&mut self.store).toggle_done(key, id);
        self.commit(store);
        true
    }

    fn commit(&mut self, store: Store) {
        self.store = store;
        self.repository.save(&self.store);
    }

    // SELECTION + FORM:

    /// Select a day. Selecting the current day again clears the selection.
    pub fn select(&mut self, key: DateKey) {
        if self.selected == Some(key) {
            self.selected = None;
        } else {
            self.selected = Some(key);
        }
        self.cancel_edit();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Load an entry of the selected day into the draft for editing.
    pub fn begin_edit(&mut self, id: EntryId) -> bool {
        let Some(key) = self.selected else {
            return false;
        };
        let Some(entry) = self.store.entry(&key, id) else {
            return false;
        };

        self.draft = entry.content.clone();
        self.mode = FormMode::Editing(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Idle;
        self.draft.clear();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(key) = self.selected else {
            return SubmitOutcome::NoSelection;
        };
        if self.draft.trim().is_empty() {
            return SubmitOutcome::EmptyDraft;
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match self.mode {
            FormMode::Editing(id) => {
                if self.edit_entry(&key, id, &draft) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Stale(id)
                }
            }
            // Empty content is the only add failure and was ruled out above.
            FormMode::Idle => match self.add_entry(key, &draft) {
                Ok(id) => SubmitOutcome::Added(id),
                Err(_) => SubmitOutcome::EmptyDraft,
            },
        };

        self.mode = FormMode::Idle;
        outcome
    }

    pub fn toggle_selected(&mut self, id: EntryId) -> bool {
        match self.selected {
            Some(key) => self.toggle_done(&key, id),
            None => false,
        }
    }

    pub fn delete_selected(&mut self, id: EntryId) -> bool {
        match self.selected {
            Some(key) => self.delete_entry(&key, id),
            None => false,
        }
    }
}
