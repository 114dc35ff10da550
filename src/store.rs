use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::space::{Space, SpaceId, seed_spaces};
use crate::util::time;

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("space {0} not found")]
    NotFound(SpaceId),
    /// A writer panicked while holding the lock
    #[error("lock poisoned")]
    LockPoisoned,
}

/// In-memory ordered collection of spaces.
///
/// A single lock guards every scan and mutation. Lookups are linear and
/// return the first record with a matching id; duplicate ids are accepted.
pub struct SpaceStore {
    spaces: RwLock<Vec<Space>>,
}

impl SpaceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::from_spaces(Vec::new())
    }

    /// Create a store holding the two seed records, dated relative to `now`
    pub fn with_seed(now: DateTime<Utc>) -> Self {
        Self::from_spaces(seed_spaces(now))
    }

    /// Create a store holding `spaces` in the given order
    pub fn from_spaces(spaces: Vec<Space>) -> Self {
        Self {
            spaces: RwLock::new(spaces),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Space>>, StoreError> {
        self.spaces.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Space>>, StoreError> {
        self.spaces.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// All records in insertion order
    pub fn list(&self) -> Result<Vec<Space>, StoreError> {
        Ok(self.read()?.clone())
    }

    /// First record with the given id
    pub fn find_by_id(&self, id: SpaceId) -> Result<Space, StoreError> {
        self.read()?
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Records whose title or description contains `query`
    pub fn search(&self, query: &str) -> Result<Vec<Space>, StoreError> {
        Ok(self
            .read()?
            .iter()
            .filter(|s| s.matches(query))
            .cloned()
            .collect())
    }

    /// Append `space`, overwriting its timestamps with the current time
    pub fn create(&self, mut space: Space) -> Result<Space, StoreError> {
        space.touch_all(time::now());
        self.write()?.push(space.clone());
        Ok(space)
    }

    /// Overwrite the editable fields of the first record with `id`
    pub fn update(&self, id: SpaceId, payload: Space) -> Result<Space, StoreError> {
        self.modify(id, |space| space.apply_update(payload, time::now()))
    }

    /// Remove the first record with `id` and return it
    pub fn delete(&self, id: SpaceId) -> Result<Space, StoreError> {
        let mut spaces = self.write()?;
        let pos = spaces
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(spaces.remove(pos))
    }

    /// Concatenate `file` onto the record's uploaded files, no separator
    pub fn append_file(&self, id: SpaceId, file: &str) -> Result<Space, StoreError> {
        self.modify(id, |space| space.uploaded_files.push_str(file))
    }

    /// Strip every occurrence of `file` from the record's uploaded files.
    ///
    /// Names are stored without delimiters, so a name that is a substring of
    /// a neighbour (or spans two of them) is removed from inside it too.
    pub fn remove_file(&self, id: SpaceId, file: &str) -> Result<Space, StoreError> {
        self.modify(id, |space| {
            if !file.is_empty() {
                space.uploaded_files = space.uploaded_files.replace(file, "");
            }
        })
    }

    fn modify<F>(&self, id: SpaceId, f: F) -> Result<Space, StoreError>
    where
        F: FnOnce(&mut Space),
    {
        let mut spaces = self.write()?;
        let space = spaces
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        f(space);
        Ok(space.clone())
    }
}

impl Default for SpaceStore {
    fn default() -> Self {
        Self::new()
    }
}
