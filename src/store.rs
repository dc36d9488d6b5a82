use crate::domain::{Task, TaskDraft, ValidationError};
use crate::persistence::KeyValueStore;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Storage key of the serialized task list
pub const STORAGE_KEY: &str = "roulette_tasks_v1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    /// The in-memory list changed but could not be written out
    #[error("Couldn't save tasks: {0:#}")]
    Persist(anyhow::Error),
}

/// Ordered task list, written through to a key-value slot on every mutation
pub struct TaskStore {
    tasks: Vec<Task>,
    kv: Box<dyn KeyValueStore>,
}

impl TaskStore {
    /// Load the task list from `kv`. Missing or corrupt data gives an empty store.
    pub fn open(kv: Box<dyn KeyValueStore>) -> Self {
        let tasks = match kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => decode_tasks(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "could not read task storage, starting empty");
                Vec::new()
            }
        };
        info!(count = tasks.len(), "loaded tasks");
        Self { tasks, kv }
    }

    /// A store that lives only in memory
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::open(Box::new(crate::persistence::MemoryKvStore::new()))
    }

    /// Validate a draft and append it as a new task
    pub fn add(&mut self, draft: &TaskDraft) -> Result<Task, StoreError> {
        let task = Task::from_draft(draft)?;
        info!(id = %task.id, name = %task.name, "adding task");
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Append already-validated tasks, persisting once if anything was added
    pub fn extend(&mut self, tasks: Vec<Task>) -> Result<usize, StoreError> {
        let added = tasks.len();
        if added == 0 {
            return Ok(0);
        }
        self.tasks.extend(tasks);
        self.persist()?;
        Ok(added)
    }

    /// Mark a task done. Returns false (and writes nothing) if it is missing or already done.
    pub fn mark_done(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let changed = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.mark_done(),
            None => false,
        };
        if changed {
            info!(%id, "task marked done");
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove a task, returning it if it existed
    pub fn delete(&mut self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let removed = self.tasks.remove(index);
        info!(%id, name = %removed.name, "task deleted");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Remove every task. Irreversible, so nothing happens unless `confirmed`.
    pub fn wipe_all(&mut self, confirmed: bool) -> Result<usize, StoreError> {
        if !confirmed {
            return Ok(0);
        }
        let count = self.tasks.len();
        self.tasks.clear();
        warn!(count, "all tasks wiped");
        self.persist()?;
        Ok(count)
    }

    /// Tasks in insertion order, optionally without the done ones.
    ///
    /// The iterator is lazy and can be cloned to walk the view again.
    pub fn list(&self, hide_done: bool) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks.iter().filter(move |t| !hide_done || !t.done)
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks whose id starts with `prefix` (hyphens ignored)
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Task> {
        let needle = prefix.trim().replace('-', "").to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.tasks
            .iter()
            .filter(|t| t.id.simple().to_string().starts_with(&needle))
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Distinct locations, sorted ignoring case
    pub fn locations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut locations: Vec<String> = self
            .tasks
            .iter()
            .map(|t| t.location.trim().to_string())
            .filter(|loc| !loc.is_empty() && seen.insert(loc.clone()))
            .collect();
        locations.sort_by_key(|loc| loc.to_lowercase());
        locations
    }

    /// Write the whole list to storage
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.tasks)
            .map_err(|e| StoreError::Persist(e.into()))?;
        self.kv
            .set(STORAGE_KEY, &json)
            .map_err(StoreError::Persist)
    }
}

/// Decode the stored list, dropping whatever does not hold up
fn decode_tasks(raw: &str) -> Vec<Task> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "task storage is corrupt, starting empty");
            return Vec::new();
        }
    };

    let mut ids = HashSet::new();
    let mut tasks = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let mut task: Task = match serde_json::from_value(value) {
            Ok(task) => task,
            Err(e) => {
                warn!(index, error = %e, "dropping unreadable task record");
                continue;
            }
        };
        if !task.is_well_formed() {
            warn!(index, "dropping task record with blank name/location or zero duration");
            continue;
        }
        if !ids.insert(task.id) {
            task.id = Uuid::new_v4();
            ids.insert(task.id);
            warn!(index, new_id = %task.id, "duplicate task id regenerated");
        }
        tasks.push(task);
    }
    tasks
}
