use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::domain::{Comment, CommentId, Employee, EmployeeId, EmployeeStatus, EmployeeUpdate};
use super::seed::seed_employees;

/// Error enumeration for record store failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("employee {0} already exists")]
    Conflict(EmployeeId),
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
    #[error("employee {id} changed from {expected} to {found} before the update was applied")]
    StaleStatus {
        id: EmployeeId,
        expected: EmployeeStatus,
        found: EmployeeStatus,
    },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Authoritative in-memory record set. Insertion order is the listing order and records are
/// never removed.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    records: Vec<Employee>,
    comment_sequence: u64,
}

impl EmployeeStore {
    pub fn new(records: Vec<Employee>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.clone()) {
                return Err(RepositoryError::Conflict(record.id.clone()));
            }
        }

        // Continue after the highest generated comment id already present.
        let comment_sequence = records
            .iter()
            .flat_map(|record| &record.comments)
            .filter_map(|comment| comment.id.0.strip_prefix("cmt-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Ok(Self {
            records,
            comment_sequence,
        })
    }

    pub fn seeded() -> Self {
        Self {
            records: seed_employees(),
            comment_sequence: 0,
        }
    }

    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Records whose status is one of `statuses`, in store order.
    pub fn by_status(&self, statuses: &[EmployeeStatus]) -> Vec<&Employee> {
        self.records
            .iter()
            .filter(|record| statuses.contains(&record.status))
            .collect()
    }

    pub fn update_employee(
        &mut self,
        id: &EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        let record = self.get_mut(id)?;
        record.apply(update);
        Ok(record.clone())
    }

    /// Applies `update` only while the record is still in `expected` status.
    pub fn update_if_status(
        &mut self,
        id: &EmployeeId,
        expected: EmployeeStatus,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        let record = self.get_mut(id)?;
        if record.status != expected {
            return Err(RepositoryError::StaleStatus {
                id: id.clone(),
                expected,
                found: record.status,
            });
        }
        record.apply(update);
        Ok(record.clone())
    }

    pub fn add_comment(
        &mut self,
        id: &EmployeeId,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Result<Comment, RepositoryError> {
        let index = self.position(id)?;
        self.comment_sequence += 1;
        // Padded to the width of `u64::MAX` so lexical order always matches generation order.
        let comment = Comment {
            id: CommentId(format!("cmt-{:020}", self.comment_sequence)),
            author,
            text,
            created_at,
        };
        self.records[index].comments.push(comment.clone());
        Ok(comment)
    }

    fn position(&self, id: &EmployeeId) -> Result<usize, RepositoryError> {
        self.records
            .iter()
            .position(|record| &record.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    fn get_mut(&mut self, id: &EmployeeId) -> Result<&mut Employee, RepositoryError> {
        let index = self.position(id)?;
        Ok(&mut self.records[index])
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait EmployeeRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Employee>, RepositoryError>;
    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError>;
    fn by_status(&self, statuses: &[EmployeeStatus]) -> Result<Vec<Employee>, RepositoryError>;
    fn update(&self, id: &EmployeeId, update: EmployeeUpdate)
        -> Result<Employee, RepositoryError>;
    fn update_if_status(
        &self,
        id: &EmployeeId,
        expected: EmployeeStatus,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError>;
    fn append_comment(
        &self,
        id: &EmployeeId,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Result<Comment, RepositoryError>;
}

/// Process-wide store guarded by a single mutex so each read-modify-write is atomic.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<EmployeeStore>,
}

impl InMemoryEmployeeRepository {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn seeded() -> Self {
        Self::new(EmployeeStore::seeded())
    }

    fn lock(&self) -> Result<MutexGuard<'_, EmployeeStore>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Unavailable("employee store lock poisoned".to_string()))
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn list(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.lock()?.list().to_vec())
    }

    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn by_status(&self, statuses: &[EmployeeStatus]) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self
            .lock()?
            .by_status(statuses)
            .into_iter()
            .cloned()
            .collect())
    }

    fn update(
        &self,
        id: &EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        self.lock()?.update_employee(id, update)
    }

    fn update_if_status(
        &self,
        id: &EmployeeId,
        expected: EmployeeStatus,
        update: EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        self.lock()?.update_if_status(id, expected, update)
    }

    fn append_comment(
        &self,
        id: &EmployeeId,
        author: String,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Result<Comment, RepositoryError> {
        self.lock()?.add_comment(id, author, text, created_at)
    }
}
