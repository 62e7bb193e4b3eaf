use crate::models::{Student, StudentRecord};
use crate::services::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Gateway to the collection of student records.
///
/// Every operation is a single round-trip; uniqueness of `name` is checked
/// by the callers before inserts and renames.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Student>, AppError>;

    /// Case-insensitive exact match on `college` (anchored, not substring).
    async fn find_by_college(&self, college: &str) -> Result<Vec<Student>, AppError>;

    async fn list_all(&self) -> Result<Vec<Student>, AppError>;

    async fn insert(&self, student: &Student) -> Result<(), AppError>;

    /// Overwrites all record fields of the document matching `old_name`.
    /// A missing target is a no-op.
    async fn replace_fields(&self, old_name: &str, record: &StudentRecord)
        -> Result<(), AppError>;

    /// Returns the number of removed documents (zero or one).
    async fn delete_by_name(&self, name: &str) -> Result<u64, AppError>;

    /// Probes the store connection.
    async fn ping(&self) -> Result<(), AppError>;
}

/// In-memory store used by the integration tests in place of MongoDB.
/// Listing order is insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<Student>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Student>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|s| s.name == name).cloned())
    }

    async fn find_by_college(&self, college: &str) -> Result<Vec<Student>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|s| s.college.eq_ignore_ascii_case(college))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn insert(&self, student: &Student) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.push(student.clone());
        Ok(())
    }

    async fn replace_fields(
        &self,
        old_name: &str,
        record: &StudentRecord,
    ) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter_mut().find(|s| s.name == old_name) {
            existing.name = record.name.clone();
            existing.college = record.college.clone();
            existing.father = record.father.clone();
            existing.mother = record.mother.clone();
            existing.marks10 = record.marks10;
            existing.marks12 = record.marks12;
            existing.school10 = record.school10.clone();
            existing.school12 = record.school12.clone();
        }
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|s| s.name != name);
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
