use crate::models::{Student, StudentRecord};
use crate::services::error::AppError;
use crate::services::store::StudentStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};

// Fixed database/collection pair; only the connection string is configurable.
const DATABASE_NAME: &str = "student_biodata_db";
const STUDENTS_COLLECTION: &str = "students";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(DATABASE_NAME);
        tracing::info!(database = %DATABASE_NAME, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn students(&self) -> Collection<Student> {
        self.db.collection(STUDENTS_COLLECTION)
    }
}

/// MongoDB-backed [`StudentStore`].
pub struct MongoStudentStore {
    db: MongoDb,
}

impl MongoStudentStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentStore for MongoStudentStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Student>, AppError> {
        let student = self
            .db
            .students()
            .find_one(doc! { "name": name }, None)
            .await
            .map_err(AppError::from)?;
        Ok(student)
    }

    async fn find_by_college(&self, college: &str) -> Result<Vec<Student>, AppError> {
        let filter = doc! {
            "college": { "$regex": format!("^{}$", college), "$options": "i" }
        };

        let mut cursor = self
            .db
            .students()
            .find(filter, None)
            .await
            .map_err(AppError::from)?;

        let mut students = Vec::new();
        while let Some(student) = cursor.try_next().await.map_err(AppError::from)? {
            students.push(student);
        }
        Ok(students)
    }

    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        let mut cursor = self
            .db
            .students()
            .find(None, None)
            .await
            .map_err(AppError::from)?;

        let mut students = Vec::new();
        while let Some(student) = cursor.try_next().await.map_err(AppError::from)? {
            students.push(student);
        }
        Ok(students)
    }

    async fn insert(&self, student: &Student) -> Result<(), AppError> {
        self.db
            .students()
            .insert_one(student, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert student '{}' into database: {}",
                    student.name,
                    e
                );
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn replace_fields(
        &self,
        old_name: &str,
        record: &StudentRecord,
    ) -> Result<(), AppError> {
        self.db
            .students()
            .update_one(
                doc! { "name": old_name },
                doc! { "$set": {
                    "name": &record.name,
                    "college": &record.college,
                    "father": &record.father,
                    "mother": &record.mother,
                    "marks10": record.marks10,
                    "marks12": record.marks12,
                    "school10": &record.school10,
                    "school12": &record.school12,
                } },
                None,
            )
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, AppError> {
        let result = self
            .db
            .students()
            .delete_one(doc! { "name": name }, None)
            .await
            .map_err(AppError::from)?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
