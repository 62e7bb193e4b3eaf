use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validated field set for one student, as accepted at the API boundary.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub name: String,
    pub college: String,
    pub father: String,
    pub mother: String,
    pub marks10: f64,
    pub marks12: f64,
    pub school10: String,
    pub school12: String,
}

/// A student biodata document as stored in the `students` collection.
///
/// `name` is the external lookup key and is kept unique by the handlers;
/// the identifier is assigned once at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub college: String,
    pub father: String,
    pub mother: String,
    pub marks10: f64,
    pub marks12: f64,
    pub school10: String,
    pub school12: String,
}

impl Student {
    pub fn new(record: StudentRecord) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: record.name,
            college: record.college,
            father: record.father,
            mother: record.mother,
            marks10: record.marks10,
            marks12: record.marks12,
            school10: record.school10,
            school12: record.school12,
        }
    }
}
