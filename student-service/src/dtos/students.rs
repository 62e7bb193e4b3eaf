use crate::models::{Student, StudentRecord};
use crate::services::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming student payload, shared by create and update.
///
/// Every field is optional at the wire level so that presence can be checked
/// in declaration order and the first missing field reported. Marks arrive as
/// raw JSON values and are coerced to floats afterwards: clients submit them
/// both as numbers and as numeric strings.
#[derive(Debug, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub college: Option<String>,
    pub father: Option<String>,
    pub mother: Option<String>,
    pub marks10: Option<Value>,
    pub marks12: Option<Value>,
    pub school10: Option<String>,
    pub school12: Option<String>,
}

impl StudentPayload {
    /// Validates a creation payload: all eight fields present and non-empty,
    /// marks coercible to floats.
    pub fn into_record(self) -> Result<StudentRecord, AppError> {
        let name = require_string("name", self.name)?;
        let college = require_string("college", self.college)?;
        let father = require_string("father", self.father)?;
        let mother = require_string("mother", self.mother)?;
        let marks10 = require_value("marks10", self.marks10)?;
        let marks12 = require_value("marks12", self.marks12)?;
        let school10 = require_string("school10", self.school10)?;
        let school12 = require_string("school12", self.school12)?;

        Ok(StudentRecord {
            name,
            college,
            father,
            mother,
            marks10: coerce_marks("marks10", marks10)?,
            marks12: coerce_marks("marks12", marks12)?,
            school10,
            school12,
        })
    }

    /// Builds the replacement record for an update of `old_name`.
    ///
    /// `name` falls back to `old_name` when omitted. The remaining fields are
    /// accessed unconditionally; their absence surfaces as an internal error
    /// rather than a validation failure.
    pub fn into_replacement(self, old_name: &str) -> Result<StudentRecord, AppError> {
        let name = self.name.unwrap_or_else(|| old_name.to_string());

        Ok(StudentRecord {
            name,
            college: replacement_field("college", self.college)?,
            father: replacement_field("father", self.father)?,
            mother: replacement_field("mother", self.mother)?,
            marks10: coerce_marks("marks10", replacement_field("marks10", self.marks10)?)?,
            marks12: coerce_marks("marks12", replacement_field("marks12", self.marks12)?)?,
            school10: replacement_field("school10", self.school10)?,
            school12: replacement_field("school12", self.school12)?,
        })
    }
}

fn require_string(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(AppError::MissingField(field.to_string())),
    }
}

fn require_value(field: &str, value: Option<Value>) -> Result<Value, AppError> {
    match value {
        Some(Value::Null) | None => Err(AppError::MissingField(field.to_string())),
        Some(Value::String(s)) if s.is_empty() => Err(AppError::MissingField(field.to_string())),
        Some(v) => Ok(v),
    }
}

fn replacement_field<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!("'{}' missing from replacement payload", field))
    })
}

fn coerce_marks(field: &str, value: Value) -> Result<f64, AppError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("could not convert {} to float", field))
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
            AppError::InternalError(anyhow::anyhow!(
                "could not convert string to float: '{}'",
                s
            ))
        }),
        other => Err(AppError::InternalError(anyhow::anyhow!(
            "could not convert {} to float: {}",
            field,
            other
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
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

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            college: student.college,
            father: student.father,
            mother: student.mother,
            marks10: student.marks10,
            marks12: student.marks12,
            school10: student.school10,
            school12: student.school12,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateStudentResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
