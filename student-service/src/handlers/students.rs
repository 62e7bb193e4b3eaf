use crate::dtos::{CreateStudentResponse, MessageResponse, StudentPayload, StudentResponse};
use crate::models::Student;
use crate::services::AppError;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let record = payload.into_record()?;

    // Check-then-insert; concurrent creates of the same name can race, which
    // mirrors the store-level behavior (no unique index on `name`).
    if state.store.find_by_name(&record.name).await?.is_some() {
        return Err(AppError::Conflict(anyhow::anyhow!(
            "Student with name '{}' already exists",
            record.name
        )));
    }

    let student = Student::new(record);
    state.store.insert(&student).await?;

    tracing::info!(student_id = %student.id, name = %student.name, "Student record created");

    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse {
            message: format!("Biodata saved successfully for {}!", student.name),
            id: student.id,
        }),
    ))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = state
        .store
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No biodata found for '{}'", name)))?;

    Ok(Json(StudentResponse::from(student)))
}

pub async fn get_students_by_college(
    State(state): State<AppState>,
    Path(college_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let students = state.store.find_by_college(&college_name).await?;

    // An empty match is an empty list, not an error.
    let students: Vec<StudentResponse> = students.into_iter().map(StudentResponse::from).collect();
    Ok(Json(students))
}

pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.store.list_all().await?;

    let students: Vec<StudentResponse> = students.into_iter().map(StudentResponse::from).collect();
    Ok(Json(students))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(old_name): Path<String>,
    Json(payload): Json<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    state
        .store
        .find_by_name(&old_name)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No biodata found for '{}'", old_name)))?;

    let record = payload.into_replacement(&old_name)?;

    // A rename must not take a name already held by another record.
    if record.name != old_name && state.store.find_by_name(&record.name).await?.is_some() {
        return Err(AppError::Conflict(anyhow::anyhow!(
            "Student with name '{}' already exists",
            record.name
        )));
    }

    state.store.replace_fields(&old_name, &record).await?;

    tracing::info!(old_name = %old_name, name = %record.name, "Student record updated");

    Ok(Json(MessageResponse {
        message: "Biodata updated successfully!".to_string(),
    }))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.store.delete_by_name(&name).await?;

    if deleted == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No biodata found for '{}'",
            name
        )));
    }

    tracing::info!(name = %name, "Student record deleted");

    Ok(Json(MessageResponse {
        message: format!("Biodata for '{}' deleted successfully!", name),
    }))
}
