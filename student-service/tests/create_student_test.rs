//! Creation tests: validation, duplicate names, marks coercion.

mod common;

use common::{student_payload, TestApp};
use reqwest::StatusCode;

#[tokio::test]
async fn create_student_succeeds_and_is_retrievable() {
    let app = TestApp::spawn().await;

    let response = app.create_student(&student_payload("Alice", "MIT")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Biodata saved successfully for Alice!");
    assert!(!body["id"].as_str().expect("id should be a string").is_empty());

    let response = app.get_student("Alice").await;
    assert_eq!(response.status(), StatusCode::OK);

    let student: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(student["name"], "Alice");
    assert_eq!(student["college"], "MIT");
    assert_eq!(student["father"], "Bob");
    assert_eq!(student["mother"], "Carol");
    assert_eq!(student["marks10"], 90.5);
    assert_eq!(student["marks12"], 88.0);
    assert_eq!(student["school10"], "PS1");
    assert_eq!(student["school12"], "PS2");
    assert!(student["id"].is_string());
}

#[tokio::test]
async fn create_with_duplicate_name_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.create_student(&student_payload("Alice", "MIT")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.create_student(&student_payload("Alice", "Stanford")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Student with name 'Alice' already exists");

    // The existing record is untouched.
    let student: serde_json::Value = app
        .get_student("Alice")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(student["college"], "MIT");
}

#[tokio::test]
async fn create_with_missing_field_names_the_field() {
    let app = TestApp::spawn().await;

    let fields = [
        "name", "college", "father", "mother", "marks10", "marks12", "school10", "school12",
    ];

    for field in fields {
        let mut body = student_payload("Alice", "MIT");
        body.as_object_mut().unwrap().remove(field);

        let response = app.create_student(&body).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "missing {} should be rejected",
            field
        );

        let error: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(error["error"], format!("{} is required", field));
    }
}

#[tokio::test]
async fn create_with_empty_field_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = student_payload("Alice", "MIT");
    body["father"] = serde_json::json!("");

    let response = app.create_student(&body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(error["error"], "father is required");
}

#[tokio::test]
async fn marks_submitted_as_strings_are_stored_as_numbers() {
    let app = TestApp::spawn().await;

    let mut body = student_payload("Alice", "MIT");
    body["marks10"] = serde_json::json!("91.25");
    body["marks12"] = serde_json::json!("78");

    let response = app.create_student(&body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let student: serde_json::Value = app
        .get_student("Alice")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(student["marks10"], 91.25);
    assert_eq!(student["marks12"], 78.0);
}

#[tokio::test]
async fn uncoercible_marks_are_an_internal_error() {
    let app = TestApp::spawn().await;

    let mut body = student_payload("Alice", "MIT");
    body["marks10"] = serde_json::json!("ninety");

    let response = app.create_student(&body).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Nothing was stored.
    let response = app.get_student("Alice").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
