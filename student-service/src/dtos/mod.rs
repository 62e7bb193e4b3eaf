pub mod students;

pub use students::{CreateStudentResponse, MessageResponse, StudentPayload, StudentResponse};
