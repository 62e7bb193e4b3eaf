pub mod health;
pub mod students;

pub use health::health_check;
pub use students::{
    create_student, delete_student, get_student, get_students_by_college, list_students,
    update_student,
};
