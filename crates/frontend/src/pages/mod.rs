pub mod attendance;
pub mod exams;
