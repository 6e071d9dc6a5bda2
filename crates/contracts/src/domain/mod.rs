//! Domain data model shared with the backend.

pub mod academic_year;
pub mod academics;
pub mod branch;
pub mod common;
pub mod reports;

// Re-exports
pub use academic_year::{AcademicYear, AcademicYearInfo};
pub use academics::{ExamType, Section, Standard};
pub use branch::{Branch, BranchInfo};
pub use common::{Entity, NoExtra};
pub use reports::{AttendanceRow, ExamScheduleRow};
