use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Строка журнала посещаемости одного класса.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    #[serde(rename = "studentId")]
    pub student_id: i64,
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "presentDays")]
    pub present_days: u32,
    #[serde(rename = "totalDays")]
    pub total_days: u32,
}

/// Строка расписания экзаменов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamScheduleRow {
    #[serde(rename = "examId")]
    pub exam_id: i64,
    pub subject: String,
    pub date: NaiveDate,
    #[serde(rename = "maxMarks")]
    pub max_marks: u32,
}
