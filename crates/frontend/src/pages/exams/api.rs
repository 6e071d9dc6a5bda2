use contracts::domain::ExamScheduleRow;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the exam schedule for one exam type of an academic year
pub async fn fetch_schedule(
    academic_year_id: i64,
    exam_type_id: i64,
) -> Result<Vec<ExamScheduleRow>, String> {
    let response = Request::get(&api_url(&format!(
        "/api/exams/schedule?academicYear={}&examType={}",
        academic_year_id, exam_type_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch schedule: {}", response.status()));
    }

    response
        .json::<Vec<ExamScheduleRow>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
