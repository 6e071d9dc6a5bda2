use contracts::domain::AttendanceRow;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the attendance register of one section for an academic year
pub async fn fetch_register(
    branch_id: i64,
    academic_year_id: i64,
    section_id: i64,
) -> Result<Vec<AttendanceRow>, String> {
    let response = Request::get(&api_url(&format!(
        "/api/attendance/register?branch={}&academicYear={}&section={}",
        branch_id, academic_year_id, section_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch register: {}", response.status()));
    }

    response
        .json::<Vec<AttendanceRow>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
