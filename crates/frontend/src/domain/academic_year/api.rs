use contracts::domain::AcademicYear;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all academic years, newest first (the backend orders them)
pub async fn fetch_academic_years() -> Result<Vec<AcademicYear>, String> {
    let response = Request::get(&api_url("/api/academic-years"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch academic years: {}",
            response.status()
        ));
    }

    response
        .json::<Vec<AcademicYear>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
