//! Candidate providers for the screen-local academic dimensions. Unlike the
//! global providers these are parameterized by upstream selections.

use contracts::domain::{ExamType, Section, Standard};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the standards (параллели) taught at a branch
pub async fn fetch_standards(branch_id: i64) -> Result<Vec<Standard>, String> {
    let response = Request::get(&api_url(&format!("/api/branches/{}/standards", branch_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch standards: {}", response.status()));
    }

    response
        .json::<Vec<Standard>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the sections of one standard
pub async fn fetch_sections(standard_id: i64) -> Result<Vec<Section>, String> {
    let response = Request::get(&api_url(&format!("/api/standards/{}/sections", standard_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch sections: {}", response.status()));
    }

    response
        .json::<Vec<Section>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the exam types defined for an academic year
pub async fn fetch_exam_types(academic_year_id: i64) -> Result<Vec<ExamType>, String> {
    let response = Request::get(&api_url(&format!(
        "/api/academic-years/{}/exam-types",
        academic_year_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch exam types: {}", response.status()));
    }

    response
        .json::<Vec<ExamType>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
