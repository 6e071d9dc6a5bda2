use contracts::domain::Branch;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the branches available to the current user
pub async fn fetch_branches() -> Result<Vec<Branch>, String> {
    let response = Request::get(&api_url("/api/branches"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch branches: {}", response.status()));
    }

    response
        .json::<Vec<Branch>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
