use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;

/// Учебный год.
pub type AcademicYear = Entity<AcademicYearInfo>;

/// Academic-year fields carried next to `{id, name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicYearInfo {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "isCurrent", default)]
    pub is_current: bool,
}
