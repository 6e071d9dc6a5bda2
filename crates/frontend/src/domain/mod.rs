//! Per-dimension candidate providers and page-level data queries.

pub mod academic_year;
pub mod academics;
pub mod branch;
