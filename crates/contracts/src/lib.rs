//! Shared contracts between the school-management frontend and the REST API.

pub mod domain;
