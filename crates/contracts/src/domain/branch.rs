use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;

/// Филиал школы.
pub type Branch = Entity<BranchInfo>;

/// Branch-specific fields carried next to `{id, name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchInfo {
    pub code: String,
    pub city: String,
}
