//! Common types for all filter dimensions.

use serde::{Deserialize, Serialize};

/// Empty extension payload for dimensions that carry nothing beyond `{id, name}`.
///
/// A braced struct (not a unit struct) so it composes with `#[serde(flatten)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoExtra {}

/// Элемент списка кандидатов одного измерения фильтра.
///
/// Structurally every dimension only needs `{id, name}`; dimension-specific
/// fields live in the typed extension `X` and are flattened into the same
/// JSON object on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<X = NoExtra> {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: X,
}

impl Entity {
    /// Create an entity without an extension payload.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: NoExtra {},
        }
    }
}

impl<X> Entity<X> {
    /// Create an entity with a dimension-specific payload.
    pub fn with_extra(id: i64, name: impl Into<String>, extra: X) -> Self {
        Self {
            id,
            name: name.into(),
            extra,
        }
    }
}
