use serde::{Deserialize, Serialize};

/// A pet owner. Referenced by pets, never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub owner_id: i64,
    pub name: String,
}
