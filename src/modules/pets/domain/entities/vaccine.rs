use serde::{Deserialize, Serialize};

/// A vaccine from the clinic catalog. Referenced by pets, never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccine {
    pub vaccine_id: i64,
    pub name: String,
}
