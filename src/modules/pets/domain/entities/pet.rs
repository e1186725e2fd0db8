use serde::{Deserialize, Serialize};

use super::{owner::Owner, vaccine::Vaccine};

/// A pet record together with the associations the loading query pulled in.
///
/// `owner` and `vaccines` are only populated by the eager-join queries; a
/// bare `find_by_id` leaves them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub pet_id: i64,
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
    pub row_version: i64,
    pub owner: Option<Owner>,
    pub vaccines: Vec<Vaccine>,
}

impl Pet {
    pub fn vaccine_ids(&self) -> Vec<i64> {
        self.vaccines.iter().map(|v| v.vaccine_id).collect()
    }

    pub fn has_vaccine(&self, vaccine_id: i64) -> bool {
        self.vaccines.iter().any(|v| v.vaccine_id == vaccine_id)
    }
}
