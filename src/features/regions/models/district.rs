use serde::{Deserialize, Serialize};

/// District model representing Indonesian districts (kecamatan)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: i64,
    pub name: String,
    pub regency_id: i64,
}
