use serde::{Deserialize, Serialize};

/// Regency model representing Indonesian regencies/cities (kabupaten/kota)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub id: i64,
    pub name: String,
    pub province_id: i64,
}
