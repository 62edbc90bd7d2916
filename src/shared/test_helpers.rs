#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::features::regions::models::{District, Province, RegionDataset, Regency};
#[cfg(test)]
use crate::features::regions::services::{DatasetError, DatasetSource, RegionService};

/// Small dataset covering two provinces, one of them without districts.
///
/// - 1 DKI Jakarta -> 10 Jakarta Selatan -> 100 Kebayoran Lama, 101 Kebayoran Baru
/// - 2 Jawa Barat -> 11 Bekasi -> 110 Bekasi Timur
/// - 2 Jawa Barat -> 12 Bandung (no districts)
#[cfg(test)]
pub fn sample_dataset() -> RegionDataset {
    RegionDataset::new(
        vec![
            Province {
                id: 1,
                name: "DKI Jakarta".to_string(),
            },
            Province {
                id: 2,
                name: "Jawa Barat".to_string(),
            },
        ],
        vec![
            Regency {
                id: 10,
                name: "Jakarta Selatan".to_string(),
                province_id: 1,
            },
            Regency {
                id: 11,
                name: "Bekasi".to_string(),
                province_id: 2,
            },
            Regency {
                id: 12,
                name: "Bandung".to_string(),
                province_id: 2,
            },
        ],
        vec![
            District {
                id: 100,
                name: "Kebayoran Lama".to_string(),
                regency_id: 10,
            },
            District {
                id: 101,
                name: "Kebayoran Baru".to_string(),
                regency_id: 10,
            },
            District {
                id: 110,
                name: "Bekasi Timur".to_string(),
                regency_id: 11,
            },
        ],
    )
}

/// Source that always yields [`sample_dataset`]
#[cfg(test)]
pub struct StaticSource;

#[cfg(test)]
impl StaticSource {
    pub fn sample() -> Self {
        StaticSource
    }
}

#[cfg(test)]
#[async_trait]
impl DatasetSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn load(&self) -> Result<RegionDataset, DatasetError> {
        Ok(sample_dataset())
    }
}

/// Source that always fails, as an unreachable static host would
#[cfg(test)]
pub struct FailingSource;

#[cfg(test)]
#[async_trait]
impl DatasetSource for FailingSource {
    fn describe(&self) -> String {
        "failing".to_string()
    }

    async fn load(&self) -> Result<RegionDataset, DatasetError> {
        Err(DatasetError::Fetch("host unreachable".to_string()))
    }
}

#[cfg(test)]
pub async fn loaded_region_service() -> Arc<RegionService> {
    let service = RegionService::new(Box::new(StaticSource::sample()));
    service
        .load()
        .await
        .expect("static dataset always loads");
    Arc::new(service)
}
