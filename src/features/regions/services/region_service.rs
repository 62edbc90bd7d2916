use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{District, Province, RegionDataset, Regency};
use crate::features::regions::services::DatasetSource;

/// Last known state of the dataset load
#[derive(Debug, Clone)]
pub struct DatasetStatus {
    pub source: String,
    pub loaded: bool,
    pub loaded_at: Option<DateTime<Utc>>,
    pub provinces: usize,
    pub regencies: usize,
    pub districts: usize,
    pub last_error: Option<String>,
}

struct LoadedDataset {
    dataset: Arc<RegionDataset>,
    loaded_at: DateTime<Utc>,
}

#[derive(Default)]
struct DatasetSlot {
    current: Option<LoadedDataset>,
    last_error: Option<String>,
}

/// Service owning the Indonesian administrative regions dataset
pub struct RegionService {
    source: Box<dyn DatasetSource>,
    slot: RwLock<DatasetSlot>,
}

impl RegionService {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self {
            source,
            slot: RwLock::new(DatasetSlot::default()),
        }
    }

    // ==================== Dataset Lifecycle ====================

    /// Load (or reload) the dataset from the configured source.
    ///
    /// A failed reload keeps the previously loaded dataset in place and only
    /// records the error.
    pub async fn load(&self) -> Result<Arc<RegionDataset>> {
        let source = self.source.describe();
        tracing::info!("Loading region dataset from {}", source);

        match self.source.load().await {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                tracing::info!(
                    "Region dataset loaded: provinces={}, regencies={}, districts={}",
                    dataset.provinces().len(),
                    dataset.regencies().len(),
                    dataset.districts().len()
                );

                let mut slot = self.slot.write().await;
                slot.current = Some(LoadedDataset {
                    dataset: Arc::clone(&dataset),
                    loaded_at: Utc::now(),
                });
                slot.last_error = None;
                Ok(dataset)
            }
            Err(e) => {
                tracing::error!("Failed to load region dataset from {}: {}", source, e);
                self.slot.write().await.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// The loaded dataset, or `DataUnavailable` when no load has succeeded yet
    pub async fn dataset(&self) -> Result<Arc<RegionDataset>> {
        let slot = self.slot.read().await;
        match (&slot.current, &slot.last_error) {
            (Some(loaded), _) => Ok(Arc::clone(&loaded.dataset)),
            (None, Some(err)) => Err(AppError::DataUnavailable(err.clone())),
            (None, None) => Err(AppError::DataUnavailable(
                "dataset has not been loaded".to_string(),
            )),
        }
    }

    pub async fn status(&self) -> DatasetStatus {
        let slot = self.slot.read().await;
        let current = slot.current.as_ref();

        DatasetStatus {
            source: self.source.describe(),
            loaded: current.is_some(),
            loaded_at: current.map(|c| c.loaded_at),
            provinces: current.map_or(0, |c| c.dataset.provinces().len()),
            regencies: current.map_or(0, |c| c.dataset.regencies().len()),
            districts: current.map_or(0, |c| c.dataset.districts().len()),
            last_error: slot.last_error.clone(),
        }
    }

    // ==================== Listing Methods ====================

    /// List all provinces with optional search
    pub async fn list_provinces(&self, search: Option<&str>) -> Result<Vec<Province>> {
        let dataset = self.dataset().await?;
        Ok(filter_by_name(dataset.provinces().iter(), search, |p| p.name.as_str()))
    }

    /// List the regencies of a province with optional search.
    ///
    /// An unknown province yields an empty list rather than an error.
    pub async fn list_regencies_by_province(
        &self,
        province_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Regency>> {
        let dataset = self.dataset().await?;
        Ok(filter_by_name(
            dataset.regencies_of(province_id).into_iter(),
            search,
            |r| r.name.as_str(),
        ))
    }

    /// List the districts of a regency with optional search
    pub async fn list_districts_by_regency(
        &self,
        regency_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<District>> {
        let dataset = self.dataset().await?;
        Ok(filter_by_name(
            dataset.districts_of(regency_id).into_iter(),
            search,
            |d| d.name.as_str(),
        ))
    }
}

/// Case-insensitive partial match on name; an empty search keeps everything
fn filter_by_name<'a, T, I, F>(items: I, search: Option<&str>, name: F) -> Vec<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
    F: Fn(&T) -> &str,
{
    match search.map(str::trim) {
        Some(term) if !term.is_empty() => {
            let term = term.to_lowercase();
            items
                .filter(|item| name(*item).to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        _ => items.cloned().collect(),
    }
}
