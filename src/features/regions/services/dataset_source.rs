use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::features::regions::models::RegionDataset;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),
}

/// Where the region dataset comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human readable location, used in logs and the status endpoint
    fn describe(&self) -> String;

    async fn load(&self) -> Result<RegionDataset, DatasetError>;
}

/// Pick an HTTP source for `http(s)://` locations, a file source otherwise
pub fn source_from_location(location: &str, timeout: Duration) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location, timeout))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Reads the dataset from a JSON file on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<RegionDataset, DatasetError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DatasetError::Io {
                path: self.describe(),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| DatasetError::Parse(e.to_string()))
    }
}

/// Fetches the dataset from a static HTTP path
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<RegionDataset, DatasetError> {
        tracing::debug!("Fetching region dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| DatasetError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DatasetError::Fetch(format!(
                "HTTP {} from {}",
                response.status(),
                self.url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DatasetError::Fetch(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| DatasetError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name))
    }

    #[tokio::test]
    async fn test_file_source_loads_dataset() {
        let path = temp_path("regions.json");
        tokio::fs::write(
            &path,
            r#"{"provinces":[{"id":11,"name":"Aceh"}],"regencies":[],"districts":[]}"#,
        )
        .await
        .unwrap();

        let dataset = FileSource::new(&path).load().await.unwrap();
        assert_eq!(dataset.province(11).unwrap().name, "Aceh");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let result = FileSource::new(temp_path("missing.json")).load().await;
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[tokio::test]
    async fn test_file_source_malformed_json() {
        let path = temp_path("broken.json");
        tokio::fs::write(&path, "{\"provinces\": [").await.unwrap();

        let result = FileSource::new(&path).load().await;
        assert!(matches!(result, Err(DatasetError::Parse(_))));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_bundled_dataset_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(crate::shared::constants::DEFAULT_DATASET_SOURCE);

        let dataset = FileSource::new(path).load().await.unwrap();
        assert!(!dataset.provinces().is_empty());
        assert!(dataset
            .regencies()
            .iter()
            .all(|r| dataset.province(r.province_id).is_some()));
        assert!(dataset
            .districts()
            .iter()
            .all(|d| dataset.regency(d.regency_id).is_some()));
        assert_eq!(dataset.regencies_of(31).len(), 3);
    }

    #[test]
    fn test_source_from_location() {
        let timeout = Duration::from_secs(1);

        let http = source_from_location("https://example.com/data/regions.json", timeout);
        assert_eq!(http.describe(), "https://example.com/data/regions.json");

        let file = source_from_location("data/indonesia_regions.json", timeout);
        assert_eq!(file.describe(), "data/indonesia_regions.json");
    }
}
