mod dataset_source;
mod region_service;

pub use dataset_source::{source_from_location, DatasetError, DatasetSource};
pub use region_service::{DatasetStatus, RegionService};
