/// Root of the region hierarchy, shown first in the breadcrumb
pub const COUNTRY_NAME: &str = "Indonesia";

/// Default location of the region dataset (file path or http(s) URL)
pub const DEFAULT_DATASET_SOURCE: &str = "data/indonesia_regions.json";

// =============================================================================
// QUERY KEYS
// =============================================================================

pub const PROVINCE_KEY: &str = "province";
pub const REGENCY_KEY: &str = "regency";
pub const DISTRICT_KEY: &str = "district";
