//! Indonesian administrative regions (wilayah) feature.
//!
//! Owns the region dataset, loaded once from a static JSON document and shared
//! read-only afterwards.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota), keyed to a province
//! - Level 3: Districts (Kecamatan), keyed to a regency
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{id}/regencies` | List regencies in a province |
//! | GET | `/api/regions/regencies/{id}/districts` | List districts in a regency |
//! | GET | `/api/regions/dataset` | Dataset load status |
//! | POST | `/api/regions/dataset/reload` | Retry loading the dataset |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
