use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{
    DatasetStatusDto, DistrictResponseDto, ProvinceResponseDto, RegencyResponseDto,
    RegionSearchQuery,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// Path ids that are not integers match nothing
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn listed<T>(items: Vec<T>) -> Json<ApiResponse<Vec<T>>> {
    let total = items.len() as i64;
    Json(ApiResponse::success(Some(items), None, Some(Meta { total })))
}

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>),
        (status = 503, description = "Region dataset unavailable")
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces(query.search.as_deref()).await?;
    Ok(listed(provinces.into_iter().map(Into::into).collect()))
}

/// List regencies in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}/regencies",
    params(
        ("id" = String, Path, description = "Province id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Regencies in the province, empty for an unknown province", body = ApiResponse<Vec<RegencyResponseDto>>),
        (status = 503, description = "Region dataset unavailable")
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = match parse_id(&id) {
        Some(province_id) => {
            service
                .list_regencies_by_province(province_id, query.search.as_deref())
                .await?
        }
        None => {
            // still fail with 503 when there is nothing to answer from
            service.dataset().await?;
            Vec::new()
        }
    };
    Ok(listed(regencies.into_iter().map(Into::into).collect()))
}

// ==================== Regency Handlers ====================

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{id}/districts",
    params(
        ("id" = String, Path, description = "Regency id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Districts in the regency, empty for an unknown regency", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 503, description = "Region dataset unavailable")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = match parse_id(&id) {
        Some(regency_id) => {
            service
                .list_districts_by_regency(regency_id, query.search.as_deref())
                .await?
        }
        None => {
            service.dataset().await?;
            Vec::new()
        }
    };
    Ok(listed(districts.into_iter().map(Into::into).collect()))
}

// ==================== Dataset Handlers ====================

/// Dataset load state
#[utoipa::path(
    get,
    path = "/api/regions/dataset",
    responses(
        (status = 200, description = "Dataset status", body = ApiResponse<DatasetStatusDto>)
    ),
    tag = "regions"
)]
pub async fn get_dataset_status(
    State(service): State<Arc<RegionService>>,
) -> Json<ApiResponse<DatasetStatusDto>> {
    let status = service.status().await;
    Json(ApiResponse::success(Some(status.into()), None, None))
}

/// Retry loading the dataset from its source
#[utoipa::path(
    post,
    path = "/api/regions/dataset/reload",
    responses(
        (status = 200, description = "Dataset reloaded", body = ApiResponse<DatasetStatusDto>),
        (status = 503, description = "Reload failed")
    ),
    tag = "regions"
)]
pub async fn reload_dataset(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<DatasetStatusDto>>> {
    service.load().await?;
    let status = service.status().await;
    Ok(Json(ApiResponse::success(
        Some(status.into()),
        Some("Region dataset reloaded".to_string()),
        None,
    )))
}
