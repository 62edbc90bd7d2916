use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::filter::dtos::{FilterViewDto, SelectRequestDto, SelectionQuery};
use crate::features::filter::models::Level;
use crate::features::filter::services::{selection_codec, FilterService};
use crate::shared::types::ApiResponse;

/// Render the cascading filter for a shareable selection
#[utoipa::path(
    get,
    path = "/api/filter",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Filter state for the selection", body = ApiResponse<FilterViewDto>),
        (status = 503, description = "Region dataset unavailable")
    ),
    tag = "filter"
)]
pub async fn get_filter(
    State(service): State<Arc<FilterService>>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ApiResponse<FilterViewDto>>> {
    let query = SelectionQuery::from_query_string(raw.as_deref().unwrap_or_default());
    let state = selection_codec::decode(&query);
    let view = service.view(&state).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Change one level of the filter
///
/// Changing the province clears regency and district; changing the regency
/// clears the district.
#[utoipa::path(
    post,
    path = "/api/filter/select",
    request_body = SelectRequestDto,
    responses(
        (status = 200, description = "Filter state after the change", body = ApiResponse<FilterViewDto>),
        (status = 400, description = "Unknown level"),
        (status = 503, description = "Region dataset unavailable")
    ),
    tag = "filter"
)]
pub async fn select_level(
    State(service): State<Arc<FilterService>>,
    AppJson(body): AppJson<SelectRequestDto>,
) -> Result<Json<ApiResponse<FilterViewDto>>> {
    let level = body
        .level
        .parse::<Level>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let value = body.value.as_deref().and_then(selection_codec::parse_value);
    let state = selection_codec::decode(&body);

    let view = service.select(&state, level, value).await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}

/// Clear all three levels
#[utoipa::path(
    post,
    path = "/api/filter/reset",
    responses(
        (status = 200, description = "Empty filter state", body = ApiResponse<FilterViewDto>),
        (status = 503, description = "Region dataset unavailable")
    ),
    tag = "filter"
)]
pub async fn reset_filter(
    State(service): State<Arc<FilterService>>,
) -> Result<Json<ApiResponse<FilterViewDto>>> {
    let view = service.reset().await?;
    Ok(Json(ApiResponse::success(Some(view), None, None)))
}
