use utoipa::{Modify, OpenApi};

use crate::features::filter::{dtos as filter_dtos, handlers as filter_handlers};
use crate::features::regions::{dtos as region_dtos, handlers as region_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        region_handlers::list_provinces,
        region_handlers::list_regencies_by_province,
        region_handlers::list_districts_by_regency,
        region_handlers::get_dataset_status,
        region_handlers::reload_dataset,
        // Filter
        filter_handlers::get_filter,
        filter_handlers::select_level,
        filter_handlers::reset_filter,
    ),
    components(
        schemas(
            Meta,
            region_dtos::ProvinceResponseDto,
            region_dtos::RegencyResponseDto,
            region_dtos::DistrictResponseDto,
            region_dtos::DatasetStatusDto,
            filter_dtos::SelectRequestDto,
            filter_dtos::SelectionDto,
            filter_dtos::RegionOptionDto,
            filter_dtos::FilterControlDto,
            filter_dtos::SelectedRegionDto,
            filter_dtos::FilterViewDto,
            ApiResponse<Vec<region_dtos::ProvinceResponseDto>>,
            ApiResponse<Vec<region_dtos::RegencyResponseDto>>,
            ApiResponse<Vec<region_dtos::DistrictResponseDto>>,
            ApiResponse<region_dtos::DatasetStatusDto>,
            ApiResponse<filter_dtos::FilterViewDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts)"),
        (name = "filter", description = "Cascading region filter with shareable query state"),
    ),
    info(
        title = "Wilayah Filter API",
        version = "0.1.0",
        description = "API documentation for the wilayah filter",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_filter_and_region_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/filter",
            "/api/filter/select",
            "/api/filter/reset",
            "/api/regions/provinces",
            "/api/regions/provinces/{id}/regencies",
            "/api/regions/regencies/{id}/districts",
            "/api/regions/dataset",
            "/api/regions/dataset/reload",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
