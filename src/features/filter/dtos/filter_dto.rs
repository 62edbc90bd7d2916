use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::filter::models::{Level, SelectionState};
use crate::features::filter::services::{selection_codec, ParamSource};
use crate::shared::constants::{DISTRICT_KEY, PROVINCE_KEY, REGENCY_KEY};

/// Shareable filter state as it appears in the page URL
#[derive(Debug, Clone, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SelectionQuery {
    /// Selected province id
    #[param(example = "31")]
    pub province: Option<String>,
    /// Selected regency/city id
    #[param(example = "3171")]
    pub regency: Option<String>,
    /// Selected district id
    #[param(example = "317101")]
    pub district: Option<String>,
}

impl SelectionQuery {
    /// Read the selection keys from a raw query string.
    ///
    /// When a key repeats, the first value wins and the rest are ignored.
    pub fn from_query_string(raw: &str) -> Self {
        let mut query = Self::default();

        for (key, value) in selection_codec::parse_query(raw) {
            let slot = match key.as_str() {
                PROVINCE_KEY => &mut query.province,
                REGENCY_KEY => &mut query.regency,
                DISTRICT_KEY => &mut query.district,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }
}

impl ParamSource for SelectionQuery {
    fn get_param(&self, key: &str) -> Option<&str> {
        match key {
            PROVINCE_KEY => self.province.as_deref(),
            REGENCY_KEY => self.regency.as_deref(),
            DISTRICT_KEY => self.district.as_deref(),
            _ => None,
        }
    }
}

/// Request DTO for changing one level of the filter
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SelectRequestDto {
    /// Current province id from the URL
    pub province: Option<String>,
    /// Current regency id from the URL
    pub regency: Option<String>,
    /// Current district id from the URL
    pub district: Option<String>,
    /// Level being changed: `province`, `regency` or `district`
    #[schema(example = "province")]
    pub level: String,
    /// New id, empty or missing to clear the level
    pub value: Option<String>,
}

impl ParamSource for SelectRequestDto {
    fn get_param(&self, key: &str) -> Option<&str> {
        match key {
            PROVINCE_KEY => self.province.as_deref(),
            REGENCY_KEY => self.regency.as_deref(),
            DISTRICT_KEY => self.district.as_deref(),
            _ => None,
        }
    }
}

/// Response DTO for the selected ids
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regency_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<i64>,
}

impl From<SelectionState> for SelectionDto {
    fn from(state: SelectionState) -> Self {
        Self {
            province_id: state.province_id,
            regency_id: state.regency_id,
            district_id: state.district_id,
        }
    }
}

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionOptionDto {
    pub id: i64,
    pub name: String,
}

/// Everything needed to render one of the three selects
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterControlDto {
    pub level: Level,
    pub label: String,
    pub placeholder: String,
    pub enabled: bool,
    pub selected: Option<i64>,
    pub options: Vec<RegionOptionDto>,
}

/// A selected region shown in the detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRegionDto {
    pub level: Level,
    pub label: String,
    pub id: i64,
    pub name: String,
}

/// Response DTO for the full filter page state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterViewDto {
    /// Selection after dropping unknown or inconsistent ids
    pub selection: SelectionDto,
    /// Shareable query parameters for the selection
    pub params: BTreeMap<String, String>,
    /// Same parameters as a query string, without the leading `?`
    pub query: String,
    pub controls: Vec<FilterControlDto>,
    /// `Indonesia` followed by the selected region names
    pub breadcrumb: Vec<String>,
    /// Province-level heading: the selected province, or `Indonesia`.
    /// Regency and district are listed in `details`.
    pub heading: String,
    pub details: Vec<SelectedRegionDto>,
}

#[cfg(test)]
impl FilterViewDto {
    pub fn control(&self, level: Level) -> Option<&FilterControlDto> {
        self.controls.iter().find(|c| c.level == level)
    }
}
