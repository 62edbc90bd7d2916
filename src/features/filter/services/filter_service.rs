use std::sync::Arc;

use crate::core::error::Result;
use crate::features::filter::dtos::{
    FilterControlDto, FilterViewDto, RegionOptionDto, SelectedRegionDto,
};
use crate::features::filter::models::{Level, SelectionState};
use crate::features::filter::services::{selection_codec, CascadeResolver};
use crate::features::regions::RegionService;
use crate::shared::constants::COUNTRY_NAME;

/// Service turning a shareable selection into the cascading filter page
pub struct FilterService {
    regions: Arc<RegionService>,
}

impl FilterService {
    pub fn new(regions: Arc<RegionService>) -> Self {
        Self { regions }
    }

    /// Render the filter for a selection decoded from the URL
    pub async fn view(&self, state: &SelectionState) -> Result<FilterViewDto> {
        let dataset = self.regions.dataset().await?;
        let resolver = CascadeResolver::new(&dataset);

        let sanitized = resolver.sanitize(state);
        if sanitized != *state {
            tracing::debug!(
                "Dropped stale selection: requested={:?}, kept={:?}",
                state,
                sanitized
            );
        }

        Ok(render(&resolver, &sanitized))
    }

    /// Change one level, cascading the reset to the levels below it
    pub async fn select(
        &self,
        state: &SelectionState,
        level: Level,
        value: Option<i64>,
    ) -> Result<FilterViewDto> {
        let dataset = self.regions.dataset().await?;
        let resolver = CascadeResolver::new(&dataset);

        let next = resolver.sanitize(state).set_level(level, value);
        tracing::debug!("Selection change: level={}, value={:?}", level, value);

        Ok(render(&resolver, &resolver.sanitize(&next)))
    }

    pub async fn reset(&self) -> Result<FilterViewDto> {
        let dataset = self.regions.dataset().await?;
        let resolver = CascadeResolver::new(&dataset);

        Ok(render(&resolver, &SelectionState::default().reset()))
    }
}

fn render(resolver: &CascadeResolver<'_>, state: &SelectionState) -> FilterViewDto {
    let selected = resolver.resolve_selected(state);

    let province_options: Vec<RegionOptionDto> = resolver
        .provinces()
        .iter()
        .map(|p| option(p.id, &p.name))
        .collect();
    let regency_options: Vec<RegionOptionDto> = resolver
        .child_regencies(state.province_id)
        .into_iter()
        .map(|r| option(r.id, &r.name))
        .collect();
    let district_options: Vec<RegionOptionDto> = resolver
        .child_districts(state.regency_id)
        .into_iter()
        .map(|d| option(d.id, &d.name))
        .collect();

    let controls = Level::ALL
        .into_iter()
        .zip([province_options, regency_options, district_options])
        .map(|(level, options)| FilterControlDto {
            level,
            label: level.label().to_string(),
            placeholder: level.placeholder().to_string(),
            enabled: level
                .parent()
                .map_or(true, |parent| state.get(parent).is_some()),
            selected: state.get(level),
            options,
        })
        .collect();

    let details: Vec<SelectedRegionDto> = [
        selected.province.map(|p| (Level::Province, p.id, &p.name)),
        selected.regency.map(|r| (Level::Regency, r.id, &r.name)),
        selected.district.map(|d| (Level::District, d.id, &d.name)),
    ]
    .into_iter()
    .flatten()
    .map(|(level, id, name)| SelectedRegionDto {
        level,
        label: level.label().to_string(),
        id,
        name: name.clone(),
    })
    .collect();

    let breadcrumb = std::iter::once(COUNTRY_NAME.to_string())
        .chain(details.iter().map(|d| d.name.clone()))
        .collect();

    let heading = selected
        .province
        .map_or_else(|| COUNTRY_NAME.to_string(), |p| p.name.clone());

    FilterViewDto {
        selection: (*state).into(),
        params: selection_codec::encode(state),
        query: selection_codec::to_query_string(state),
        controls,
        breadcrumb,
        heading,
        details,
    }
}

fn option(id: i64, name: &str) -> RegionOptionDto {
    RegionOptionDto {
        id,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{loaded_region_service, FailingSource};

    async fn service() -> FilterService {
        FilterService::new(loaded_region_service().await)
    }

    fn ids(control: &FilterControlDto) -> Vec<i64> {
        control.options.iter().map(|o| o.id).collect()
    }

    #[tokio::test]
    async fn test_empty_view() {
        let view = service().await.view(&SelectionState::default()).await.unwrap();

        let province = view.control(Level::Province).unwrap();
        assert!(province.enabled);
        assert_eq!(ids(province), vec![1, 2]);
        assert_eq!(province.placeholder, "Pilih Provinsi");

        let regency = view.control(Level::Regency).unwrap();
        assert!(!regency.enabled);
        assert!(regency.options.is_empty());

        assert!(!view.control(Level::District).unwrap().enabled);
        assert_eq!(view.breadcrumb, vec!["Indonesia"]);
        assert_eq!(view.heading, "Indonesia");
        assert!(view.details.is_empty());
        assert_eq!(view.query, "");
    }

    #[tokio::test]
    async fn test_view_with_full_selection() {
        let state = SelectionState {
            province_id: Some(1),
            regency_id: Some(10),
            district_id: Some(101),
        };
        let view = service().await.view(&state).await.unwrap();

        assert_eq!(ids(view.control(Level::Regency).unwrap()), vec![10]);
        assert_eq!(ids(view.control(Level::District).unwrap()), vec![100, 101]);
        assert!(view.control(Level::District).unwrap().enabled);
        assert_eq!(view.control(Level::District).unwrap().selected, Some(101));
        assert_eq!(
            view.breadcrumb,
            vec!["Indonesia", "DKI Jakarta", "Jakarta Selatan", "Kebayoran Baru"]
        );
        assert_eq!(view.heading, "DKI Jakarta");
        assert_eq!(view.details.len(), 3);
        assert_eq!(view.details[2].name, "Kebayoran Baru");
        assert_eq!(view.details[1].label, "Kota/Kabupaten");
        assert_eq!(view.query, "province=1&regency=10&district=101");
    }

    #[tokio::test]
    async fn test_view_drops_stale_ids() {
        let state = SelectionState {
            province_id: Some(1),
            regency_id: Some(11),
            district_id: None,
        };
        let view = service().await.view(&state).await.unwrap();

        assert_eq!(view.selection.province_id, Some(1));
        assert_eq!(view.selection.regency_id, None);
        assert_eq!(view.query, "province=1");
        assert_eq!(view.breadcrumb, vec!["Indonesia", "DKI Jakarta"]);
    }

    #[tokio::test]
    async fn test_select_province_cascades() {
        let state = SelectionState {
            province_id: Some(1),
            regency_id: Some(10),
            district_id: Some(100),
        };
        let view = service()
            .await
            .select(&state, Level::Province, Some(2))
            .await
            .unwrap();

        assert_eq!(view.query, "province=2");
        assert_eq!(ids(view.control(Level::Regency).unwrap()), vec![11, 12]);
        assert!(!view.control(Level::District).unwrap().enabled);
    }

    #[tokio::test]
    async fn test_select_clears_level() {
        let state = SelectionState {
            province_id: Some(1),
            regency_id: Some(10),
            district_id: Some(100),
        };
        let view = service()
            .await
            .select(&state, Level::District, None)
            .await
            .unwrap();

        assert_eq!(view.query, "province=1&regency=10");
        assert!(!view.params.contains_key("district"));
    }

    #[tokio::test]
    async fn test_reset() {
        let view = service().await.reset().await.unwrap();
        assert!(view.params.is_empty());
        assert_eq!(view.breadcrumb, vec!["Indonesia"]);
    }

    #[tokio::test]
    async fn test_unavailable_dataset() {
        let regions = RegionService::new(Box::new(FailingSource));
        let _ = regions.load().await;
        let service = FilterService::new(Arc::new(regions));

        let result = service.view(&SelectionState::default()).await;
        assert!(matches!(result, Err(AppError::DataUnavailable(_))));
    }
}
