use crate::features::filter::models::SelectionState;
use crate::features::regions::models::{District, Province, RegionDataset, Regency};

/// Entities behind the selected ids; `None` where unset or unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedRegions<'a> {
    pub province: Option<&'a Province>,
    pub regency: Option<&'a Regency>,
    pub district: Option<&'a District>,
}

/// Read-only view of the dataset answering "what can be picked next".
///
/// Unknown ids never raise: they behave as if nothing were selected.
#[derive(Debug, Clone, Copy)]
pub struct CascadeResolver<'a> {
    dataset: &'a RegionDataset,
}

impl<'a> CascadeResolver<'a> {
    pub fn new(dataset: &'a RegionDataset) -> Self {
        Self { dataset }
    }

    pub fn provinces(&self) -> &'a [Province] {
        self.dataset.provinces()
    }

    pub fn child_regencies(&self, province_id: Option<i64>) -> Vec<&'a Regency> {
        province_id
            .map(|id| self.dataset.regencies_of(id))
            .unwrap_or_default()
    }

    pub fn child_districts(&self, regency_id: Option<i64>) -> Vec<&'a District> {
        regency_id
            .map(|id| self.dataset.districts_of(id))
            .unwrap_or_default()
    }

    /// Look up each selected id independently of the others
    pub fn resolve_selected(&self, state: &SelectionState) -> SelectedRegions<'a> {
        SelectedRegions {
            province: state.province_id.and_then(|id| self.dataset.province(id)),
            regency: state.regency_id.and_then(|id| self.dataset.regency(id)),
            district: state.district_id.and_then(|id| self.dataset.district(id)),
        }
    }

    /// Drop every level that does not resolve or does not belong to the
    /// selected parent, together with all levels below it.
    pub fn sanitize(&self, state: &SelectionState) -> SelectionState {
        let province = state.province_id.and_then(|id| self.dataset.province(id));

        let regency = province.and_then(|p| {
            state
                .regency_id
                .and_then(|id| self.dataset.regency(id))
                .filter(|r| r.province_id == p.id)
        });

        let district = regency.and_then(|r| {
            state
                .district_id
                .and_then(|id| self.dataset.district(id))
                .filter(|d| d.regency_id == r.id)
        });

        SelectionState {
            province_id: province.map(|p| p.id),
            regency_id: regency.map(|r| r.id),
            district_id: district.map(|d| d.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::filter::models::Level;
    use crate::shared::test_helpers::sample_dataset;

    #[test]
    fn test_child_regencies_match_linear_filter() {
        let dataset = sample_dataset();
        let resolver = CascadeResolver::new(&dataset);

        for province in dataset.provinces() {
            let expected: Vec<&Regency> = dataset
                .regencies()
                .iter()
                .filter(|r| r.province_id == province.id)
                .collect();

            let children = resolver.child_regencies(Some(province.id));
            assert!(children.iter().all(|r| r.province_id == province.id));
            assert_eq!(children, expected);
        }
    }

    #[test]
    fn test_unknown_or_absent_parent_has_no_children() {
        let dataset = sample_dataset();
        let resolver = CascadeResolver::new(&dataset);

        assert!(resolver.child_regencies(None).is_empty());
        assert!(resolver.child_regencies(Some(99)).is_empty());
        assert!(resolver.child_districts(None).is_empty());
        assert!(resolver.child_districts(Some(12)).is_empty());
    }

    #[test]
    fn test_scenario_province_then_regency() {
        let dataset = sample_dataset();
        let resolver = CascadeResolver::new(&dataset);
        let state = SelectionState::default().set_level(Level::Province, Some(1));

        let regency_ids: Vec<i64> = resolver
            .child_regencies(state.province_id)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(regency_ids, vec![10]);

        let selected = resolver.resolve_selected(&state);
        assert_eq!(selected.province.map(|p| p.name.as_str()), Some("DKI Jakarta"));
        assert!(selected.regency.is_none());
        assert!(selected.district.is_none());

        let state = state.set_level(Level::Regency, Some(10));
        let district_ids: Vec<i64> = resolver
            .child_districts(state.regency_id)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(district_ids, vec![100, 101]);
    }

    #[test]
    fn test_resolve_selected_tolerates_unknown_ids() {
        let dataset = sample_dataset();
        let resolver = CascadeResolver::new(&dataset);
        let state = SelectionState {
            province_id: Some(404),
            regency_id: Some(11),
            district_id: Some(999),
        };

        let selected = resolver.resolve_selected(&state);
        assert!(selected.province.is_none());
        assert_eq!(selected.regency.map(|r| r.id), Some(11));
        assert!(selected.district.is_none());
    }

    #[test]
    fn test_sanitize_keeps_consistent_state() {
        let dataset = sample_dataset();
        let resolver = CascadeResolver::new(&dataset);
        let state = SelectionState {
            province_id: Some(1),
            regency_id: Some(10),
            district_id: Some(101),
        };

        assert_eq!(resolver.sanitize(&state), state);
    }

    #[test]
    fn test_sanitize_drops_orphans_and_mismatched_children() {
        let dataset = sample_dataset();
        let resolver = CascadeResolver::new(&dataset);

        // regency without province
        let orphan = SelectionState {
            regency_id: Some(10),
            ..Default::default()
        };
        assert!(resolver.sanitize(&orphan).is_empty());

        // Bekasi does not belong to DKI Jakarta
        let mismatched = SelectionState {
            province_id: Some(1),
            regency_id: Some(11),
            district_id: Some(110),
        };
        assert_eq!(
            resolver.sanitize(&mismatched),
            SelectionState {
                province_id: Some(1),
                ..Default::default()
            }
        );

        // unknown district under a valid regency
        let stale = SelectionState {
            province_id: Some(1),
            regency_id: Some(10),
            district_id: Some(555),
        };
        assert_eq!(resolver.sanitize(&stale).district_id, None);
        assert_eq!(resolver.sanitize(&stale).regency_id, Some(10));
    }
}
