use std::collections::HashMap;

use serde::Deserialize;

use super::{District, Province, Regency};

/// On-disk shape of the region dataset (`indonesia_regions.json`)
#[derive(Debug, Deserialize)]
pub struct RegionDocument {
    #[serde(default)]
    pub provinces: Vec<Province>,
    #[serde(default)]
    pub regencies: Vec<Regency>,
    #[serde(default)]
    pub districts: Vec<District>,
}

/// Positions into the dataset vectors, keyed by id and by parent id.
///
/// Child lists keep dataset order. When an id appears more than once the
/// first occurrence is the one returned by id lookups.
#[derive(Debug, Default)]
struct RegionIndex {
    provinces: HashMap<i64, usize>,
    regencies: HashMap<i64, usize>,
    districts: HashMap<i64, usize>,
    regencies_by_province: HashMap<i64, Vec<usize>>,
    districts_by_regency: HashMap<i64, Vec<usize>>,
}

/// Immutable, indexed snapshot of the three region levels.
#[derive(Debug, Deserialize)]
#[serde(from = "RegionDocument")]
pub struct RegionDataset {
    provinces: Vec<Province>,
    regencies: Vec<Regency>,
    districts: Vec<District>,
    index: RegionIndex,
}

impl From<RegionDocument> for RegionDataset {
    fn from(doc: RegionDocument) -> Self {
        Self::new(doc.provinces, doc.regencies, doc.districts)
    }
}

impl RegionDataset {
    pub fn new(provinces: Vec<Province>, regencies: Vec<Regency>, districts: Vec<District>) -> Self {
        let mut index = RegionIndex::default();

        for (pos, province) in provinces.iter().enumerate() {
            index.provinces.entry(province.id).or_insert(pos);
        }
        for (pos, regency) in regencies.iter().enumerate() {
            index.regencies.entry(regency.id).or_insert(pos);
            index
                .regencies_by_province
                .entry(regency.province_id)
                .or_default()
                .push(pos);
        }
        for (pos, district) in districts.iter().enumerate() {
            index.districts.entry(district.id).or_insert(pos);
            index
                .districts_by_regency
                .entry(district.regency_id)
                .or_default()
                .push(pos);
        }

        Self {
            provinces,
            regencies,
            districts,
            index,
        }
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn regencies(&self) -> &[Regency] {
        &self.regencies
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn province(&self, id: i64) -> Option<&Province> {
        self.index.provinces.get(&id).map(|&pos| &self.provinces[pos])
    }

    pub fn regency(&self, id: i64) -> Option<&Regency> {
        self.index.regencies.get(&id).map(|&pos| &self.regencies[pos])
    }

    pub fn district(&self, id: i64) -> Option<&District> {
        self.index.districts.get(&id).map(|&pos| &self.districts[pos])
    }

    /// Regencies whose `province_id` equals `province_id`, in dataset order
    pub fn regencies_of(&self, province_id: i64) -> Vec<&Regency> {
        self.index
            .regencies_by_province
            .get(&province_id)
            .map(|positions| positions.iter().map(|&pos| &self.regencies[pos]).collect())
            .unwrap_or_default()
    }

    /// Districts whose `regency_id` equals `regency_id`, in dataset order
    pub fn districts_of(&self, regency_id: i64) -> Vec<&District> {
        self.index
            .districts_by_regency
            .get(&regency_id)
            .map(|positions| positions.iter().map(|&pos| &self.districts[pos]).collect())
            .unwrap_or_default()
    }
}
