//! Region records and the read-only catalog that serves them.
//!
//! The catalog is built once at startup and never mutated. Lookups are exact,
//! case-sensitive matches on the region id.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FarmwatchError, Result};

/// One monitored region with its current metric snapshot.
///
/// Field order is the JSON field order of the overview response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub ndvi: f64,
    pub rain_forecast_48h: f64,
    pub soil_moisture: f64,
    pub drought_score: u8,
    pub pest_risk: f64,
    pub recommendation: String,
    pub action: String,
}

impl Region {
    /// Numeric value of a metric field by its JSON name.
    ///
    /// Returns `None` for text fields and unknown names.
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "ndvi" => Some(self.ndvi),
            "rain_forecast_48h" => Some(self.rain_forecast_48h),
            "soil_moisture" => Some(self.soil_moisture),
            "drought_score" => Some(f64::from(self.drought_score)),
            "pest_risk" => Some(self.pest_risk),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: HashMap<String, Region>,
}

impl RegionCatalog {
    /// Build a catalog from arbitrary records. Duplicate ids are rejected.
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Result<Self> {
        let mut map = HashMap::new();
        for r in regions {
            if map.contains_key(&r.id) {
                return Err(FarmwatchError::BadRequest(format!(
                    "duplicate region id in catalog: {}",
                    r.id
                )));
            }
            map.insert(r.id.clone(), r);
        }
        Ok(Self { regions: map })
    }

    /// The three demo regions served by default.
    pub fn builtin() -> Self {
        let regions = [
            region(
                "nagpur",
                "Nagpur Region",
                [0.52, 0.0, 0.18],
                7,
                0.3,
                "Critically low moisture in Vidarbha belt.",
                "START IRRIGATION CYCLES",
            ),
            region(
                "nashik",
                "Nashik Region",
                [0.72, 15.0, 0.40],
                2,
                0.1,
                "Good crop health. Rain predicted.",
                "DELAY FERTILIZER",
            ),
            region(
                "coastal",
                "Konkan Coast",
                [0.65, 45.0, 0.55],
                0,
                0.85,
                "High humidity causing fungal risk.",
                "PEST CONTROL ALERT",
            ),
        ];

        Self {
            regions: regions.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    /// Exact lookup by id.
    pub fn get(&self, id: &str) -> Result<&Region> {
        self.regions
            .get(id)
            .ok_or_else(|| FarmwatchError::RegionNotFound(id.to_string()))
    }

    /// Region ids in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.regions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

// [ndvi, rain_forecast_48h, soil_moisture]
fn region(
    id: &str,
    name: &str,
    readings: [f64; 3],
    drought_score: u8,
    pest_risk: f64,
    recommendation: &str,
    action: &str,
) -> Region {
    let [ndvi, rain_forecast_48h, soil_moisture] = readings;
    Region {
        id: id.into(),
        name: name.into(),
        ndvi,
        rain_forecast_48h,
        soil_moisture,
        drought_score,
        pest_risk,
        recommendation: recommendation.into(),
        action: action.into(),
    }
}
