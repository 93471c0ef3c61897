use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Owner gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// Owner age bracket, as recorded at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "10s")]
    Teens,
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s")]
    Forties,
    #[serde(rename = "50s+")]
    FiftyPlus,
}

/// Pet sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSex {
    Female,
    Male,
}

/// Pet weight bracket in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightBand {
    #[serde(rename = "under_5kg")]
    UnderFive,
    #[serde(rename = "5_to_10kg")]
    FiveToTen,
    #[serde(rename = "10_to_20kg")]
    TenToTwenty,
    #[serde(rename = "over_20kg")]
    OverTwenty,
}

impl WeightBand {
    /// Whether a recorded weight falls inside this bracket
    pub fn contains(&self, weight_kg: f64) -> bool {
        match self {
            WeightBand::UnderFive => weight_kg < 5.0,
            WeightBand::FiveToTen => (5.0..10.0).contains(&weight_kg),
            WeightBand::TenToTwenty => (10.0..20.0).contains(&weight_kg),
            WeightBand::OverTwenty => weight_kg >= 20.0,
        }
    }
}

/// A single change to a [`MateFilter`]
///
/// Closed set of recognized fields; no stringly-typed field names.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Gender(Option<Gender>),
    Age(Option<AgeBand>),
    WalkDate(Option<NaiveDate>),
    PetSex(Option<PetSex>),
    Weight(Option<WeightBand>),
    Region(Option<String>),
    MaxDistanceKm(Option<f64>),
}

/// The mate-listing filter configuration
///
/// Each field is independently optional; `None` means no constraint.
/// Updates return a new value instead of mutating in place, so the
/// presentation layer can hold the previous state for free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MateFilter {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<AgeBand>,
    #[serde(default)]
    pub date_time: Option<NaiveDate>,
    #[serde(default)]
    pub male_female: Option<PetSex>,
    #[serde(default)]
    pub weight: Option<WeightBand>,
    #[serde(default)]
    pub regions: Option<String>,
    #[serde(rename = "maxDistanceKm", default)]
    pub max_distance_km: Option<f64>,
}

impl MateFilter {
    /// Apply one change, returning the updated copy
    pub fn update(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Gender(v) => next.gender = v,
            FilterUpdate::Age(v) => next.age = v,
            FilterUpdate::WalkDate(v) => next.date_time = v,
            FilterUpdate::PetSex(v) => next.male_female = v,
            FilterUpdate::Weight(v) => next.weight = v,
            FilterUpdate::Region(v) => next.regions = v,
            FilterUpdate::MaxDistanceKm(v) => next.max_distance_km = v,
        }
        next
    }

    /// The canonical unconstrained state
    pub fn reset() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_returns_copy() {
        let original = MateFilter::default();
        let updated = original.update(FilterUpdate::Gender(Some(Gender::Female)));

        assert_eq!(updated.gender, Some(Gender::Female));
        assert_eq!(original.gender, None);

        // Every other field is untouched
        assert_eq!(updated.age, original.age);
        assert_eq!(updated.date_time, original.date_time);
        assert_eq!(updated.male_female, original.male_female);
        assert_eq!(updated.weight, original.weight);
        assert_eq!(updated.regions, original.regions);
        assert_eq!(updated.max_distance_km, original.max_distance_km);
    }

    #[test]
    fn test_updates_chain() {
        let filter = MateFilter::default()
            .update(FilterUpdate::Age(Some(AgeBand::Twenties)))
            .update(FilterUpdate::MaxDistanceKm(Some(10.0)))
            .update(FilterUpdate::Region(Some("Seoul".to_string())));

        assert_eq!(filter.age, Some(AgeBand::Twenties));
        assert_eq!(filter.max_distance_km, Some(10.0));
        assert_eq!(filter.regions.as_deref(), Some("Seoul"));
    }

    #[test]
    fn test_reset_is_all_none() {
        let filter = MateFilter::default()
            .update(FilterUpdate::Weight(Some(WeightBand::FiveToTen)))
            .update(FilterUpdate::PetSex(Some(PetSex::Male)));

        assert_ne!(filter, MateFilter::default());
        assert_eq!(MateFilter::reset(), MateFilter::default());
        // Reset ignores prior state entirely
        assert_eq!(filter.update(FilterUpdate::Weight(None)).weight, None);
    }

    #[test]
    fn test_weight_band_boundaries() {
        assert!(WeightBand::UnderFive.contains(4.9));
        assert!(!WeightBand::UnderFive.contains(5.0));
        assert!(WeightBand::FiveToTen.contains(5.0));
        assert!(WeightBand::TenToTwenty.contains(10.0));
        assert!(WeightBand::OverTwenty.contains(20.0));
    }

    #[test]
    fn test_filter_serializes_known_values() {
        let filter = MateFilter::default()
            .update(FilterUpdate::Gender(Some(Gender::Female)))
            .update(FilterUpdate::Weight(Some(WeightBand::UnderFive)));

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["gender"], "female");
        assert_eq!(json["weight"], "under_5kg");
    }
}
