use crate::models::filter::{AgeBand, Gender, PetSex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for coordinates outside their valid range
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid coordinate: latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("invalid coordinate: longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// A latitude/longitude pair in degrees
///
/// Construct with [`GeoPoint::new`] to get range validation. Values arriving
/// through deserialization are unvalidated until [`GeoPoint::validate`] is
/// called; [`PositionState::available`] does this at ingestion so one bad
/// position never aborts a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let point = Self { lat, lng };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::InvalidLatitude(self.lat));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(GeoError::InvalidLongitude(self.lng));
        }
        Ok(())
    }

    /// The backend writes `(0, 0)` for posts saved without a location fix
    pub fn is_null_island(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// Outcome of an asynchronous geolocation request
///
/// Created loading, then resolved exactly once into either a center or an
/// error message. The core only ever reads this value; requesting or
/// cancelling geolocation belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionState {
    #[serde(default)]
    pub center: Option<GeoPoint>,
    #[serde(rename = "errMsg", default)]
    pub err_msg: Option<String>,
    #[serde(rename = "isLoading", default)]
    pub is_loading: bool,
}

impl PositionState {
    pub fn loading() -> Self {
        Self {
            center: None,
            err_msg: None,
            is_loading: true,
        }
    }

    pub fn ready(center: GeoPoint) -> Self {
        Self {
            center: Some(center),
            err_msg: None,
            is_loading: false,
        }
    }

    pub fn failed(err_msg: impl Into<String>) -> Self {
        Self {
            center: None,
            err_msg: Some(err_msg.into()),
            is_loading: false,
        }
    }

    /// The usable center, if any
    ///
    /// Returns `None` while loading, after a failure, for out-of-range
    /// coordinates, and for the `(0, 0)` no-location sentinel.
    pub fn available(&self) -> Option<GeoPoint> {
        if self.is_loading || self.err_msg.is_some() {
            return None;
        }
        self.center
            .filter(|c| c.validate().is_ok() && !c.is_null_island())
    }
}

/// Author summary attached to a mate post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MateAuthor {
    pub id: String,
    pub nickname: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub age: Option<AgeBand>,
}

/// Pet listed on a mate post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatePet {
    pub male_female: PetSex,
    #[serde(default)]
    pub neutered: Option<bool>,
    /// Weight in kilograms, when the owner recorded it
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub characteristics: Option<String>,
}

/// A walk-buddy recruitment post, as fetched from the post data source
///
/// Raw backend columns keep their snake_case names. Display-only fields the
/// presentation layer owns (images, chat handles) are not modeled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatePost {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub recruiting: bool,
    #[serde(default)]
    pub members: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub place_name: Option<String>,
    /// Scheduled walk time as the backend sends it, e.g. "2024-08-12T14:00"
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// The author's recorded location at posting time
    #[serde(default)]
    pub position: Option<PositionState>,
    #[serde(default)]
    pub author: Option<MateAuthor>,
    #[serde(default)]
    pub pets: Vec<MatePet>,
}

impl MatePost {
    /// The post's usable position, if it has one
    pub fn available_position(&self) -> Option<GeoPoint> {
        self.position.as_ref().and_then(|p| p.available())
    }

    /// The scheduled walk date, when `date_time` parses
    pub fn walk_date(&self) -> Option<chrono::NaiveDate> {
        let raw = self.date_time.as_deref()?;
        raw.get(..10)
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

/// A mate post annotated with its distance from the reference position
///
/// Derived on every filter evaluation and discarded after rendering;
/// `distance_km` is `None` whenever either endpoint is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedPost {
    #[serde(flatten)]
    pub post: MatePost,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geopoint_rejects_out_of_range() {
        assert_eq!(GeoPoint::new(91.0, 0.0), Err(GeoError::InvalidLatitude(91.0)));
        assert_eq!(
            GeoPoint::new(0.0, -181.0),
            Err(GeoError::InvalidLongitude(-181.0))
        );
        assert!(GeoPoint::new(37.5665, 126.9780).is_ok());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_position_state_lifecycle() {
        let loading = PositionState::loading();
        assert!(loading.is_loading);
        assert_eq!(loading.available(), None);

        let point = GeoPoint::new(37.5665, 126.9780).unwrap();
        let ready = PositionState::ready(point);
        assert_eq!(ready.available(), Some(point));

        let failed = PositionState::failed("permission denied");
        assert!(!failed.is_loading);
        assert_eq!(failed.available(), None);
    }

    #[test]
    fn test_null_island_is_unavailable() {
        let state = PositionState::ready(GeoPoint { lat: 0.0, lng: 0.0 });
        assert_eq!(state.available(), None);
    }

    #[test]
    fn test_out_of_range_center_is_unavailable() {
        // Deserialized positions bypass GeoPoint::new
        let state = PositionState {
            center: Some(GeoPoint { lat: 123.0, lng: 10.0 }),
            err_msg: None,
            is_loading: false,
        };
        assert_eq!(state.available(), None);
    }

    #[test]
    fn test_walk_date_parses_backend_format() {
        let post: MatePost = serde_json::from_value(serde_json::json!({
            "id": 1,
            "user_id": "u1",
            "title": "Evening walk",
            "content": "Han river park",
            "date_time": "2024-08-12T14:00"
        }))
        .unwrap();

        assert_eq!(
            post.walk_date(),
            Some(chrono::NaiveDate::from_ymd_opt(2024, 8, 12).unwrap())
        );
    }
}
