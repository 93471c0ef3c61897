//! PawMate Geo - proximity core for the PawMate walk-buddy app
//!
//! This library annotates walk-mate posts with their distance from the
//! user's current position and filters/ranks them by proximity and by the
//! listing's categorical filters. Geolocation acquisition, data fetching,
//! and rendering stay with the embedding application; everything here is a
//! pure in-process computation over values passed in.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{haversine_distance, matches_filter, ProximityRanker, RankOptions};
pub use crate::models::{
    AnnotatedPost, FilterUpdate, GeoError, GeoPoint, MateFilter, MatePost, PositionState,
};
