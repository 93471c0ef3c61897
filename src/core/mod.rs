// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod ranker;

pub use distance::{calculate_bounding_box, format_km, haversine_distance, is_within_bounding_box};
pub use filters::matches_filter;
pub use ranker::{ProximityRanker, RankOptions};
